//! Number and text formatting shared by the CLI and the terminal UI.

use chrono::{Local, Timelike};

use supervisor_contracts::dashboard::Revenue;

/// Group digits in threes: `4158230` → `"4,158,230"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_revenue(revenue: Revenue) -> String {
    revenue.to_string()
}

/// Rounded integer percentage of `part` in `total`. Zero when `total` is zero.
pub fn percent_of(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (part * 100 + total / 2) / total
}

/// `value / max` clamped to `[0, 1]`, for gauges and progress bars.
pub fn ratio_bar(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64).clamp(0.0, 1.0)
}

/// Time-of-day salutation for the header.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "早上好",
        12..=17 => "下午好",
        _ => "晚上好",
    }
}

pub fn greeting_now() -> &'static str {
    greeting(Local::now().hour())
}

/// Truncate to at most `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max == 0 {
        String::new()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supervisor_contracts::dashboard::RevenueUnit;

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(14_520), "14,520");
        assert_eq!(group_thousands(4_158_230), "4,158,230");
        assert_eq!(group_thousands(1_006_720_000), "1,006,720,000");
    }

    #[test]
    fn revenue_formatting() {
        let revenue = Revenue {
            hundredths: 318,
            unit: RevenueUnit::Yi,
        };
        assert_eq!(format_revenue(revenue), "3.18亿");
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(5, 0), 0);
        assert_eq!(percent_of(3200, 12_450), 26);
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(ratio_bar(35_000, 70_000), 0.5);
        assert_eq!(ratio_bar(80_000, 70_000), 1.0);
        assert_eq!(ratio_bar(1, 0), 0.0);
    }

    #[test]
    fn greeting_by_hour() {
        assert_eq!(greeting(0), "早上好");
        assert_eq!(greeting(11), "早上好");
        assert_eq!(greeting(12), "下午好");
        assert_eq!(greeting(17), "下午好");
        assert_eq!(greeting(18), "晚上好");
        assert_eq!(greeting(23), "晚上好");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("贵州省人民医院", 10), "贵州省人民医院");
        assert_eq!(truncate("贵州医科大学附属医院", 5), "贵州医科…");
        assert_eq!(truncate("abc", 1), "…");
        assert_eq!(truncate("abc", 0), "", "zero width leaves no room for the marker");
        assert_eq!(truncate("", 0), "");
    }
}
