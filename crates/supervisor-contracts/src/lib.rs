//! # supervisor-contracts
//!
//! Shared types for the telemedicine supervisory dashboard.
//!
//! Every crate in the workspace imports from here. This crate holds data
//! definitions, view enumerations and the error type; the projection and
//! navigation logic live in `supervisor-core`.

pub mod dashboard;
pub mod error;
pub mod records;
pub mod region;
pub mod view;

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::{RankingCategory, Revenue, RevenueUnit, Scale};
    use error::SupervisorError;
    use records::{CashFlow, FinanceLineItem, PatientStatus, ReviewKind};
    use region::{Region, RegionType};
    use view::{Overlay, ResourceTab, ServiceTab, TimeRange, ViewState};

    // ── Scale ────────────────────────────────────────────────────────────────

    #[test]
    fn scale_full_leaves_base_unchanged() {
        assert_eq!(Scale::Full.apply(4_158_230), 4_158_230);
        assert_eq!(Scale::Full.apply(75), 75);
    }

    #[test]
    fn scale_floors_like_float_multiplication() {
        // 4,158,230 × 0.3 = 1,247,469.0
        assert_eq!(Scale::City.apply(4_158_230), 1_247_469);
        // 75 × 0.3 = 22.5 → 22
        assert_eq!(Scale::City.apply(75), 22);
        // 75 × 0.05 = 3.75 → 3
        assert_eq!(Scale::Local.apply(75), 3);
        // 14,520 × 0.05 = 726
        assert_eq!(Scale::Local.apply(14_520), 726);
    }

    #[test]
    fn scale_apply_with_factor() {
        // 25 × 0.3 × 3 = 22.5 → 22
        assert_eq!(Scale::City.apply_with(25, 3), 22);
        // 8 × 0.05 × 10 = 4
        assert_eq!(Scale::Local.apply_with(8, 10), 4);
    }

    #[test]
    fn scale_multiplier_values() {
        assert_eq!(Scale::Full.multiplier(), 1.0);
        assert!((Scale::City.multiplier() - 0.3).abs() < f64::EPSILON);
        assert!((Scale::Local.multiplier() - 0.05).abs() < f64::EPSILON);
    }

    // ── Revenue ──────────────────────────────────────────────────────────────

    #[test]
    fn revenue_displays_two_decimals_with_unit() {
        let yi = Revenue {
            hundredths: 318,
            unit: RevenueUnit::Yi,
        };
        assert_eq!(yi.to_string(), "3.18亿");

        let small = Revenue {
            hundredths: 53,
            unit: RevenueUnit::QianWan,
        };
        assert_eq!(small.to_string(), "0.53千万");

        let whole = Revenue {
            hundredths: 1060,
            unit: RevenueUnit::Yi,
        };
        assert_eq!(whole.to_string(), "10.60亿");
    }

    #[test]
    fn ranking_titles_are_distinct() {
        assert_eq!(RankingCategory::City.title(), "州市活跃度 (Top 5)");
        assert_eq!(RankingCategory::County.title(), "区县活跃度 (Top 5)");
        assert_eq!(RankingCategory::Hospital.title(), "机构活跃度 (Top 5)");
    }

    // ── Region ───────────────────────────────────────────────────────────────

    #[test]
    fn region_type_for_level() {
        assert_eq!(RegionType::for_level(1), RegionType::Province);
        assert_eq!(RegionType::for_level(2), RegionType::City);
        assert_eq!(RegionType::for_level(3), RegionType::County);
        assert_eq!(RegionType::for_level(4), RegionType::Street);
    }

    #[test]
    fn region_lists_direct_children_only() {
        let city = Region {
            id: "zy",
            name: "遵义市",
            kind: RegionType::City,
            level: 2,
            children: &["红花岗区", "汇川区", "播州区"],
        };
        assert!(city.has_child("汇川区"));
        assert!(!city.has_child("南明区"));
        assert!(!city.has_child("遵义市"));
    }

    #[test]
    fn region_serializes_kind_as_type() {
        let region = Region {
            id: "prov",
            name: "贵州省",
            kind: RegionType::Province,
            level: 1,
            children: &[],
        };
        let json = serde_json::to_value(region).unwrap();
        assert_eq!(json["type"], "Province");
        assert_eq!(json["name"], "贵州省");
    }

    // ── ViewState ────────────────────────────────────────────────────────────

    #[test]
    fn view_parent_of_finance_detail_is_finance() {
        assert_eq!(ViewState::FinanceDetail.parent(), ViewState::Finance);
        for view in ViewState::DOMAINS {
            assert_eq!(view.parent(), ViewState::Home, "{:?} should return home", view);
        }
    }

    #[test]
    fn view_from_str_accepts_slugs() {
        assert_eq!("finance".parse::<ViewState>().unwrap(), ViewState::Finance);
        assert_eq!(
            "Finance_Detail".parse::<ViewState>().unwrap(),
            ViewState::FinanceDetail
        );
        assert_eq!(" home ".parse::<ViewState>().unwrap(), ViewState::Home);
    }

    #[test]
    fn view_from_str_rejects_unknown_names() {
        match "billing".parse::<ViewState>() {
            Err(SupervisorError::UnknownView { name }) => assert_eq!(name, "billing"),
            other => panic!("expected UnknownView, got {:?}", other),
        }
    }

    #[test]
    fn only_domain_panels_have_filters() {
        assert!(!ViewState::Home.has_filter());
        assert!(!ViewState::FinanceDetail.has_filter());
        assert!(ViewState::DOMAINS.iter().all(|v| v.has_filter()));
    }

    // ── Tabs, overlays, time range ───────────────────────────────────────────

    #[test]
    fn tabs_toggle_and_default() {
        assert_eq!(ResourceTab::default(), ResourceTab::Doctor);
        assert_eq!(ResourceTab::Doctor.toggle(), ResourceTab::Patient);
        assert_eq!(ResourceTab::Patient.toggle(), ResourceTab::Doctor);

        assert_eq!(ServiceTab::default(), ServiceTab::B2b);
        assert_eq!(ServiceTab::B2b.toggle().toggle(), ServiceTab::B2b);
        assert_eq!(Overlay::default(), Overlay::None);
    }

    #[test]
    fn time_range_cycles_through_all() {
        let mut range = TimeRange::default();
        let mut seen = Vec::new();
        for _ in 0..TimeRange::ALL.len() {
            seen.push(range);
            range = range.next();
        }
        assert_eq!(seen, TimeRange::ALL.to_vec());
        assert_eq!(range, TimeRange::ThisMonth, "cycle must wrap around");
    }

    // ── Records ──────────────────────────────────────────────────────────────

    #[test]
    fn record_labels() {
        assert_eq!(PatientStatus::AwaitingPayment.label(), "待支付");
        assert_eq!(ReviewKind::Technical.tag(), "技术故障");
        assert_eq!(CashFlow::Expense.label(), "支出");
    }

    #[test]
    fn line_item_channel_from_tag() {
        let item = FinanceLineItem {
            name: "远程病理".to_string(),
            tag: "远程医疗 (机构-机构)".to_string(),
            flow: CashFlow::Income,
            count: 420,
            price: "¥262".to_string(),
            total: "+¥110,040".to_string(),
            percent: 14,
        };
        assert!(item.is_remote());

        let toc = FinanceLineItem {
            tag: "互联网医疗 (机构-患者)".to_string(),
            ..item
        };
        assert!(!toc.is_remote());
    }

    // ── SupervisorError display ──────────────────────────────────────────────

    #[test]
    fn error_config_display() {
        let err = SupervisorError::ConfigError {
            reason: "tick_rate_ms must be greater than zero".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"), "got: {msg}");
        assert!(msg.contains("tick_rate_ms"), "got: {msg}");
    }

    #[test]
    fn error_unknown_role_display() {
        let err = SupervisorError::UnknownRole {
            id: "ADMIN".to_string(),
        };
        assert_eq!(err.to_string(), "unknown role 'ADMIN'");
    }

    #[test]
    fn error_from_io_is_terminal() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "not a tty");
        match SupervisorError::from(io) {
            SupervisorError::Terminal { reason } => assert!(reason.contains("not a tty")),
            other => panic!("expected Terminal, got {:?}", other),
        }
    }
}
