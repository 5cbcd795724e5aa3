//! Settlement revenue across regions and institutions.

use supervisor_contracts::records::{
    CashFlow, FinanceDetail, FinanceInstitution, FinanceKpi, FinanceLineItem, RegionalFinance,
    Trend, TrendDirection,
};

use crate::owned;

fn kpi(
    label: &str,
    value: &str,
    trend: Option<(&str, TrendDirection)>,
    sub: &str,
    remote: &str,
    internet: &str,
) -> FinanceKpi {
    FinanceKpi {
        label: label.to_string(),
        value: value.to_string(),
        trend: trend.map(|(change, direction)| Trend {
            change: change.to_string(),
            direction,
        }),
        sub: sub.to_string(),
        remote_value: remote.to_string(),
        internet_value: internet.to_string(),
    }
}

/// Revenue, order volume, average cost and settling institutions.
pub fn finance_kpis() -> Vec<FinanceKpi> {
    use TrendDirection::{Down, Up};

    vec![
        kpi("全区总营收", "1,006,720,000", Some(("+12.5%", Up)), "", "402,688,000", "604,032,000"),
        kpi("总服务单量", "4,068,000", Some(("+5.2%", Up)), "", "1,220,400", "2,847,600"),
        kpi("次均费用", "247", Some(("-1.2%", Down)), "", "330", "212"),
        kpi("参与结算机构", "45", None, "0 家医疗机构", "45", "45"),
    ]
}

pub fn regional_analysis() -> Vec<RegionalFinance> {
    [
        ("贵阳市", 40, 60, "¥110,739,200", "¥166,108,800"),
        ("遵义市", 30, 70, "¥83,054,400", "¥193,793,600"),
        ("六盘水市", 20, 80, "¥55,369,600", "¥221,478,400"),
        ("安顺市", 50, 50, "¥138,424,000", "¥138,424,000"),
    ]
    .into_iter()
    .map(|(name, remote_share, internet_share, remote_revenue, internet_revenue)| RegionalFinance {
        name: name.to_string(),
        revenue: "¥276,848,000".to_string(),
        volume: "39,834".to_string(),
        remote_share,
        internet_share,
        remote_revenue: remote_revenue.to_string(),
        internet_revenue: internet_revenue.to_string(),
    })
    .collect()
}

/// Key institutions; each opens a detail breakdown.
pub fn institutions() -> Vec<FinanceInstitution> {
    [
        ("贵州省人民医院", "贵阳市中山东路1号", "¥570,146"),
        ("贵州医科大学附属医院", "贵阳市贵医街28号", "¥492,893"),
        ("贵州省肿瘤医院", "贵阳市北京西路1号", "¥262,973"),
    ]
    .into_iter()
    .map(|(name, address, revenue)| FinanceInstitution {
        name: name.to_string(),
        level: "三级甲等".to_string(),
        address: address.to_string(),
        revenue: revenue.to_string(),
    })
    .collect()
}

fn line_items() -> Vec<FinanceLineItem> {
    const H2H: &str = "远程医疗 (机构-机构)";
    const TOC: &str = "互联网医疗 (机构-患者)";
    use CashFlow::{Expense, Income};

    [
        ("远程超声示教", H2H, Income, 476, "¥346", "+¥164,696", 21),
        ("处方共享及配送", TOC, Income, 440, "¥342", "+¥150,480", 19),
        ("远程病理", H2H, Income, 420, "¥262", "+¥110,040", 14),
        ("诊后随访", TOC, Income, 384, "¥258", "+¥99,072", 13),
        ("远程影像", H2H, Income, 216, "¥306", "+¥66,096", 8),
        ("远程会诊", H2H, Expense, 364, "¥178", "-¥64,792", 0),
        ("远程查房", H2H, Income, 328, "¥174", "+¥57,072", 7),
        ("远程探视", TOC, Income, 180, "¥302", "+¥54,360", 7),
        ("远程卒中", H2H, Income, 124, "¥218", "+¥27,032", 3),
    ]
    .into_iter()
    .map(|(name, tag, flow, count, price, total, percent)| FinanceLineItem {
        name: name.to_string(),
        tag: tag.to_string(),
        flow,
        count,
        price: price.to_string(),
        total: total.to_string(),
        percent,
    })
    .collect()
}

/// Breakdown for a selected institution. The header fields come from the
/// institution when present; composition and line items are shared.
pub fn detail_for(institution: &FinanceInstitution) -> FinanceDetail {
    let or_default = |value: &str, default: &str| {
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    };

    FinanceDetail {
        hospital_name: or_default(&institution.name, "贵州省人民医院"),
        level: or_default(&institution.level, "三级甲等"),
        revenue: or_default(&institution.revenue, "¥781,248"),
        composition_remote: 65,
        composition_internet: 35,
        human_cost: 28,
        ops_cost: 15,
        profit: 57,
        settlement_expense: "- ¥45,200".to_string(),
        settlement_income: "+ ¥128,500".to_string(),
        main_partners: owned(&["贵州省人民医院", "乌当区人民医院"]),
        services: line_items(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_shares_sum_to_hundred() {
        for r in regional_analysis() {
            assert_eq!(r.remote_share + r.internet_share, 100, "{}", r.name);
        }
    }

    #[test]
    fn only_institution_card_has_no_trend() {
        let kpis = finance_kpis();
        assert_eq!(kpis.len(), 4);
        assert!(kpis[..3].iter().all(|k| k.trend.is_some()));
        assert!(kpis[3].trend.is_none());
        assert_eq!(kpis[2].trend.as_ref().map(|t| t.direction), Some(TrendDirection::Down));
    }

    #[test]
    fn detail_takes_header_from_institution() {
        let inst = &institutions()[2];
        let detail = detail_for(inst);
        assert_eq!(detail.hospital_name, "贵州省肿瘤医院");
        assert_eq!(detail.revenue, "¥262,973");
        assert_eq!(detail.services.len(), 9);
    }

    #[test]
    fn detail_falls_back_for_blank_fields() {
        let blank = FinanceInstitution {
            name: String::new(),
            level: String::new(),
            address: String::new(),
            revenue: String::new(),
        };
        let detail = detail_for(&blank);
        assert_eq!(detail.hospital_name, "贵州省人民医院");
        assert_eq!(detail.revenue, "¥781,248");
    }

    #[test]
    fn composition_and_cost_split_sum_to_hundred() {
        let d = detail_for(&institutions()[0]);
        assert_eq!(d.composition_remote + d.composition_internet, 100);
        assert_eq!(d.human_cost + d.ops_cost + d.profit, 100);
    }

    #[test]
    fn single_expense_row_has_zero_share() {
        let items = line_items();
        let expenses: Vec<_> = items.iter().filter(|i| i.flow == CashFlow::Expense).collect();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].percent, 0);
        assert!(expenses[0].total.starts_with('-'));
    }
}
