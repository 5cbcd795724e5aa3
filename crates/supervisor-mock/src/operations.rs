//! Regional operating volumes.

use supervisor_contracts::records::{DailyVolume, KpiCard, NamedValue, OperationDetail};

use crate::{card, named};

/// Total, remote-care and internet-care volume cards.
pub fn operation_kpis() -> Vec<KpiCard> {
    vec![
        card("区域业务总量", "4,158,230", "", "本月累计 (人次)"),
        card("远程医疗业务量", "1,247,400", "", "机构间协作 (H2H)"),
        card("互联网医疗业务量", "2,910,830", "", "面向患者 (ToC)"),
    ]
}

pub const RANKING_UNIT: &str = "人次";

pub fn city_rankings() -> Vec<NamedValue> {
    vec![
        named("贵阳市", 1_215_000),
        named("遵义市", 967_000),
        named("六盘水市", 726_000),
        named("安顺市", 503_000),
    ]
}

pub fn city_details() -> Vec<OperationDetail> {
    [
        ("贵阳市", 365_000, 850_000, 1_215_000, 5.2, 29.2),
        ("遵义市", 290_000, 677_000, 967_000, 5.2, 23.3),
        ("六盘水市", 218_000, 508_000, 726_000, 4.8, 17.5),
        ("安顺市", 151_000, 352_000, 503_000, 4.5, 12.1),
    ]
    .into_iter()
    .map(|(name, remote, internet, total, growth, percent)| OperationDetail {
        name: name.to_string(),
        remote,
        internet,
        total,
        growth,
        percent,
    })
    .collect()
}

/// Last seven days, oldest first.
pub fn daily_trend() -> Vec<DailyVolume> {
    [
        ("10-21", 145_000, 12),
        ("10-22", 152_000, 15),
        ("10-23", 148_000, 8),
        ("10-24", 161_000, 18),
        ("10-25", 158_000, 14),
        ("10-26", 132_000, -5),
        ("10-27", 129_000, -8),
    ]
    .into_iter()
    .map(|(name, volume, growth)| DailyVolume {
        name: name.to_string(),
        volume,
        growth,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_totals_are_channel_sums() {
        for d in city_details() {
            assert_eq!(d.remote + d.internet, d.total, "{} total mismatch", d.name);
        }
    }

    #[test]
    fn rankings_match_details() {
        let details = city_details();
        for (rank, detail) in city_rankings().iter().zip(details.iter()) {
            assert_eq!(rank.name, detail.name);
            assert_eq!(rank.value, detail.total);
        }
    }

    #[test]
    fn trend_spans_a_week_with_downturn() {
        let trend = daily_trend();
        assert_eq!(trend.len(), 7);
        assert!(trend.iter().any(|d| d.growth < 0));
    }
}
