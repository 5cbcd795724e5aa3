//! Region-scaled home-screen projection.
//!
//! `dashboard_data` turns a region name into the home view-model by
//! multiplying a handful of fixed base constants by a three-tier scale.
//! The output is a presentation heuristic, not an aggregation: nothing here
//! reads the domain records.
//!
//! ```text
//!   name ──resolve──▶ Region ──scale_for──▶ Scale ──▶ Kpi / trend / rankings
//! ```
//!
//! The function is total. Unknown names resolve to the root region.

use tracing::debug;

use supervisor_contracts::{
    dashboard::{
        DashboardData, Kpi, RankingCategory, RankingEntry, Revenue, RevenueUnit, Scale,
        TrendPoint,
    },
    region::{Region, RegionType},
};

use crate::traits::RegionDirectory;

// ── Base constants ───────────────────────────────────────────────────────────

/// Month-to-date service volume at province scope.
pub const BASE_VOLUME: u64 = 4_158_230;
pub const BASE_TODAY_VOLUME: u64 = 14_520;
/// Revenue in hundredths of 亿.
pub const BASE_REVENUE_HUNDREDTHS: u64 = 1_060;
/// Institutions on the remote-care network.
pub const BASE_NETWORKED_INSTITUTIONS: u64 = 342;
pub const BASE_INTERNET_HOSPITALS: u64 = 75;
/// All connected institutions.
pub const BASE_INSTITUTIONS: u64 = 1_245;

const WEEKDAYS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];
const REMOTE_TREND: [u64; 7] = [100_000, 95_000, 110_000, 105_000, 120_000, 80_000, 75_000];
const INTERNET_TREND: [u64; 7] = [240_000, 210_000, 260_000, 250_000, 280_000, 190_000, 180_000];

const CITY_RANKING: [(&str, u64); 5] = [
    ("贵阳市", 85),
    ("遵义市", 72),
    ("毕节市", 64),
    ("六盘水", 58),
    ("安顺市", 45),
];

/// Fallback county names used when a city lists fewer than four children.
const DEFAULT_COUNTIES: [&str; 4] = ["南明区", "云岩区", "观山湖区", "花溪区"];
const COUNTY_BASES: [u64; 5] = [25, 22, 19, 15, 12];
const TRAILING_COUNTY: &str = "白云区";
const COUNTY_FACTOR: u64 = 3;

const HOSPITAL_RANKING: [(&str, u64); 5] = [
    ("区人民医院", 8),
    ("中医院", 6),
    ("妇幼保健院", 5),
    ("第一社区", 3),
    ("第二社区", 2),
];
const HOSPITAL_FACTOR: u64 = 10;

// ── Resolution ───────────────────────────────────────────────────────────────

/// Resolve a region name against the listed regions.
///
/// Names without an entry of their own, including names that only appear
/// as another region's child, resolve to the root.
pub fn resolve(directory: &dyn RegionDirectory, name: &str) -> Region {
    if let Some(region) = directory.find(name) {
        return *region;
    }

    let root = *directory.root();
    debug!(region = name, fallback = root.name, "unknown region, using root");
    root
}

/// The multiplier tier for a resolved region.
pub fn scale_for(directory: &dyn RegionDirectory, region: &Region) -> Scale {
    if region.name == directory.root().name {
        Scale::Full
    } else if region.kind == RegionType::City {
        Scale::City
    } else {
        Scale::Local
    }
}

/// Rankings always compare regions one level below the selected scope.
pub fn ranking_category(scale: Scale) -> RankingCategory {
    match scale {
        Scale::Full => RankingCategory::City,
        Scale::City => RankingCategory::County,
        Scale::Local => RankingCategory::Hospital,
    }
}

// ── Projection ───────────────────────────────────────────────────────────────

/// Build the home view-model for `region_name`.
pub fn dashboard_data(directory: &dyn RegionDirectory, region_name: &str) -> DashboardData {
    let region = resolve(directory, region_name);
    let scale = scale_for(directory, &region);
    let ranking_category = ranking_category(scale);

    debug!(
        region = region.name,
        multiplier = scale.multiplier(),
        ?ranking_category,
        "projecting dashboard"
    );

    DashboardData {
        region,
        scale,
        kpi: kpi(&region, scale),
        trend: trend(scale),
        rankings: rankings(&region, scale, ranking_category),
        ranking_category,
    }
}

fn kpi(region: &Region, scale: Scale) -> Kpi {
    let unit = if scale.per_mille() < 100 {
        RevenueUnit::QianWan
    } else {
        RevenueUnit::Yi
    };

    Kpi {
        total_volume: scale.apply(BASE_VOLUME),
        today_volume: scale.apply(BASE_TODAY_VOLUME),
        institutions: scale.apply(BASE_INSTITUTIONS),
        internet_hospitals: scale.apply(BASE_INTERNET_HOSPITALS),
        networked_institutions: scale.apply(BASE_NETWORKED_INSTITUTIONS),
        coverage: if scale == Scale::Full { "99%" } else { "100%" },
        revenue: Revenue {
            hundredths: scale.apply(BASE_REVENUE_HUNDREDTHS),
            unit,
        },
        revenue_label: match region.kind {
            RegionType::Province => "全省业务总量",
            RegionType::City => "全市业务总量",
            _ => "全区业务总量",
        },
    }
}

fn trend(scale: Scale) -> Vec<TrendPoint> {
    WEEKDAYS
        .iter()
        .zip(REMOTE_TREND.iter().zip(INTERNET_TREND.iter()))
        .map(|(&day, (remote, internet))| TrendPoint {
            day,
            remote: scale.apply(*remote),
            internet: scale.apply(*internet),
        })
        .collect()
}

fn rankings(region: &Region, scale: Scale, category: RankingCategory) -> Vec<RankingEntry> {
    match category {
        RankingCategory::City => CITY_RANKING
            .iter()
            .map(|&(name, value)| RankingEntry { name, value })
            .collect(),
        RankingCategory::County => {
            let names = (0..DEFAULT_COUNTIES.len())
                .map(|i| region.children.get(i).copied().unwrap_or(DEFAULT_COUNTIES[i]))
                .chain(std::iter::once(TRAILING_COUNTY));
            names
                .zip(COUNTY_BASES)
                .map(|(name, base)| RankingEntry {
                    name,
                    value: scale.apply_with(base, COUNTY_FACTOR),
                })
                .collect()
        }
        RankingCategory::Hospital => HOSPITAL_RANKING
            .iter()
            .map(|&(name, base)| RankingEntry {
                name,
                value: scale.apply_with(base, HOSPITAL_FACTOR),
            })
            .collect(),
    }
}
