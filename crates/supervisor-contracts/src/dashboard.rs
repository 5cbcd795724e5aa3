//! Home-screen view-model produced by the region projection.
//!
//! Every number here is a display-only approximation derived from fixed
//! base constants. Nothing in this module is aggregated from records.

use std::fmt;

use serde::Serialize;

use crate::region::Region;

/// The three-tier region multiplier.
///
/// Stored as per-mille so scaling is exact integer arithmetic:
/// `floor(base × m)` is `base × per_mille / 1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scale {
    /// Top-level region, multiplier 1.
    Full,
    /// City-level region, multiplier 0.3.
    City,
    /// County and below, multiplier 0.05.
    Local,
}

impl Scale {
    pub fn per_mille(self) -> u64 {
        match self {
            Scale::Full => 1000,
            Scale::City => 300,
            Scale::Local => 50,
        }
    }

    /// The multiplier as a float, for display only.
    pub fn multiplier(self) -> f64 {
        self.per_mille() as f64 / 1000.0
    }

    /// `floor(base × m)`.
    pub fn apply(self, base: u64) -> u64 {
        base * self.per_mille() / 1000
    }

    /// `floor(base × m × factor)`.
    pub fn apply_with(self, base: u64, factor: u64) -> u64 {
        base * self.per_mille() * factor / 1000
    }
}

/// Which level of region the home ranking compares.
///
/// Always one level below the selected scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RankingCategory {
    City,
    County,
    /// Individual institutions, shown at county scope.
    Hospital,
}

impl RankingCategory {
    pub fn title(self) -> &'static str {
        match self {
            RankingCategory::City => "州市活跃度 (Top 5)",
            RankingCategory::County => "区县活跃度 (Top 5)",
            RankingCategory::Hospital => "机构活跃度 (Top 5)",
        }
    }
}

/// Unit suffix of the revenue figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevenueUnit {
    /// 亿 (10^8 yuan).
    Yi,
    /// 千万 (10^7 yuan).
    QianWan,
}

impl RevenueUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            RevenueUnit::Yi => "亿",
            RevenueUnit::QianWan => "千万",
        }
    }
}

/// A revenue amount with two fixed decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Revenue {
    /// Amount × 100, so 3.18 is stored as 318.
    pub hundredths: u64,
    pub unit: RevenueUnit,
}

impl fmt::Display for Revenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}{}",
            self.hundredths / 100,
            self.hundredths % 100,
            self.unit.suffix()
        )
    }
}

/// Headline numbers for the selected region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpi {
    /// Month-to-date service volume.
    pub total_volume: u64,
    pub today_volume: u64,
    /// Connected institutions.
    pub institutions: u64,
    pub internet_hospitals: u64,
    /// Institutions on the remote-care network.
    pub networked_institutions: u64,
    /// "99%" at province scope, "100%" elsewhere.
    pub coverage: &'static str,
    pub revenue: Revenue,
    pub revenue_label: &'static str,
}

/// One weekday of the two-channel trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub day: &'static str,
    /// Institution-to-institution (H2H) volume.
    pub remote: u64,
    /// Institution-to-patient (ToC) volume.
    pub internet: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub name: &'static str,
    pub value: u64,
}

/// The complete home-screen view-model for one region selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    /// The region the name resolved to.
    pub region: Region,
    pub scale: Scale,
    pub kpi: Kpi,
    /// Seven points, Monday first.
    pub trend: Vec<TrendPoint>,
    /// Top five, highest first.
    pub rankings: Vec<RankingEntry>,
    pub ranking_category: RankingCategory,
}

impl DashboardData {
    pub fn ranking_title(&self) -> &'static str {
        self.ranking_category.title()
    }
}
