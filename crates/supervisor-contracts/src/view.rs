//! View identifiers and local UI enums.
//!
//! The dashboard shows exactly one `ViewState` at a time. Tabs, overlays and
//! the filter time range are small closed enumerations held in the
//! navigation state container.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SupervisorError;

/// Which panel is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewState {
    Home,
    Institution,
    Resource,
    Service,
    Operation,
    Quality,
    Finance,
    /// Per-hospital finance breakdown, reached from `Finance`.
    FinanceDetail,
}

impl ViewState {
    /// The six monitoring domains in quick-access order.
    pub const DOMAINS: [ViewState; 6] = [
        ViewState::Institution,
        ViewState::Resource,
        ViewState::Service,
        ViewState::Operation,
        ViewState::Quality,
        ViewState::Finance,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ViewState::Home => "监管首页",
            ViewState::Institution => "机构监管",
            ViewState::Resource => "资源监管",
            ViewState::Service => "业务监管",
            ViewState::Operation => "运行监管",
            ViewState::Quality => "质量监管",
            ViewState::Finance => "财务监管",
            ViewState::FinanceDetail => "财务构成分析",
        }
    }

    /// Where the back action leads.
    pub fn parent(self) -> ViewState {
        match self {
            ViewState::FinanceDetail => ViewState::Finance,
            _ => ViewState::Home,
        }
    }

    /// Kebab-case name used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::Institution => "institution",
            ViewState::Resource => "resource",
            ViewState::Service => "service",
            ViewState::Operation => "operation",
            ViewState::Quality => "quality",
            ViewState::Finance => "finance",
            ViewState::FinanceDetail => "finance-detail",
        }
    }

    /// Domain panels carry the filter bar and the selected-region chip.
    pub fn has_filter(self) -> bool {
        !matches!(self, ViewState::Home | ViewState::FinanceDetail)
    }
}

impl FromStr for ViewState {
    type Err = SupervisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        [
            ViewState::Home,
            ViewState::Institution,
            ViewState::Resource,
            ViewState::Service,
            ViewState::Operation,
            ViewState::Quality,
            ViewState::Finance,
            ViewState::FinanceDetail,
        ]
        .into_iter()
        .find(|v| v.slug() == normalized)
        .ok_or_else(|| SupervisorError::UnknownView {
            name: s.to_string(),
        })
    }
}

/// Tabs of the resource panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResourceTab {
    #[default]
    Doctor,
    Patient,
}

impl ResourceTab {
    pub fn toggle(self) -> Self {
        match self {
            ResourceTab::Doctor => ResourceTab::Patient,
            ResourceTab::Patient => ResourceTab::Doctor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceTab::Doctor => "医生资源",
            ResourceTab::Patient => "患者分析",
        }
    }
}

/// Tabs of the service panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceTab {
    /// Institution-to-institution remote care (H2H).
    #[default]
    B2b,
    /// Institution-to-patient internet hospital services.
    Toc,
}

impl ServiceTab {
    pub fn toggle(self) -> Self {
        match self {
            ServiceTab::B2b => ServiceTab::Toc,
            ServiceTab::Toc => ServiceTab::B2b,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceTab::B2b => "远程医疗 (H2H)",
            ServiceTab::Toc => "互联网医疗 (ToC)",
        }
    }

    pub fn volume_label(self) -> &'static str {
        match self {
            ServiceTab::B2b => "本月远程医疗服务总量",
            ServiceTab::Toc => "本月互联网医疗服务总量",
        }
    }
}

/// A popup drawn over the current view. At most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    None,
    RegionSelector,
    /// Right-hand filter drawer on domain panels.
    Filter,
    RoleMenu,
    DoctorQualification,
}

/// Time dimension offered by the filter drawer. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    ThisMonth,
    LastMonth,
    YearToDate,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::ThisMonth, TimeRange::LastMonth, TimeRange::YearToDate];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::ThisMonth => "本月",
            TimeRange::LastMonth => "上月",
            TimeRange::YearToDate => "本年累计",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TimeRange::ThisMonth => TimeRange::LastMonth,
            TimeRange::LastMonth => TimeRange::YearToDate,
            TimeRange::YearToDate => TimeRange::ThisMonth,
        }
    }
}
