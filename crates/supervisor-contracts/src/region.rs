//! Administrative region hierarchy types.
//!
//! Regions form a fixed tree (province → city → county, with street-level
//! leaves). The tree is compiled into the binary and never mutated, so
//! every field borrows `'static` data.

use serde::Serialize;

/// Administrative tier of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegionType {
    Province,
    City,
    County,
    /// Sub-district entries below county level.
    Street,
}

impl RegionType {
    /// Map a nesting level (1 = province) to its tier.
    pub fn for_level(level: u8) -> Self {
        match level {
            0 | 1 => RegionType::Province,
            2 => RegionType::City,
            3 => RegionType::County,
            _ => RegionType::Street,
        }
    }

    /// Short Chinese label used in headers.
    pub fn label(self) -> &'static str {
        match self {
            RegionType::Province => "省级",
            RegionType::City => "市级",
            RegionType::County => "区县级",
            RegionType::Street => "街道",
        }
    }
}

/// One node of the static region hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Stable short identifier, e.g. "gy".
    pub id: &'static str,
    /// Display name, e.g. "贵阳市". Used as the lookup key.
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: RegionType,
    /// Nesting depth, 1 for the province.
    pub level: u8,
    /// Names of the regions directly below this one.
    pub children: &'static [&'static str],
}

impl Region {
    /// Return true if `name` is listed as a direct child of this region.
    pub fn has_child(&self, name: &str) -> bool {
        self.children.iter().any(|c| *c == name)
    }
}
