//! The static region hierarchy of Guizhou province.

use supervisor_contracts::{
    dashboard::DashboardData,
    region::{Region, RegionType},
};
use supervisor_core::{projection::dashboard_data, traits::RegionDirectory};

/// Listed regions, root first. Names in `children` without an entry of
/// their own are still selectable; they resolve one level below their
/// parent.
pub static REGIONS: [Region; 6] = [
    Region {
        id: "prov",
        name: "贵州省",
        kind: RegionType::Province,
        level: 1,
        children: &["贵阳市", "遵义市", "安顺市", "六盘水市", "毕节市"],
    },
    Region {
        id: "gy",
        name: "贵阳市",
        kind: RegionType::City,
        level: 2,
        children: &["南明区", "云岩区", "观山湖区", "花溪区", "乌当区"],
    },
    Region {
        id: "zy",
        name: "遵义市",
        kind: RegionType::City,
        level: 2,
        children: &["红花岗区", "汇川区", "播州区"],
    },
    Region {
        id: "anshun",
        name: "安顺市",
        kind: RegionType::City,
        level: 2,
        children: &["西秀区", "平坝区"],
    },
    Region {
        id: "nanming",
        name: "南明区",
        kind: RegionType::County,
        level: 3,
        children: &["新华路街道", "市府路街道", "中华南路街道", "油榨街道"],
    },
    Region {
        id: "yunyan",
        name: "云岩区",
        kind: RegionType::County,
        level: 3,
        children: &["毓秀路街道", "威清门街道", "大营路街道"],
    },
];

/// `RegionDirectory` over [`REGIONS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRegions;

impl RegionDirectory for StaticRegions {
    fn regions(&self) -> &[Region] {
        &REGIONS
    }

    fn root(&self) -> &Region {
        &REGIONS[0]
    }
}

/// Home projection against the built-in hierarchy.
pub fn get_dashboard_data(region_name: &str) -> DashboardData {
    dashboard_data(&StaticRegions, region_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use supervisor_contracts::dashboard::{RankingCategory, Scale};

    #[test]
    fn hierarchy_has_no_cycles() {
        // Every child sits strictly below its parent.
        for parent in REGIONS.iter() {
            for child in parent.children {
                if let Some(listed) = StaticRegions.find(child) {
                    assert!(
                        listed.level > parent.level,
                        "{} must sit below {}",
                        listed.name,
                        parent.name
                    );
                }
            }
        }
    }

    #[test]
    fn levels_match_types() {
        for region in REGIONS.iter() {
            assert_eq!(
                RegionType::for_level(region.level),
                region.kind,
                "level/type mismatch for {}",
                region.name
            );
        }
    }

    #[test]
    fn root_is_province() {
        assert_eq!(StaticRegions.root().name, "贵州省");
        assert_eq!(StaticRegions.root().kind, RegionType::Province);
    }

    #[test]
    fn zunyi_scales_to_three_tenths() {
        let data = get_dashboard_data("遵义市");
        assert_eq!(data.scale, Scale::City);
        assert_eq!(data.kpi.total_volume, 1_247_469);
        assert_eq!(data.ranking_category, RankingCategory::County);
    }

    #[test]
    fn unknown_name_matches_first_region() {
        assert_eq!(get_dashboard_data("不存在"), get_dashboard_data(REGIONS[0].name));
    }

    #[test]
    fn coverage_per_listed_region() {
        for region in REGIONS.iter() {
            let coverage = get_dashboard_data(region.name).kpi.coverage;
            if region.name == "贵州省" {
                assert_eq!(coverage, "99%");
            } else {
                assert_eq!(coverage, "100%", "coverage for {}", region.name);
            }
        }
    }
}
