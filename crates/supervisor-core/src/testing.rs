//! Region fixture shared by the unit tests in this crate.

use supervisor_contracts::region::{Region, RegionType};

use crate::traits::RegionDirectory;

const FIXTURE: [Region; 6] = [
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

pub(crate) struct FixtureRegions;

impl RegionDirectory for FixtureRegions {
    fn regions(&self) -> &[Region] {
        &FIXTURE
    }

    fn root(&self) -> &Region {
        &FIXTURE[0]
    }
}
