//! Option lists for the region selector and the panel filter drawer.

use supervisor_contracts::{
    records::Institution,
    region::{Region, RegionType},
};

use crate::traits::RegionDirectory;

/// Label of the "no hospital filter" option.
pub const ALL_HOSPITALS: &str = "全部医院";
/// Label of the root option in the filter drawer.
pub const WHOLE_PROVINCE: &str = "全省";

/// Which block of the filter drawer an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSection {
    Province,
    Cities,
    /// Counties of the currently selected city.
    Counties,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOption {
    /// Region name applied when the option is picked.
    pub name: &'static str,
    pub label: &'static str,
    pub section: OptionSection,
    pub highlighted: bool,
}

/// One row of the region selector popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    pub name: &'static str,
    /// 0 for a listed region, 1 for one of its children.
    pub depth: u8,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalOption {
    pub label: String,
    /// `None` clears the filter.
    pub value: Option<String>,
}

/// The city a region belongs to: itself if it is a listed city, otherwise
/// the listed city whose children contain it.
pub fn city_for_region<'a>(directory: &'a dyn RegionDirectory, region: &str) -> Option<&'a Region> {
    directory
        .regions()
        .iter()
        .find(|r| r.kind == RegionType::City && r.name == region)
        .or_else(|| {
            directory
                .regions()
                .iter()
                .find(|r| r.kind == RegionType::City && r.has_child(region))
        })
}

/// Region options of the filter drawer, in display order.
///
/// The root comes first, then its children. When `current` sits in a listed
/// city, that city's counties follow.
pub fn region_options(directory: &dyn RegionDirectory, current: &str) -> Vec<RegionOption> {
    let root = directory.root();
    let selected_city = city_for_region(directory, current);

    let mut options = vec![RegionOption {
        name: root.name,
        label: WHOLE_PROVINCE,
        section: OptionSection::Province,
        highlighted: current == root.name,
    }];

    options.extend(root.children.iter().map(|&city| RegionOption {
        name: city,
        label: city,
        section: OptionSection::Cities,
        highlighted: current == city || selected_city.is_some_and(|c| c.name == city),
    }));

    if let Some(city) = selected_city {
        options.extend(city.children.iter().map(|&county| RegionOption {
            name: county,
            label: county,
            section: OptionSection::Counties,
            highlighted: current == county,
        }));
    }

    options
}

/// Heading of the county block, e.g. "贵阳市 - 区县".
pub fn county_heading(directory: &dyn RegionDirectory, current: &str) -> Option<String> {
    city_for_region(directory, current).map(|c| format!("{} - 区县", c.name))
}

/// Rows of the region selector: each listed region followed by its children.
pub fn selector_entries(directory: &dyn RegionDirectory, current: &str) -> Vec<SelectorEntry> {
    directory
        .regions()
        .iter()
        .flat_map(|region| {
            std::iter::once(SelectorEntry {
                name: region.name,
                depth: 0,
                selected: region.name == current,
            })
            .chain(region.children.iter().map(move |&child| SelectorEntry {
                name: child,
                depth: 1,
                selected: child == current,
            }))
        })
        .collect()
}

/// Hospital filter choices: everything, then each institution by name.
pub fn hospital_options(institutions: &[Institution]) -> Vec<HospitalOption> {
    std::iter::once(HospitalOption {
        label: ALL_HOSPITALS.to_string(),
        value: None,
    })
    .chain(institutions.iter().map(|inst| HospitalOption {
        label: inst.name.clone(),
        value: Some(inst.name.clone()),
    }))
    .collect()
}
