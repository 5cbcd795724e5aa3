//! # supervisor-mock
//!
//! Hardcoded, fictional datasets for the supervisory dashboard.
//!
//! Nothing here is fetched or persisted. The region hierarchy backs the
//! `RegionDirectory` trait from `supervisor-core`; every other module returns
//! the fixed records one monitoring panel displays.

pub mod finance;
pub mod institutions;
pub mod operations;
pub mod quality;
pub mod regions;
pub mod resources;
pub mod roles;
pub mod services;

use serde_json::{json, Value};
use tracing::debug;

use supervisor_contracts::{
    records::{KpiCard, NamedValue},
    view::{ServiceTab, ViewState},
};

pub use regions::{get_dashboard_data, StaticRegions, REGIONS};

/// Project homepage linked from the role menu.
pub const PROJECT_HOMEPAGE: &str = "https://tutu2momo.github.com/supervisorysystem";

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn card(label: &str, value: &str, unit: &str, sub: &str) -> KpiCard {
    KpiCard {
        label: label.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
        sub: sub.to_string(),
    }
}

pub(crate) fn named(name: &str, value: u64) -> NamedValue {
    NamedValue {
        name: name.to_string(),
        value,
    }
}

// ── Panel snapshots ──────────────────────────────────────────────────────────

/// Everything one panel shows, as a JSON document.
///
/// `region` only affects the home panel; the domain datasets are fixed.
/// The finance detail is taken for the first key institution.
pub fn panel_snapshot(view: ViewState, region: &str) -> Value {
    debug!(view = view.slug(), region, "building panel snapshot");
    match view {
        ViewState::Home => json!({
            "dashboard": get_dashboard_data(region),
        }),
        ViewState::Institution => json!({
            "summary": institutions::summary(),
            "institutions": institutions::institutions(),
        }),
        ViewState::Resource => json!({
            "doctors": {
                "kpi": resources::doctor_kpis(),
                "titles": resources::title_distribution(),
                "list": resources::doctors(),
            },
            "patients": {
                "kpi": resources::patient_kpis(),
                "list": resources::patients(),
            },
        }),
        ViewState::Service => json!({
            "kpi": services::service_kpis(),
            "b2b": {
                "categories": services::categories_for(ServiceTab::B2b),
                "rankings": services::rankings_for(ServiceTab::B2b),
                "monthly_volume": services::monthly_volume(ServiceTab::B2b),
            },
            "toc": {
                "categories": services::categories_for(ServiceTab::Toc),
                "rankings": services::rankings_for(ServiceTab::Toc),
                "monthly_volume": services::monthly_volume(ServiceTab::Toc),
            },
            "hospitals": services::hospital_profiles(),
        }),
        ViewState::Operation => json!({
            "kpi": operations::operation_kpis(),
            "rankings": operations::city_rankings(),
            "details": operations::city_details(),
            "trend": operations::daily_trend(),
        }),
        ViewState::Quality => json!({
            "summary": quality::summary(),
            "regional": quality::regional(),
            "service_scores": quality::service_scores(),
            "hospital_scores": quality::hospital_scores(),
            "negative_reviews": quality::negative_reviews(),
        }),
        ViewState::Finance => json!({
            "kpi": finance::finance_kpis(),
            "regional": finance::regional_analysis(),
            "institutions": finance::institutions(),
        }),
        ViewState::FinanceDetail => {
            let detail = finance::institutions()
                .first()
                .map(finance::detail_for);
            json!({ "detail": detail })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_has_a_snapshot() {
        let views = [
            ViewState::Home,
            ViewState::Institution,
            ViewState::Resource,
            ViewState::Service,
            ViewState::Operation,
            ViewState::Quality,
            ViewState::Finance,
            ViewState::FinanceDetail,
        ];
        for view in views {
            let snapshot = panel_snapshot(view, "贵州省");
            assert!(snapshot.is_object(), "{:?} snapshot is not an object", view);
            assert!(
                !snapshot.as_object().map(|o| o.is_empty()).unwrap_or(true),
                "{:?} snapshot is empty",
                view
            );
        }
    }

    #[test]
    fn home_snapshot_follows_region() {
        let snapshot = panel_snapshot(ViewState::Home, "遵义市");
        assert_eq!(snapshot["dashboard"]["kpi"]["total_volume"], 1_247_469);
        assert_eq!(snapshot["dashboard"]["region"]["type"], "City");
    }

    #[test]
    fn finance_detail_snapshot_uses_first_institution() {
        let snapshot = panel_snapshot(ViewState::FinanceDetail, "贵州省");
        assert_eq!(snapshot["detail"]["hospital_name"], "贵州省人民医院");
        assert_eq!(snapshot["detail"]["services"].as_array().map(Vec::len), Some(9));
    }

    #[test]
    fn homepage_is_https() {
        assert!(PROJECT_HOMEPAGE.starts_with("https://"));
    }
}
