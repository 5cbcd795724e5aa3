//! The dashboard's single state container.
//!
//! All mutable UI state lives in `DashboardState` and changes only through
//! its methods. Every transition is total: a request that does not apply
//! in the current view is ignored and logged at debug level.
//!
//! ```text
//!   Home ──navigate──▶ Institution | Resource | Service | Operation | Quality | Finance
//!                                                                        │
//!                                              view_finance_detail ──▶ FinanceDetail
//!   back: FinanceDetail ──▶ Finance, every other panel ──▶ Home
//! ```

use tracing::debug;

use supervisor_contracts::{
    dashboard::DashboardData,
    records::{Doctor, FinanceInstitution, Role},
    view::{Overlay, ResourceTab, ServiceTab, TimeRange, ViewState},
};

use crate::{projection::dashboard_data, traits::RegionDirectory};

#[derive(Debug, Clone)]
pub struct DashboardState {
    view: ViewState,
    region: String,
    root_region: String,
    role: Role,
    resource_tab: ResourceTab,
    service_tab: ServiceTab,
    overlay: Overlay,
    hospital_filter: Option<String>,
    selected_hospital: Option<FinanceInstitution>,
    selected_doctor: Option<Doctor>,
    time_range: TimeRange,
    /// Selected row in the current panel.
    cursor: usize,
    /// Selected row in the open overlay.
    overlay_cursor: usize,
}

impl DashboardState {
    /// Start on the home view with the root region selected.
    pub fn new(directory: &dyn RegionDirectory, role: Role) -> Self {
        let root = directory.root().name.to_string();
        Self {
            view: ViewState::Home,
            region: root.clone(),
            root_region: root,
            role,
            resource_tab: ResourceTab::default(),
            service_tab: ServiceTab::default(),
            overlay: Overlay::None,
            hospital_filter: None,
            selected_hospital: None,
            selected_doctor: None,
            time_range: TimeRange::default(),
            cursor: 0,
            overlay_cursor: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn resource_tab(&self) -> ResourceTab {
        self.resource_tab
    }

    pub fn service_tab(&self) -> ServiceTab {
        self.service_tab
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn hospital_filter(&self) -> Option<&str> {
        self.hospital_filter.as_deref()
    }

    pub fn selected_hospital(&self) -> Option<&FinanceInstitution> {
        self.selected_hospital.as_ref()
    }

    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.selected_doctor.as_ref()
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn overlay_cursor(&self) -> usize {
        self.overlay_cursor
    }

    /// True when a region other than the root is selected. Drives the
    /// "已选条件" chip bar on domain panels.
    pub fn is_region_filtered(&self) -> bool {
        self.region != self.root_region
    }

    /// Labels of the active filter chips, region first.
    pub fn active_conditions(&self) -> Vec<&str> {
        let mut chips = Vec::new();
        if self.is_region_filtered() {
            chips.push(self.region.as_str());
        }
        if let Some(hospital) = self.hospital_filter.as_deref() {
            chips.push(hospital);
        }
        chips
    }

    /// Home projection for the selected region.
    pub fn dashboard(&self, directory: &dyn RegionDirectory) -> DashboardData {
        dashboard_data(directory, &self.region)
    }

    // ── View transitions ─────────────────────────────────────────────────────

    /// Switch to `view`. The finance detail needs a selected hospital and is
    /// otherwise ignored.
    pub fn navigate(&mut self, view: ViewState) {
        if view == ViewState::FinanceDetail && self.selected_hospital.is_none() {
            debug!("finance detail requested without a hospital, ignoring");
            return;
        }
        debug!(from = ?self.view, to = ?view, "navigate");
        self.view = view;
        self.cursor = 0;
        self.close_overlay();
    }

    /// Return to the parent view. Leaving a domain panel for home drops its
    /// tabs, hospital filter and time range.
    pub fn back(&mut self) {
        let parent = self.view.parent();
        if parent == self.view {
            self.close_overlay();
            return;
        }
        debug!(from = ?self.view, to = ?parent, "back");
        self.close_overlay();
        if parent == ViewState::Home {
            self.reset_panel_state();
        }
        self.view = parent;
        self.cursor = 0;
    }

    pub fn view_finance_detail(&mut self, institution: FinanceInstitution) {
        debug!(hospital = %institution.name, "open finance detail");
        self.selected_hospital = Some(institution);
        self.view = ViewState::FinanceDetail;
        self.cursor = 0;
        self.close_overlay();
    }

    fn reset_panel_state(&mut self) {
        self.resource_tab = ResourceTab::default();
        self.service_tab = ServiceTab::default();
        self.hospital_filter = None;
        self.selected_doctor = None;
        self.time_range = TimeRange::default();
    }

    // ── Filters ──────────────────────────────────────────────────────────────

    /// Select a region. Closes the region selector but leaves the filter
    /// drawer open.
    pub fn set_region(&mut self, name: &str) {
        debug!(region = name, "set region");
        self.region = name.to_string();
        self.cursor = 0;
        if self.overlay == Overlay::RegionSelector {
            self.close_overlay();
        }
    }

    pub fn clear_region(&mut self) {
        let root = self.root_region.clone();
        self.set_region(&root);
    }

    pub fn set_hospital_filter(&mut self, hospital: Option<String>) {
        debug!(hospital = ?hospital, "set hospital filter");
        self.hospital_filter = hospital;
    }

    pub fn clear_hospital_filter(&mut self) {
        self.set_hospital_filter(None);
    }

    pub fn cycle_time_range(&mut self) {
        self.time_range = self.time_range.next();
    }

    // ── Overlays ─────────────────────────────────────────────────────────────

    /// Open a popup. The filter drawer is only offered on domain panels and
    /// the qualification popup only through `select_doctor`.
    pub fn open_overlay(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::Filter if !self.view.has_filter() => {
                debug!(view = ?self.view, "no filter drawer on this view");
                return;
            }
            Overlay::DoctorQualification if self.selected_doctor.is_none() => return,
            _ => {}
        }
        self.overlay = overlay;
        self.overlay_cursor = 0;
    }

    pub fn close_overlay(&mut self) {
        if self.overlay == Overlay::DoctorQualification {
            self.selected_doctor = None;
        }
        self.overlay = Overlay::None;
        self.overlay_cursor = 0;
    }

    pub fn toggle_role_menu(&mut self) {
        if self.overlay == Overlay::RoleMenu {
            self.close_overlay();
        } else {
            self.open_overlay(Overlay::RoleMenu);
        }
    }

    pub fn select_role(&mut self, role: Role) {
        debug!(role = %role.id, "switch role");
        self.role = role;
        self.close_overlay();
    }

    pub fn select_doctor(&mut self, doctor: Doctor) {
        self.selected_doctor = Some(doctor);
        self.open_overlay(Overlay::DoctorQualification);
    }

    // ── Tabs and cursor ──────────────────────────────────────────────────────

    /// Flip the tab of the current panel. No-op on panels without tabs.
    pub fn toggle_tab(&mut self) {
        match self.view {
            ViewState::Resource => self.resource_tab = self.resource_tab.toggle(),
            ViewState::Service => self.service_tab = self.service_tab.toggle(),
            _ => return,
        }
        self.cursor = 0;
    }

    pub fn cursor_up(&mut self) {
        let cursor = self.active_cursor();
        *cursor = cursor.saturating_sub(1);
    }

    /// Move down within a list of `len` rows.
    pub fn cursor_down(&mut self, len: usize) {
        let cursor = self.active_cursor();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    fn active_cursor(&mut self) -> &mut usize {
        if self.overlay == Overlay::None {
            &mut self.cursor
        } else {
            &mut self.overlay_cursor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixtureRegions;

    fn role(id: &str, name: &str) -> Role {
        Role {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn state() -> DashboardState {
        DashboardState::new(&FixtureRegions, role("SUPER", "超级管理员"))
    }

    fn hospital() -> FinanceInstitution {
        FinanceInstitution {
            name: "贵州省人民医院".to_string(),
            level: "三级甲等".to_string(),
            address: "贵阳市中山东路1号".to_string(),
            revenue: "¥570,146".to_string(),
        }
    }

    fn doctor() -> Doctor {
        Doctor {
            id: 1,
            name: "刘伟".to_string(),
            title: "主任医师".to_string(),
            dept: "心内科".to_string(),
            hospital: "贵州省人民医院".to_string(),
            volume: 1540,
            score: 4.9,
            status: "合规".to_string(),
        }
    }

    // ── 1. Initial state ────────────────────────────────────────────────────

    #[test]
    fn starts_home_at_root() {
        let s = state();
        assert_eq!(s.view(), ViewState::Home);
        assert_eq!(s.region(), "贵州省");
        assert!(!s.is_region_filtered());
        assert_eq!(s.overlay(), Overlay::None);
        assert!(s.active_conditions().is_empty());
    }

    // ── 2. Navigation ───────────────────────────────────────────────────────

    #[test]
    fn navigate_and_back_to_home() {
        let mut s = state();
        s.navigate(ViewState::Quality);
        assert_eq!(s.view(), ViewState::Quality);
        s.back();
        assert_eq!(s.view(), ViewState::Home);
    }

    #[test]
    fn finance_detail_requires_hospital() {
        let mut s = state();
        s.navigate(ViewState::Finance);
        s.navigate(ViewState::FinanceDetail);
        assert_eq!(s.view(), ViewState::Finance, "detail without hospital must be ignored");
    }

    #[test]
    fn back_from_finance_detail_lands_on_finance() {
        let mut s = state();
        s.navigate(ViewState::Finance);
        s.view_finance_detail(hospital());
        assert_eq!(s.view(), ViewState::FinanceDetail);
        assert_eq!(s.selected_hospital().map(|h| h.name.as_str()), Some("贵州省人民医院"));

        s.back();
        assert_eq!(s.view(), ViewState::Finance);
        s.back();
        assert_eq!(s.view(), ViewState::Home);
    }

    #[test]
    fn back_on_home_only_closes_overlay() {
        let mut s = state();
        s.open_overlay(Overlay::RegionSelector);
        s.back();
        assert_eq!(s.view(), ViewState::Home);
        assert_eq!(s.overlay(), Overlay::None);
    }

    #[test]
    fn leaving_panel_resets_local_state() {
        let mut s = state();
        s.navigate(ViewState::Resource);
        s.toggle_tab();
        s.set_hospital_filter(Some("贵州省肿瘤医院".to_string()));
        s.cycle_time_range();
        s.set_region("遵义市");

        s.back();
        assert_eq!(s.resource_tab(), ResourceTab::Doctor);
        assert!(s.hospital_filter().is_none());
        assert_eq!(s.time_range(), TimeRange::ThisMonth);
        // The region is global and survives.
        assert_eq!(s.region(), "遵义市");
    }

    // ── 3. Overlays ─────────────────────────────────────────────────────────

    #[test]
    fn filter_drawer_only_on_domain_panels() {
        let mut s = state();
        s.open_overlay(Overlay::Filter);
        assert_eq!(s.overlay(), Overlay::None);

        s.navigate(ViewState::Operation);
        s.open_overlay(Overlay::Filter);
        assert_eq!(s.overlay(), Overlay::Filter);
    }

    #[test]
    fn region_selector_closes_on_pick_but_filter_stays_open() {
        let mut s = state();
        s.open_overlay(Overlay::RegionSelector);
        s.set_region("贵阳市");
        assert_eq!(s.overlay(), Overlay::None);

        s.navigate(ViewState::Institution);
        s.open_overlay(Overlay::Filter);
        s.set_region("南明区");
        assert_eq!(s.overlay(), Overlay::Filter);
        assert_eq!(s.region(), "南明区");
    }

    #[test]
    fn navigate_closes_overlays() {
        let mut s = state();
        s.open_overlay(Overlay::RegionSelector);
        s.navigate(ViewState::Service);
        assert_eq!(s.overlay(), Overlay::None);
    }

    #[test]
    fn role_menu_toggles_and_select_closes() {
        let mut s = state();
        s.toggle_role_menu();
        assert_eq!(s.overlay(), Overlay::RoleMenu);
        s.toggle_role_menu();
        assert_eq!(s.overlay(), Overlay::None);

        s.toggle_role_menu();
        s.select_role(role("CITY", "市级监管平台"));
        assert_eq!(s.role().id, "CITY");
        assert_eq!(s.overlay(), Overlay::None);
    }

    #[test]
    fn doctor_qualification_clears_on_close() {
        let mut s = state();
        s.navigate(ViewState::Resource);

        s.open_overlay(Overlay::DoctorQualification);
        assert_eq!(s.overlay(), Overlay::None, "needs a selected doctor");

        s.select_doctor(doctor());
        assert_eq!(s.overlay(), Overlay::DoctorQualification);
        assert_eq!(s.selected_doctor().map(|d| d.name.as_str()), Some("刘伟"));

        s.close_overlay();
        assert!(s.selected_doctor().is_none());
    }

    // ── 4. Filters and chips ────────────────────────────────────────────────

    #[test]
    fn clear_region_returns_to_root() {
        let mut s = state();
        s.set_region("云岩区");
        assert!(s.is_region_filtered());
        s.clear_region();
        assert_eq!(s.region(), "贵州省");
        assert!(!s.is_region_filtered());
    }

    #[test]
    fn active_conditions_list_region_then_hospital() {
        let mut s = state();
        s.navigate(ViewState::Resource);
        s.set_region("贵阳市");
        s.set_hospital_filter(Some("贵州省人民医院".to_string()));
        assert_eq!(s.active_conditions(), ["贵阳市", "贵州省人民医院"]);

        s.clear_hospital_filter();
        assert_eq!(s.active_conditions(), ["贵阳市"]);
    }

    #[test]
    fn dashboard_follows_region() {
        let mut s = state();
        assert_eq!(s.dashboard(&FixtureRegions).kpi.total_volume, 4_158_230);
        s.set_region("遵义市");
        assert_eq!(s.dashboard(&FixtureRegions).kpi.total_volume, 1_247_469);
    }

    // ── 5. Tabs and cursor ──────────────────────────────────────────────────

    #[test]
    fn toggle_tab_per_panel() {
        let mut s = state();
        s.toggle_tab();
        assert_eq!(s.resource_tab(), ResourceTab::Doctor, "home has no tabs");

        s.navigate(ViewState::Service);
        s.toggle_tab();
        assert_eq!(s.service_tab(), ServiceTab::Toc);
        assert_eq!(s.resource_tab(), ResourceTab::Doctor);
    }

    #[test]
    fn cursor_is_bounded() {
        let mut s = state();
        s.cursor_up();
        assert_eq!(s.cursor(), 0);
        for _ in 0..10 {
            s.cursor_down(3);
        }
        assert_eq!(s.cursor(), 2);
        s.cursor_down(0);
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn overlay_has_its_own_cursor() {
        let mut s = state();
        s.cursor_down(5);
        s.open_overlay(Overlay::RegionSelector);
        s.cursor_down(5);
        s.cursor_down(5);
        assert_eq!(s.overlay_cursor(), 2);
        assert_eq!(s.cursor(), 1);

        s.close_overlay();
        assert_eq!(s.overlay_cursor(), 0);
        assert_eq!(s.cursor(), 1);
    }
}
