//! Application state owned by the event loop, and the key bindings that
//! drive it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use supervisor_contracts::{
    records::Role,
    view::{Overlay, ResourceTab, ViewState},
};
use supervisor_core::{
    filter::{hospital_options, region_options, selector_entries, HospitalOption, RegionOption},
    DashboardState,
};
use supervisor_mock::{
    finance, institutions, operations, quality, resources, roles, services, StaticRegions,
};

/// One selectable row of the filter drawer, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRow {
    Region(RegionOption),
    TimeRange,
    Hospital(HospitalOption),
    /// 确定: closes the drawer.
    Confirm,
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    pub state: DashboardState,
    pub directory: StaticRegions,
    pub should_quit: bool,
    /// Footer shows the project homepage instead of the key hints.
    pub show_about: bool,
}

impl App {
    pub fn new(role: Role, region: &str) -> Self {
        let directory = StaticRegions;
        let mut state = DashboardState::new(&directory, role);
        state.set_region(region);
        Self {
            state,
            directory,
            should_quit: false,
            show_about: false,
        }
    }

    pub fn filter_rows(&self) -> Vec<FilterRow> {
        let mut rows: Vec<FilterRow> = region_options(&self.directory, self.state.region())
            .into_iter()
            .map(FilterRow::Region)
            .collect();
        rows.push(FilterRow::TimeRange);
        rows.extend(
            hospital_options(&institutions::institutions())
                .into_iter()
                .map(FilterRow::Hospital),
        );
        rows.push(FilterRow::Confirm);
        rows
    }

    /// Number of rows the cursor can move through on the active surface.
    pub fn list_len(&self) -> usize {
        match self.state.overlay() {
            Overlay::RegionSelector => selector_entries(&self.directory, self.state.region()).len(),
            Overlay::Filter => self.filter_rows().len(),
            Overlay::RoleMenu => roles::roles().len(),
            Overlay::DoctorQualification => 0,
            Overlay::None => match self.state.view() {
                ViewState::Home => ViewState::DOMAINS.len(),
                ViewState::Institution => institutions::institutions().len(),
                ViewState::Resource => match self.state.resource_tab() {
                    ResourceTab::Doctor => resources::doctors().len(),
                    ResourceTab::Patient => resources::patients().len(),
                },
                ViewState::Service => services::hospital_profiles().len(),
                ViewState::Operation => operations::city_details().len(),
                ViewState::Quality => quality::negative_reviews().len(),
                ViewState::Finance => finance::institutions().len(),
                ViewState::FinanceDetail => self
                    .state
                    .selected_hospital()
                    .map(|h| finance::detail_for(h).services.len())
                    .unwrap_or(0),
            },
        }
    }

    // ── Key handling ─────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let overlay_open = self.state.overlay() != Overlay::None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                if overlay_open {
                    self.state.close_overlay();
                } else {
                    self.state.back();
                }
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Up | KeyCode::Char('k') => self.state.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.list_len();
                self.state.cursor_down(len);
            }
            KeyCode::Char('r') => self.toggle_overlay(Overlay::RegionSelector),
            KeyCode::Char('p') => self.state.toggle_role_menu(),
            KeyCode::Char('f') => self.toggle_overlay(Overlay::Filter),
            KeyCode::Char('t') if self.state.overlay() == Overlay::Filter => {
                self.state.cycle_time_range();
            }

            // Everything below acts on the view, not on a popup.
            _ if overlay_open => {}

            KeyCode::Char(c @ '1'..='6') if self.state.view() == ViewState::Home => {
                let index = usize::from(c as u8 - b'1');
                self.state.navigate(ViewState::DOMAINS[index]);
            }
            KeyCode::Tab => self.state.toggle_tab(),
            KeyCode::Char('x') => self.state.clear_region(),
            KeyCode::Char('h') => self.state.clear_hospital_filter(),
            KeyCode::Char('?') => self.show_about = !self.show_about,
            _ => {}
        }
    }

    fn toggle_overlay(&mut self, overlay: Overlay) {
        if self.state.overlay() == overlay {
            self.state.close_overlay();
        } else {
            self.state.open_overlay(overlay);
        }
    }

    /// Enter: apply the highlighted popup option, or open the highlighted row.
    fn activate(&mut self) {
        let index = self.state.overlay_cursor();
        match self.state.overlay() {
            Overlay::RegionSelector => {
                let entries = selector_entries(&self.directory, self.state.region());
                if let Some(entry) = entries.get(index) {
                    self.state.set_region(entry.name);
                }
            }
            Overlay::Filter => match self.filter_rows().get(index) {
                Some(FilterRow::Region(option)) => self.state.set_region(option.name),
                Some(FilterRow::TimeRange) => self.state.cycle_time_range(),
                Some(FilterRow::Hospital(option)) => {
                    self.state.set_hospital_filter(option.value.clone());
                }
                Some(FilterRow::Confirm) => self.state.close_overlay(),
                None => {}
            },
            Overlay::RoleMenu => {
                if let Some(role) = roles::roles().into_iter().nth(index) {
                    self.state.select_role(role);
                }
            }
            Overlay::DoctorQualification => self.state.close_overlay(),
            Overlay::None => self.open_row(),
        }
    }

    fn open_row(&mut self) {
        let cursor = self.state.cursor();
        match self.state.view() {
            ViewState::Home => {
                if let Some(&view) = ViewState::DOMAINS.get(cursor) {
                    self.state.navigate(view);
                }
            }
            ViewState::Resource if self.state.resource_tab() == ResourceTab::Doctor => {
                if let Some(doctor) = resources::doctors().into_iter().nth(cursor) {
                    self.state.select_doctor(doctor);
                }
            }
            ViewState::Finance => {
                if let Some(institution) = finance::institutions().into_iter().nth(cursor) {
                    self.state.view_finance_detail(institution);
                }
            }
            view => debug!(?view, cursor, "row has no drill-down"),
        }
    }
}
