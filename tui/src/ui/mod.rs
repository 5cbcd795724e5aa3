//! Rendering. `render` draws one frame for whichever view is active, then
//! the open popup on top of it.

mod finance;
mod home;
mod institution;
mod modals;
mod operation;
mod quality;
mod resource;
mod service;
mod widgets;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use supervisor_contracts::view::ViewState;

use crate::app::App;

pub fn render(f: &mut Frame, app: &App) {
    let view = app.state.view();

    // header, [condition chips], body, footer
    let mut constraints = vec![Constraint::Length(3)];
    if view.has_filter() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(8));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    widgets::render_header(f, chunks[0], app);
    let body = if view.has_filter() {
        widgets::render_conditions(f, chunks[1], app);
        chunks[2]
    } else {
        chunks[1]
    };

    match view {
        ViewState::Home => home::render(f, body, app),
        ViewState::Institution => institution::render(f, body, app),
        ViewState::Resource => resource::render(f, body, app),
        ViewState::Service => service::render(f, body, app),
        ViewState::Operation => operation::render(f, body, app),
        ViewState::Quality => quality::render(f, body, app),
        ViewState::Finance => finance::render(f, body, app),
        ViewState::FinanceDetail => finance::render_detail(f, body, app),
    }

    widgets::render_footer(f, chunks[chunks.len() - 1], app);
    modals::render(f, body, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use supervisor_contracts::view::{Overlay, ResourceTab};
    use supervisor_mock::{finance as finance_data, resources as resource_data, roles::default_role};

    /// Draw one frame and return the screen text with blanks removed, so
    /// the padding after wide characters does not matter.
    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).expect("test terminal");
        terminal.draw(|f| render(f, app)).expect("draw");
        flatten(terminal.backend().buffer())
    }

    fn flatten(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
            .replace(' ', "")
    }

    fn app() -> App {
        App::new(default_role(), "贵州省")
    }

    // ── 1. Home ─────────────────────────────────────────────────────────────

    #[test]
    fn home_shows_province_kpis() {
        let screen = draw(&app());
        assert!(screen.contains("远程医疗监管平台"));
        assert!(screen.contains("14,520"), "today volume missing");
        assert!(screen.contains("4,158,230"), "month volume missing");
        assert!(screen.contains("覆盖率99%"));
        assert!(screen.contains("州市活跃度"), "ranking title missing");
        assert!(screen.contains("[1]机构监管"));
    }

    #[test]
    fn home_follows_selected_region() {
        let screen = draw(&App::new(default_role(), "遵义市"));
        assert!(screen.contains("1,247,469"), "city-scaled month volume missing");
        assert!(screen.contains("覆盖率100%"));
        assert!(screen.contains("区县活跃度"));
    }

    // ── 2. Panels ───────────────────────────────────────────────────────────

    #[test]
    fn every_view_renders_its_title() {
        for view in ViewState::DOMAINS {
            let mut a = app();
            a.state.navigate(view);
            let screen = draw(&a);
            assert!(
                screen.contains(view.title()),
                "{:?} header must show {}",
                view,
                view.title()
            );
            assert!(screen.contains("已选条件"), "{:?} lacks the condition bar", view);
        }
    }

    #[test]
    fn condition_bar_shows_region_chip() {
        let mut a = App::new(default_role(), "南明区");
        a.state.navigate(ViewState::Operation);
        let screen = draw(&a);
        assert!(screen.contains("南明区✕"), "region chip missing");
    }

    #[test]
    fn patient_tab_lists_patients() {
        let mut a = app();
        a.state.navigate(ViewState::Resource);
        a.state.toggle_tab();
        assert_eq!(a.state.resource_tab(), ResourceTab::Patient);
        let screen = draw(&a);
        assert!(screen.contains("张*山"));
        assert!(screen.contains("待支付"));
    }

    #[test]
    fn patient_table_cuts_long_hospital_names() {
        let mut a = app();
        a.state.navigate(ViewState::Resource);
        a.state.toggle_tab();
        let screen = draw(&a);
        assert!(screen.contains("贵州省人民医院·心内科"), "short names stay whole");
        assert!(screen.contains("遵义医科大学附…·心外科"), "long names are cut");
        assert!(!screen.contains("遵义医科大学附属医院"));
    }

    #[test]
    fn finance_detail_shows_hospital_and_items() {
        let mut a = app();
        a.state.navigate(ViewState::Finance);
        let hospital = finance_data::institutions()
            .into_iter()
            .nth(2)
            .expect("third institution");
        a.state.view_finance_detail(hospital);
        let screen = draw(&a);
        assert!(screen.contains("贵州省肿瘤医院"));
        assert!(screen.contains("¥262,973"));
        assert!(screen.contains("远程超声示教"));
        assert!(!screen.contains("已选条件"), "detail view has no filter bar");
    }

    // ── 3. Popups ───────────────────────────────────────────────────────────

    #[test]
    fn region_selector_lists_children() {
        let mut a = app();
        a.state.open_overlay(Overlay::RegionSelector);
        let screen = draw(&a);
        assert!(screen.contains("选择区域"));
        assert!(screen.contains("贵阳市"));
    }

    #[test]
    fn filter_drawer_lists_sections() {
        let mut a = App::new(default_role(), "贵阳市");
        a.state.navigate(ViewState::Institution);
        a.state.open_overlay(Overlay::Filter);
        let screen = draw(&a);
        assert!(screen.contains("全省"));
        assert!(screen.contains("贵阳市-区县"), "county heading missing");
        assert!(screen.contains("全部医院"));
        assert!(screen.contains("确定"));
    }

    #[test]
    fn role_menu_links_homepage() {
        let mut a = app();
        a.state.toggle_role_menu();
        let screen = draw(&a);
        assert!(screen.contains("切换身份"));
        assert!(screen.contains("项目主页"));
    }

    #[test]
    fn qualification_card_shows_certificate() {
        let mut a = app();
        a.state.navigate(ViewState::Resource);
        let doctor = resource_data::doctors().into_iter().next().expect("a doctor");
        let cert = resource_data::qualification(&doctor).certificate_no;
        a.state.select_doctor(doctor);
        let screen = draw(&a);
        assert!(screen.contains("医生资质"));
        assert!(screen.contains(&cert));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let a = app();
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).expect("test terminal");
        terminal.draw(|f| render(f, &a)).expect("draw");
    }
}
