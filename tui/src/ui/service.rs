//! 业务监管: service categories per channel, hospital rankings and the
//! per-hospital service catalogue.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{BarChart, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use supervisor_contracts::{records::HospitalServiceProfile, view::ServiceTab};
use supervisor_core::format::group_thousands;
use supervisor_mock::services;

use super::widgets::{
    field, highlight, label, muted, panel_block, ranking_lines, render_kpi_row, row_style, strong,
};
use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let tab = app.state.service_tab();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(8),
        ])
        .split(area);

    render_kpi_row(f, rows[0], &services::service_kpis());

    let all = [ServiceTab::B2b, ServiceTab::Toc];
    let tabs = Tabs::new(all.iter().map(|t| t.label()))
        .select(all.iter().position(|t| *t == tab).unwrap_or(0))
        .style(muted())
        .highlight_style(highlight());
    f.render_widget(tabs, rows[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    render_categories(f, cols[0], tab);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(cols[1]);
    let ranking = services::rankings_for(tab);
    f.render_widget(
        Paragraph::new(ranking_lines(&ranking, services::ranking_max(tab), 16))
            .block(panel_block("医院服务量排名")),
        right[0],
    );
    render_profiles(f, right[1], tab, app.state.cursor());
}

fn render_categories(f: &mut Frame, area: Rect, tab: ServiceTab) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let volume = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {}: ", tab.volume_label()), label()),
        Span::styled(group_thousands(services::monthly_volume(tab)), strong()),
        Span::styled(" 人次", muted()),
    ]))
    .block(panel_block(tab.label()));
    f.render_widget(volume, parts[0]);

    let categories = services::categories_for(tab);
    let bars: Vec<(&str, u64)> = categories
        .iter()
        .map(|c| (c.name.as_str(), u64::from(c.doctors)))
        .collect();
    let chart = BarChart::default()
        .block(panel_block("服务类型分布 (服务人次)"))
        .data(bars.as_slice())
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    f.render_widget(chart, parts[1]);
}

fn render_profiles(f: &mut Frame, area: Rect, tab: ServiceTab, cursor: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let profiles = services::hospital_profiles();
    let items: Vec<ListItem> = profiles
        .iter()
        .enumerate()
        .map(|(i, p)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}", p.name), row_style(i == cursor)),
                Span::styled(format!(" {}项", p.service_count), muted()),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel_block("机构服务")), cols[0]);

    match profiles.get(cursor) {
        Some(profile) => render_profile(f, cols[1], tab, profile),
        None => f.render_widget(panel_block("服务详情"), cols[1]),
    }
}

fn render_profile(f: &mut Frame, area: Rect, tab: ServiceTab, profile: &HospitalServiceProfile) {
    let services = match tab {
        ServiceTab::B2b => &profile.b2b_services,
        ServiceTab::Toc => &profile.toc_services,
    };
    let mut lines = vec![
        field("开通服务", format!("{} 项", profile.service_count)),
        field("医生数", group_thousands(u64::from(profile.doctor_count))),
        field("本渠道", services.join("、")),
        Line::from(""),
        Line::from(Span::styled("  科室分布", label())),
    ];
    let peak = profile
        .dept_distribution
        .iter()
        .map(|d| d.value)
        .max()
        .unwrap_or(0);
    lines.extend(ranking_lines(&profile.dept_distribution, peak, 10));

    f.render_widget(
        Paragraph::new(lines)
            .block(panel_block(&profile.name))
            .wrap(Wrap { trim: false }),
        area,
    );
}
