//! 资源监管: doctor resources and patient analysis, one tab each.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, Tabs},
    Frame,
};

use supervisor_contracts::{
    records::PatientStatus,
    view::ResourceTab,
};
use supervisor_core::format::{percent_of, truncate};
use supervisor_mock::resources;

use super::widgets::{highlight, muted, panel_block, ranking_lines, render_kpi_row, row_style, strong};
use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(6),
        ])
        .split(area);

    let tab = app.state.resource_tab();
    render_tabs(f, rows[0], tab);

    match tab {
        ResourceTab::Doctor => {
            render_kpi_row(f, rows[1], &resources::doctor_kpis());
            render_doctors(f, rows[2], app.state.cursor());
        }
        ResourceTab::Patient => {
            render_kpi_row(f, rows[1], &resources::patient_kpis());
            render_patients(f, rows[2], app.state.cursor());
        }
    }
}

fn render_tabs(f: &mut Frame, area: Rect, tab: ResourceTab) {
    let all = [ResourceTab::Doctor, ResourceTab::Patient];
    let tabs = Tabs::new(all.iter().map(|t| t.label()))
        .select(all.iter().position(|t| *t == tab).unwrap_or(0))
        .style(muted())
        .highlight_style(highlight());
    f.render_widget(tabs, area);
}

fn render_doctors(f: &mut Frame, area: Rect, cursor: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let titles = resources::title_distribution();
    let total: u64 = titles.iter().map(|t| t.value).sum();
    let mut lines = ranking_lines(&titles, resources::TITLE_BAR_MAX, 14);
    lines.push(Line::from(""));
    lines.extend(titles.iter().map(|t| {
        Line::from(Span::styled(
            format!("  {} 占比 {}%", t.name, percent_of(t.value, total)),
            muted(),
        ))
    }));
    f.render_widget(
        Paragraph::new(lines).block(panel_block("职称分布")),
        cols[0],
    );

    let header = Row::new(["姓名", "职称", "科室", "服务量", "评分", "状态"]).style(strong());
    let rows: Vec<Row> = resources::doctors()
        .into_iter()
        .enumerate()
        .map(|(i, d)| {
            Row::new([
                d.name,
                d.title,
                d.dept,
                d.volume.to_string(),
                format!("{:.1}", d.score),
                d.status,
            ])
            .style(row_style(i == cursor))
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Min(4),
        ],
    )
    .header(header)
    .block(panel_block("医生列表 (Enter 查看资质)"));
    f.render_widget(table, cols[1]);
}

/// Hospital names longer than this are cut in the patient table.
const HOSPITAL_CHARS: usize = 8;

fn status_style(status: PatientStatus) -> Style {
    match status {
        PatientStatus::Completed => Style::default().fg(Color::Green),
        PatientStatus::InProgress => Style::default().fg(Color::Blue),
        PatientStatus::AwaitingPayment => Style::default().fg(Color::Yellow),
        PatientStatus::Cancelled => muted(),
    }
}

fn render_patients(f: &mut Frame, area: Rect, cursor: usize) {
    let header = Row::new(["患者", "性别/年龄", "诊断", "医院 · 科室", "服务类型", "时间", "状态"])
        .style(strong());
    let rows: Vec<Row> = resources::patients()
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let selected = i == cursor;
            let status = Span::styled(
                p.status.label(),
                if selected { highlight() } else { status_style(p.status) },
            );
            Row::new(vec![
                Line::from(p.name),
                Line::from(format!("{} {}岁", p.gender.label(), p.age)),
                Line::from(p.diagnosis),
                Line::from(format!("{} · {}", truncate(&p.hospital, HOSPITAL_CHARS), p.dept)),
                Line::from(p.service_type),
                Line::from(p.date),
                Line::from(status),
            ])
            .style(row_style(selected))
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(panel_block("近期服务患者"));
    f.render_widget(table, area);
}
