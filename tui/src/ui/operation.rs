//! 运行监管: regional volumes, per-city channel split and the daily trend.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{BarChart, Paragraph, Row, Table},
    Frame,
};

use supervisor_core::format::group_thousands;
use supervisor_mock::operations;

use super::widgets::{muted, panel_block, ranking_lines, render_kpi_row, row_style, strong};
use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(10)])
        .split(area);

    render_kpi_row(f, rows[0], &operations::operation_kpis());

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(cols[0]);

    let rankings = operations::city_rankings();
    let max = rankings.first().map(|r| r.value).unwrap_or(0);
    f.render_widget(
        Paragraph::new(ranking_lines(&rankings, max, 14))
            .block(panel_block(&format!("州市业务量排名 ({})", operations::RANKING_UNIT))),
        left[0],
    );
    render_daily(f, left[1]);
    render_details(f, cols[1], app.state.cursor());
}

fn render_daily(f: &mut Frame, area: Rect) {
    let days = operations::daily_trend();
    // Bars are shown in thousands so the value labels fit.
    let bars: Vec<(&str, u64)> = days
        .iter()
        .map(|d| (d.name.as_str(), d.volume / 1_000))
        .collect();
    let chart = BarChart::default()
        .block(panel_block("近7日业务量 (千人次)"))
        .data(bars.as_slice())
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::Black).bg(Color::Blue));
    f.render_widget(chart, area);
}

fn render_details(f: &mut Frame, area: Rect, cursor: usize) {
    let header = Row::new(["州市", "远程", "互医", "合计", "环比", "占比"]).style(strong());
    let rows: Vec<Row> = operations::city_details()
        .into_iter()
        .enumerate()
        .map(|(i, d)| {
            let growth_color = if d.growth >= 0.0 { Color::Green } else { Color::Red };
            Row::new(vec![
                Line::from(d.name),
                Line::from(group_thousands(d.remote)),
                Line::from(group_thousands(d.internet)),
                Line::from(group_thousands(d.total)),
                Line::from(Span::styled(
                    format!("{:+.1}%", d.growth),
                    Style::default().fg(growth_color),
                )),
                Line::from(format!("{:.1}%", d.percent)),
            ])
            .style(row_style(i == cursor))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(7),
            Constraint::Min(6),
        ],
    )
    .header(header)
    .block(panel_block("州市运行明细"));

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(1)])
        .split(area);
    f.render_widget(table, parts[0]);
    f.render_widget(
        Paragraph::new(Span::styled(" 远程 = 机构间协作 (H2H)  互医 = 面向患者 (ToC)", muted())),
        parts[1],
    );
}
