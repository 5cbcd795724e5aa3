//! Home: quick-access grid, region-scaled KPI cards, weekday trend and the
//! activity ranking.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use supervisor_contracts::{dashboard::DashboardData, records::NamedValue, view::ViewState};
use supervisor_core::format::group_thousands;

use super::widgets::{highlight, muted, panel_block, ranking_lines, render_card};
use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = app.state.dashboard(&app.directory);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // quick access
            Constraint::Length(4), // KPI cards
            Constraint::Min(8),    // trend + ranking
        ])
        .split(area);

    render_quick_access(f, rows[0], app.state.cursor());
    render_kpis(f, rows[1], &data);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);
    render_trend(f, bottom[0], &data);
    render_ranking(f, bottom[1], &data);
}

fn render_quick_access(f: &mut Frame, area: Rect, cursor: usize) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    for (i, (view, cell)) in ViewState::DOMAINS.iter().zip(cells.iter()).enumerate() {
        let style = if i == cursor {
            highlight()
        } else {
            Style::default().fg(Color::White)
        };
        let tile = Paragraph::new(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Cyan)),
            Span::styled(view.title(), style),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(muted()),
        );
        f.render_widget(tile, *cell);
    }
}

fn render_kpis(f: &mut Frame, area: Rect, data: &DashboardData) {
    let kpi = &data.kpi;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    let up = Style::default().fg(Color::Green);
    render_card(
        f,
        cells[0],
        "今日业务总量",
        group_thousands(kpi.today_volume),
        Line::from(Span::styled("↗ 实时更新", up)),
    );
    render_card(
        f,
        cells[1],
        "互联网医院",
        format!("{} 家", kpi.internet_hospitals),
        Line::from(Span::styled("较上月 +2", up)),
    );
    render_card(
        f,
        cells[2],
        "本月业务总量",
        group_thousands(kpi.total_volume),
        Line::from(Span::styled("↗ +12.5%", up)),
    );
    render_card(
        f,
        cells[3],
        "接入机构总数",
        group_thousands(kpi.institutions),
        Line::from(Span::styled(format!("覆盖率 {}", kpi.coverage), muted())),
    );
    render_card(
        f,
        cells[4],
        kpi.revenue_label,
        kpi.revenue.to_string(),
        Line::from(Span::styled(
            format!("远程医疗机构 {} 家", kpi.networked_institutions),
            muted(),
        )),
    );
}

fn render_trend(f: &mut Frame, area: Rect, data: &DashboardData) {
    let remote: Vec<(f64, f64)> = data
        .trend
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.remote as f64))
        .collect();
    let internet: Vec<(f64, f64)> = data
        .trend
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.internet as f64))
        .collect();
    let peak = data
        .trend
        .iter()
        .map(|p| p.remote.max(p.internet))
        .max()
        .unwrap_or(0)
        .max(1);

    let datasets = vec![
        Dataset::default()
            .name("远程")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&remote),
        Dataset::default()
            .name("互医")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&internet),
    ];

    let days: Vec<Span> = data.trend.iter().map(|p| Span::styled(p.day, muted())).collect();
    let upper = peak as f64 * 1.1;

    let chart = Chart::new(datasets)
        .block(panel_block("近7日业务趋势"))
        .x_axis(
            Axis::default()
                .style(muted())
                .bounds([0.0, (data.trend.len().max(2) - 1) as f64])
                .labels(days),
        )
        .y_axis(
            Axis::default()
                .style(muted())
                .bounds([0.0, upper])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(group_thousands(peak)),
                ]),
        );
    f.render_widget(chart, area);
}

fn render_ranking(f: &mut Frame, area: Rect, data: &DashboardData) {
    // Values read as percentages of a full bar.
    let entries: Vec<NamedValue> = data
        .rankings
        .iter()
        .map(|e| NamedValue {
            name: e.name.to_string(),
            value: e.value,
        })
        .collect();
    let bar_width = usize::from(area.width.saturating_sub(28)).clamp(4, 30);

    f.render_widget(
        Paragraph::new(ranking_lines(&entries, 100, bar_width))
            .block(panel_block(data.ranking_title())),
        area,
    );
}
