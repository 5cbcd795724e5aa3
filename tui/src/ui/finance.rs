//! 财务监管 and the per-hospital 财务构成分析 drill-down.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use supervisor_contracts::records::{CashFlow, FinanceDetail, FinanceKpi, TrendDirection};
use supervisor_core::format::ratio_bar;
use supervisor_mock::finance;

use super::widgets::{field, label, muted, panel_block, row_style, strong, text_bar};
use crate::app::App;

// ── Panel ─────────────────────────────────────────────────────────────────────

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_kpis(f, rows[0], &finance::finance_kpis());

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    render_regional(f, cols[0]);
    render_institutions(f, cols[1], app.state.cursor());
}

fn render_kpis(f: &mut Frame, area: Rect, kpis: &[FinanceKpi]) {
    if kpis.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = kpis
        .iter()
        .map(|_| Constraint::Ratio(1, kpis.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (kpi, cell) in kpis.iter().zip(cells.iter()) {
        let mut headline = vec![Span::styled(kpi.value.clone(), strong())];
        if let Some(trend) = &kpi.trend {
            let (arrow, color) = match trend.direction {
                TrendDirection::Up => ("↗", Color::Green),
                TrendDirection::Down => ("↘", Color::Red),
            };
            headline.push(Span::styled(
                format!("  {} {}", arrow, trend.change),
                Style::default().fg(color),
            ));
        }
        let mut lines = vec![Line::from(headline)];
        if !kpi.sub.is_empty() {
            lines.push(Line::from(Span::styled(kpi.sub.clone(), muted())));
        }
        lines.push(Line::from(vec![
            Span::styled("远程 ", label()),
            Span::raw(kpi.remote_value.clone()),
            Span::styled("  互医 ", label()),
            Span::raw(kpi.internet_value.clone()),
        ]));
        f.render_widget(Paragraph::new(lines).block(panel_block(&kpi.label)), *cell);
    }
}

fn render_regional(f: &mut Frame, area: Rect) {
    let header = Row::new(["州市", "营收", "单量", "远程 / 互医"]).style(strong());
    let rows: Vec<Row> = finance::regional_analysis()
        .into_iter()
        .map(|r| {
            Row::new(vec![
                Line::from(r.name),
                Line::from(r.revenue),
                Line::from(r.volume),
                Line::from(vec![
                    Span::styled(
                        text_bar(ratio_bar(u64::from(r.remote_share), 100), 10),
                        Style::default().fg(Color::Blue),
                    ),
                    Span::raw(format!(" {}% / {}%", r.remote_share, r.internet_share)),
                ]),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(panel_block("区域营收分析"));
    f.render_widget(table, area);
}

fn render_institutions(f: &mut Frame, area: Rect, cursor: usize) {
    let items: Vec<ListItem> = finance::institutions()
        .into_iter()
        .enumerate()
        .map(|(i, inst)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {}", inst.name), row_style(i == cursor)),
                    Span::styled(format!("  {}", inst.level), muted()),
                    Span::styled(
                        format!("  {}", inst.revenue),
                        Style::default().fg(Color::Green),
                    ),
                ]),
                Line::from(Span::styled(format!("   {}", inst.address), muted())),
            ])
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel_block("重点机构 (Enter 查看构成)")),
        area,
    );
}

// ── Hospital detail ───────────────────────────────────────────────────────────

pub fn render_detail(f: &mut Frame, area: Rect, app: &App) {
    let Some(hospital) = app.state.selected_hospital() else {
        f.render_widget(
            Paragraph::new(Span::styled("  未选择机构", muted())).block(panel_block("财务构成分析")),
            area,
        );
        return;
    };
    let detail = finance::detail_for(hospital);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(6),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", detail.hospital_name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("[{}]", detail.level), muted()),
        Span::styled("   总营收 ", label()),
        Span::styled(detail.revenue.clone(), Style::default().fg(Color::Green)),
    ]);
    f.render_widget(Paragraph::new(title).block(panel_block("机构概况")), rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);
    render_composition(f, middle[0], &detail);
    render_costs(f, middle[1], &detail);
    render_settlement(f, middle[2], &detail);

    render_line_items(f, rows[2], &detail, app.state.cursor());
}

fn render_composition(f: &mut Frame, area: Rect, detail: &FinanceDetail) {
    let block = panel_block("收入构成");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2), Constraint::Min(0)])
        .split(inner);
    let gauge = |name: &str, percent: u8, color: Color| {
        Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(ratio_bar(u64::from(percent), 100))
            .label(format!("{} {}%", name, percent))
    };
    f.render_widget(gauge("远程医疗", detail.composition_remote, Color::Blue), parts[0]);
    f.render_widget(gauge("互联网医疗", detail.composition_internet, Color::Green), parts[1]);
}

fn render_costs(f: &mut Frame, area: Rect, detail: &FinanceDetail) {
    let line = |name: &str, percent: u8, color: Color| {
        Line::from(vec![
            Span::styled(format!(" {:<6}", name), label()),
            Span::styled(
                text_bar(ratio_bar(u64::from(percent), 100), 12),
                Style::default().fg(color),
            ),
            Span::raw(format!(" {}%", percent)),
        ])
    };
    let lines = vec![
        line("人力成本", detail.human_cost, Color::Yellow),
        line("设施运维", detail.ops_cost, Color::Magenta),
        line("净利润", detail.profit, Color::Green),
    ];
    f.render_widget(Paragraph::new(lines).block(panel_block("成本与利润")), area);
}

fn render_settlement(f: &mut Frame, area: Rect, detail: &FinanceDetail) {
    let lines = vec![
        Line::from(vec![
            Span::styled("  结算支出  ", label()),
            Span::styled(detail.settlement_expense.clone(), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::styled("  结算收入  ", label()),
            Span::styled(detail.settlement_income.clone(), Style::default().fg(Color::Green)),
        ]),
        field("主要协作", detail.main_partners.join("、")),
    ];
    f.render_widget(Paragraph::new(lines).block(panel_block("跨机构结算")), area);
}

fn render_line_items(f: &mut Frame, area: Rect, detail: &FinanceDetail, cursor: usize) {
    let header = Row::new(["项目", "渠道", "收支", "单量", "单价", "金额", "占比"]).style(strong());
    let rows: Vec<Row> = detail
        .services
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let flow_color = match item.flow {
                CashFlow::Income => Color::Green,
                CashFlow::Expense => Color::Red,
            };
            let channel_color = if item.is_remote() { Color::Blue } else { Color::Green };
            let share = if item.percent == 0 {
                "-".to_string()
            } else {
                format!("{}%", item.percent)
            };
            Row::new(vec![
                Line::from(item.name.clone()),
                Line::from(Span::styled(item.tag.clone(), Style::default().fg(channel_color))),
                Line::from(Span::styled(item.flow.label(), Style::default().fg(flow_color))),
                Line::from(item.count.to_string()),
                Line::from(item.price.clone()),
                Line::from(Span::styled(item.total.clone(), Style::default().fg(flow_color))),
                Line::from(share),
            ])
            .style(row_style(i == cursor))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(24),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Min(4),
        ],
    )
    .header(header)
    .block(panel_block("服务收支明细"));
    f.render_widget(table, area);
}
