//! Frame chrome (header, condition chips, footer) and small building blocks
//! shared by the panels.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use supervisor_contracts::{
    records::{KpiCard, NamedValue},
    view::{Overlay, ViewState},
};
use supervisor_core::{
    format::{greeting_now, group_thousands, ratio_bar},
    projection::resolve,
};
use supervisor_mock::PROJECT_HOMEPAGE;

use crate::app::App;

// ── Styles ────────────────────────────────────────────────────────────────────

pub fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

pub fn highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn label() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn strong() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style of a list row, highlighted when it is under the cursor.
pub fn row_style(selected: bool) -> Style {
    if selected {
        highlight()
    } else {
        Style::default()
    }
}

/// A `label   value` line used by detail panes.
pub fn field<'a>(name: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", name), label()),
        Span::raw(value.into()),
    ])
}

/// Horizontal text bar of `width` cells filled to `ratio`.
pub fn text_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

// ── Header / chips / footer ───────────────────────────────────────────────────

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let region = resolve(&app.directory, state.region());

    let line = Line::from(vec![
        Span::styled(
            "远程医疗监管平台  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(state.view().title(), strong()),
        Span::styled("  │  ", muted()),
        Span::styled(format!("{} ({})", state.region(), region.kind.label()), label()),
        Span::styled("  │  ", muted()),
        Span::raw(format!("{}, 管理员", greeting_now())),
        Span::styled("  当前身份: ", label()),
        Span::styled(state.role().name.as_str(), Style::default().fg(Color::Yellow)),
        Span::styled(format!("  {}", Local::now().format("%Y-%m-%d %H:%M")), muted()),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

/// The 已选条件 bar of a domain panel.
pub fn render_conditions(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let mut spans = vec![Span::styled(" 已选条件: ", label())];

    let chips = state.active_conditions();
    if chips.is_empty() {
        spans.push(Span::styled("全省 · 全部医院", muted()));
    }
    if state.is_region_filtered() {
        spans.push(Span::styled(
            format!(" {} ✕ ", state.region()),
            Style::default().fg(Color::Black).bg(Color::Blue),
        ));
        spans.push(Span::styled("[x] ", muted()));
    }
    if let Some(hospital) = state.hospital_filter() {
        spans.push(Span::styled(
            format!(" {} ✕ ", hospital),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ));
        spans.push(Span::styled("[h] ", muted()));
    }
    spans.push(Span::styled(format!("  时间: {}", state.time_range().label()), label()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let state = &app.state;

    let spans: Vec<Span> = if app.show_about {
        vec![
            Span::styled(" 项目主页: ", label()),
            Span::styled(PROJECT_HOMEPAGE, Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            key("[?] "),
            Span::raw("关闭"),
        ]
    } else if state.overlay() != Overlay::None {
        let mut spans = vec![
            key(" [↑↓] "),
            Span::raw("选择  "),
            key("[Enter] "),
            Span::raw("确定  "),
            key("[Esc] "),
            Span::raw("关闭  "),
        ];
        if state.overlay() == Overlay::Filter {
            spans.push(key("[t] "));
            spans.push(Span::raw("时间维度  "));
        }
        spans.push(key("[q] "));
        spans.push(Span::raw("退出"));
        spans
    } else {
        let mut spans = Vec::new();
        match state.view() {
            ViewState::Home => {
                spans.push(key(" [1-6] "));
                spans.push(Span::raw("监管模块  "));
            }
            ViewState::Resource | ViewState::Service => {
                spans.push(key(" [Tab] "));
                spans.push(Span::raw("切换  "));
            }
            _ => {}
        }
        if state.view() != ViewState::Home {
            spans.push(key(" [Esc] "));
            spans.push(Span::raw("返回  "));
        }
        if state.view().has_filter() {
            spans.push(key("[f] "));
            spans.push(Span::raw("筛选  "));
        }
        spans.extend([
            key("[Enter] "),
            Span::raw("查看  "),
            key("[r] "),
            Span::raw("区域  "),
            key("[p] "),
            Span::raw("身份  "),
            key("[?] "),
            Span::raw("关于  "),
            key("[q] "),
            Span::raw("退出"),
        ]);
        spans
    };

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Cards and rankings ────────────────────────────────────────────────────────

/// A bordered metric card: value on the first line, caption below.
pub fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, caption: Line) {
    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        caption,
    ];
    f.render_widget(Paragraph::new(lines).block(panel_block(title)), area);
}

/// Equal-width row of KPI cards.
pub fn render_kpi_row(f: &mut Frame, area: Rect, cards: &[KpiCard]) {
    if cards.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, cell) in cards.iter().zip(cells.iter()) {
        let value = if card.unit.is_empty() {
            card.value.clone()
        } else {
            format!("{} {}", card.value, card.unit)
        };
        render_card(f, *cell, &card.label, value, Line::from(Span::styled(card.sub.clone(), muted())));
    }
}

/// Numbered ranking with a bar scaled against `max`. The top three ranks
/// are highlighted.
pub fn ranking_lines(entries: &[NamedValue], max: u64, bar_width: usize) -> Vec<Line<'static>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let rank_style = if i < 3 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                muted()
            };
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), rank_style),
                Span::raw(format!("{:<12}", entry.name)),
                Span::styled(
                    text_bar(ratio_bar(entry.value, max), bar_width),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(format!(" {}", group_thousands(entry.value)), strong()),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_bar_fills_proportionally() {
        assert_eq!(text_bar(0.5, 4), "██░░");
        assert_eq!(text_bar(0.0, 3), "░░░");
        assert_eq!(text_bar(2.0, 3), "███", "ratio is clamped");
    }

    #[test]
    fn ranking_lines_number_from_one() {
        let entries = vec![
            NamedValue {
                name: "贵阳市".to_string(),
                value: 85,
            },
            NamedValue {
                name: "遵义市".to_string(),
                value: 72,
            },
        ];
        let lines = ranking_lines(&entries, 100, 10);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, " 1 ");
        assert_eq!(lines[1].spans[3].content, " 72");
    }
}
