//! 质量监管: satisfaction summary, regional rates, score rankings and the
//! negative-review feed.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use supervisor_contracts::records::{KpiCard, QualityReview, ReviewKind, ScoredName};
use supervisor_mock::quality;

use super::widgets::{label, muted, panel_block, render_kpi_row, row_style, text_bar};
use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Min(6),
        ])
        .split(area);

    let s = quality::summary();
    render_kpi_row(
        f,
        rows[0],
        &[
            KpiCard {
                label: "综合评分".to_string(),
                value: format!("{:.2}", s.score),
                unit: "/ 5".to_string(),
                sub: format!("样本 {}", s.sample_size),
            },
            KpiCard {
                label: "好评率".to_string(),
                value: format!("{}%", s.positive_rate),
                unit: String::new(),
                sub: format!("好评 {}", s.positive_total),
            },
            KpiCard {
                label: "差评率".to_string(),
                value: format!("{}%", s.negative_rate),
                unit: String::new(),
                sub: format!("差评 {}", s.negative_total),
            },
            KpiCard {
                label: "视频问诊好评率".to_string(),
                value: s.video_positive_rate.clone(),
                unit: String::new(),
                sub: String::new(),
            },
        ],
    );

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);
    render_regional(f, middle[0]);
    render_scores(f, middle[1], "服务类型评分 Top 5", &quality::service_scores());
    render_scores(f, middle[2], "医院评分 Top 5", &quality::hospital_scores());

    render_reviews(f, rows[2], app.state.cursor());
}

fn render_regional(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = quality::regional()
        .into_iter()
        .map(|r| {
            Line::from(vec![
                Span::raw(format!(" {:<6}", r.name)),
                Span::styled(
                    text_bar(f64::from(r.progress) / 100.0, 10),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(format!(" {}", r.rate), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  好评 {} / 差评 {}", r.positive, r.negative), muted()),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(panel_block("区域好评率")),
        area,
    );
}

fn render_scores(f: &mut Frame, area: Rect, title: &str, scores: &[ScoredName]) {
    let lines: Vec<Line> = scores
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Yellow)),
                Span::raw(s.name.clone()),
                Span::styled(format!("  {:.2}", s.score), Style::default().fg(Color::Green)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(panel_block(title)), area);
}

fn kind_color(kind: ReviewKind) -> Color {
    match kind {
        ReviewKind::WaitTime => Color::Yellow,
        ReviewKind::Attitude => Color::Red,
        ReviewKind::Technical => Color::Magenta,
    }
}

fn review_item(review: &QualityReview, selected: bool) -> ListItem<'static> {
    let stars = format!(
        "{}{}",
        "★".repeat(usize::from(review.score)),
        "☆".repeat(usize::from(5u8.saturating_sub(review.score)))
    );
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" [{}] ", review.kind.tag()),
                Style::default().fg(kind_color(review.kind)),
            ),
            Span::styled(review.service_type.clone(), row_style(selected)),
            Span::styled(format!("  {}", stars), Style::default().fg(Color::Yellow)),
            Span::styled(format!("  {} · {}", review.location, review.date), muted()),
        ]),
        Line::from(Span::styled(format!("     {}", review.content), label())),
    ])
}

fn render_reviews(f: &mut Frame, area: Rect, cursor: usize) {
    let items: Vec<ListItem> = quality::negative_reviews()
        .iter()
        .enumerate()
        .map(|(i, r)| review_item(r, i == cursor))
        .collect();
    f.render_widget(List::new(items).block(panel_block("差评监测")), area);
}
