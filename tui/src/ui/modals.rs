//! Popups drawn over the body: region selector, filter drawer, role menu and
//! the doctor qualification card.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use supervisor_contracts::view::Overlay;
use supervisor_core::filter::{county_heading, selector_entries, OptionSection};
use supervisor_mock::{resources, roles, PROJECT_HOMEPAGE};

use super::widgets::{field, highlight, label, muted};
use crate::app::{App, FilterRow};

pub fn render(f: &mut Frame, body: Rect, app: &App) {
    match app.state.overlay() {
        Overlay::None => {}
        Overlay::RegionSelector => render_region_selector(f, centered(body, 40, 80), app),
        Overlay::Filter => render_filter(f, drawer(body, 40), app),
        Overlay::RoleMenu => render_role_menu(f, top_right(body, 36, 9), app),
        Overlay::DoctorQualification => render_qualification(f, centered(body, 50, 60), app),
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// A rectangle of `percent_x` × `percent_y` centred in `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Right-hand drawer covering `percent_x` of the width.
fn drawer(area: Rect, percent_x: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - percent_x),
            Constraint::Percentage(percent_x),
        ])
        .split(area)[1]
}

fn top_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: height.min(area.height),
    }
}

fn popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn option_style(selected: bool, active: bool) -> Style {
    if selected {
        highlight()
    } else if active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

// ── Popups ────────────────────────────────────────────────────────────────────

fn render_region_selector(f: &mut Frame, area: Rect, app: &App) {
    let cursor = app.state.overlay_cursor();
    let lines: Vec<Line> = selector_entries(&app.directory, app.state.region())
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let indent = if entry.depth == 0 { " " } else { "     " };
            let check = if entry.selected { " ✓" } else { "" };
            let style = if entry.depth == 0 {
                option_style(i == cursor, entry.selected).add_modifier(Modifier::BOLD)
            } else {
                option_style(i == cursor, entry.selected)
            };
            Line::from(vec![
                Span::raw(indent),
                Span::styled(entry.name, style),
                Span::styled(check, Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    // Keep the cursor row on screen.
    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = cursor.saturating_sub(visible.saturating_sub(1));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(popup_block("选择区域"))
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
        area,
    );
}

fn render_filter(f: &mut Frame, area: Rect, app: &App) {
    let cursor = app.state.overlay_cursor();
    let state = &app.state;
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(" 区域", label()))];
    let mut section = OptionSection::Province;
    let mut hospitals_started = false;

    for (i, row) in app.filter_rows().into_iter().enumerate() {
        let selected = i == cursor;
        match row {
            FilterRow::Region(option) => {
                if option.section != section {
                    section = option.section;
                    let heading = match section {
                        OptionSection::Cities => " 州市".to_string(),
                        OptionSection::Counties => format!(
                            " {}",
                            county_heading(&app.directory, state.region()).unwrap_or_default()
                        ),
                        OptionSection::Province => " 区域".to_string(),
                    };
                    lines.push(Line::from(Span::styled(heading, label())));
                }
                lines.push(Line::from(Span::styled(
                    format!("   {}", option.label),
                    option_style(selected, option.highlighted),
                )));
            }
            FilterRow::TimeRange => {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled(" 时间维度  ", label()),
                    Span::styled(
                        format!("< {} >", state.time_range().label()),
                        option_style(selected, true),
                    ),
                    Span::styled("  [t]", muted()),
                ]));
            }
            FilterRow::Hospital(option) => {
                if !hospitals_started {
                    hospitals_started = true;
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(" 医院", label())));
                }
                let active = option.value.as_deref() == state.hospital_filter();
                lines.push(Line::from(Span::styled(
                    format!("   {}", option.label),
                    option_style(selected, active),
                )));
            }
            FilterRow::Confirm => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("   [ 确定 ]", option_style(selected, false))));
            }
        }
    }

    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = lines.len().saturating_sub(visible).min(cursor);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(popup_block("筛选"))
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
        area,
    );
}

fn render_role_menu(f: &mut Frame, area: Rect, app: &App) {
    let cursor = app.state.overlay_cursor();
    let current = &app.state.role().id;

    let mut lines: Vec<Line> = roles::roles()
        .into_iter()
        .enumerate()
        .map(|(i, role)| {
            let active = &role.id == current;
            let check = if active { " ✓" } else { "" };
            Line::from(vec![
                Span::styled(format!(" {}", role.name), option_style(i == cursor, active)),
                Span::styled(check, Style::default().fg(Color::Green)),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(" ──────────", muted())));
    lines.push(Line::from(Span::styled(" 项目主页", label())));
    lines.push(Line::from(Span::styled(
        format!(" {}", PROJECT_HOMEPAGE),
        Style::default().fg(Color::Cyan),
    )));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(popup_block("切换身份"))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_qualification(f: &mut Frame, area: Rect, app: &App) {
    let Some(doctor) = app.state.selected_doctor() else {
        return;
    };
    let q = resources::qualification(doctor);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("  {}", doctor.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {} · {}", doctor.title, doctor.dept), muted()),
        ]),
        Line::from(""),
        field("执业机构", doctor.hospital.as_str()),
        field("执业证号", q.certificate_no),
        field("发证日期", q.issued_on),
        field("多点执业", q.multi_site),
        field("考核状态", doctor.status.as_str()),
        Line::from(""),
        Line::from(Span::styled("  资质证书", label())),
    ];
    lines.extend(q.certificates.into_iter().map(|c| {
        Line::from(vec![
            Span::styled("    ✓ ", Style::default().fg(Color::Green)),
            Span::raw(c),
        ])
    }));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(popup_block("医生资质"))
            .wrap(Wrap { trim: false }),
        area,
    );
}
