//! 机构监管: connected-institution counts and the medical-alliance leads.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use supervisor_contracts::records::{Institution, KpiCard};
use supervisor_core::format::percent_of;
use supervisor_mock::institutions;

use super::widgets::{field, label, muted, panel_block, render_kpi_row, row_style};
use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let s = institutions::summary();
    let grade = |name: &str, count: u32| KpiCard {
        label: name.to_string(),
        value: count.to_string(),
        unit: "家".to_string(),
        sub: format!("占比 {}%", percent_of(u64::from(count), u64::from(s.total))),
    };
    render_kpi_row(
        f,
        rows[0],
        &[
            KpiCard {
                label: "接入机构总数".to_string(),
                value: s.total.to_string(),
                unit: "家".to_string(),
                sub: String::new(),
            },
            grade("三级医院", s.tertiary),
            grade("二级医院", s.secondary),
            grade("基层医疗机构", s.primary),
        ],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let list = institutions::institutions();
    let cursor = app.state.cursor();
    let items: Vec<ListItem> = list
        .iter()
        .enumerate()
        .map(|(i, inst)| {
            let lead = if inst.is_lead { " [医联体牵头]" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}", inst.name), row_style(i == cursor)),
                Span::styled(format!(" {}", inst.level), muted()),
                Span::styled(lead, Style::default().fg(Color::Magenta)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel_block("重点机构")), body[0]);

    match list.get(cursor) {
        Some(inst) => render_detail(f, body[1], inst),
        None => f.render_widget(panel_block("机构详情"), body[1]),
    }
}

fn render_detail(f: &mut Frame, area: Rect, inst: &Institution) {
    let status_color = if inst.violation_count == 0 {
        Color::Green
    } else {
        Color::Red
    };
    let mut lines = vec![
        field("地址", inst.address.as_str()),
        Line::from(vec![
            Span::styled(format!("  {:<8}", "状态"), label()),
            Span::styled(inst.status.as_str(), Style::default().fg(status_color)),
            Span::styled(format!("  违规 {} 次", inst.violation_count), muted()),
        ]),
        field("负责人", format!("{}  {}", inst.leader, inst.phone)),
        field("许可证", inst.licenses.join("、")),
        field("有效期至", inst.expiry.as_str()),
        field("资质证书", format!("{} 项", inst.cert_count)),
        field("科室", format!("{} 个: {}", inst.dept_count, inst.depts.join("、"))),
    ];
    if inst.is_lead {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  医联体成员 ({})", inst.members.len()),
            label(),
        )));
        lines.extend(
            inst.members
                .iter()
                .map(|m| Line::from(Span::raw(format!("    · {}", m)))),
        );
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(panel_block(&inst.name))
            .wrap(Wrap { trim: false }),
        area,
    );
}
