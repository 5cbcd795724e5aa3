//! Plain-text rendering for the command-line front end.

use std::fmt::Write;

use supervisor_contracts::{
    dashboard::DashboardData,
    records::{KpiCard, NamedValue, Role},
    view::{ServiceTab, ViewState},
};
use supervisor_core::{
    format::{group_thousands, percent_of},
    traits::RegionDirectory,
};
use supervisor_mock::{
    finance, get_dashboard_data, institutions, operations, quality, resources, services,
};

// `write!` into a `String` cannot fail, so its results are discarded below.

pub fn summary(data: &DashboardData) -> String {
    let mut out = String::new();
    let kpi = &data.kpi;
    let _ = writeln!(out, "{} ({})", data.region.name, data.region.kind.label());
    let _ = writeln!(out, "  今日业务总量    {}", group_thousands(kpi.today_volume));
    let _ = writeln!(out, "  本月业务总量    {}", group_thousands(kpi.total_volume));
    let _ = writeln!(out, "  互联网医院      {} 家", kpi.internet_hospitals);
    let _ = writeln!(out, "  接入机构总数    {} 家 (覆盖率 {})", kpi.institutions, kpi.coverage);
    let _ = writeln!(out, "  远程医疗机构    {} 家", kpi.networked_institutions);
    let _ = writeln!(out, "  {}    {}", kpi.revenue_label, kpi.revenue);
    let _ = writeln!(out);
    let _ = writeln!(out, "近7日业务趋势 (远程 / 互医)");
    for point in &data.trend {
        let _ = writeln!(
            out,
            "  {}  {:>9} / {:>9}",
            point.day,
            group_thousands(point.remote),
            group_thousands(point.internet)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", data.ranking_title());
    for (i, entry) in data.rankings.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}  {}", i + 1, entry.name, entry.value);
    }
    out.trim_end().to_string()
}

/// The hierarchy as an indented tree, listed regions first.
pub fn regions(directory: &dyn RegionDirectory) -> String {
    let mut out = String::new();
    for region in directory.regions() {
        let indent = "  ".repeat(usize::from(region.level.saturating_sub(1)));
        let _ = writeln!(out, "{}{} [{}] ({})", indent, region.name, region.id, region.kind.label());
        for child in region.children {
            let _ = writeln!(out, "{}  - {}", indent, child);
        }
    }
    out.trim_end().to_string()
}

/// One line per role; the active one is starred.
pub fn roles(all: &[Role], active: &Role) -> String {
    all.iter()
        .map(|r| {
            let marker = if r.id == active.id { '*' } else { ' ' };
            format!("{} {:<7} {}", marker, r.id, r.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Panels ────────────────────────────────────────────────────────────────────

pub fn panel(view: ViewState, region: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.title());
    match view {
        ViewState::Home => {
            let _ = writeln!(out, "{}", summary(&get_dashboard_data(region)));
        }
        ViewState::Institution => institution_panel(&mut out),
        ViewState::Resource => resource_panel(&mut out),
        ViewState::Service => service_panel(&mut out),
        ViewState::Operation => operation_panel(&mut out),
        ViewState::Quality => quality_panel(&mut out),
        ViewState::Finance => finance_panel(&mut out),
        ViewState::FinanceDetail => finance_detail_panel(&mut out),
    }
    out.trim_end().to_string()
}

fn cards(out: &mut String, cards: &[KpiCard]) {
    for card in cards {
        let _ = write!(out, "  {}: {}", card.label, card.value);
        if !card.unit.is_empty() {
            let _ = write!(out, " {}", card.unit);
        }
        if !card.sub.is_empty() {
            let _ = write!(out, " ({})", card.sub);
        }
        let _ = writeln!(out);
    }
}

fn ranking(out: &mut String, title: &str, entries: &[NamedValue]) {
    let _ = writeln!(out, "{}", title);
    for (i, e) in entries.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}  {}", i + 1, e.name, group_thousands(e.value));
    }
}

fn institution_panel(out: &mut String) {
    let s = institutions::summary();
    let _ = writeln!(
        out,
        "接入机构 {} 家: 三级 {} / 二级 {} / 基层 {}",
        s.total, s.tertiary, s.secondary, s.primary
    );
    for inst in institutions::institutions() {
        let _ = writeln!(out, "- {} [{}] {}", inst.name, inst.level, inst.status);
        let _ = writeln!(out, "    地址: {}  科室: {}", inst.address, inst.dept_count);
        let _ = writeln!(out, "    许可证: {} (有效期至 {})", inst.licenses.join(", "), inst.expiry);
        let _ = writeln!(out, "    医联体成员: {}", inst.members.join(", "));
    }
}

fn resource_panel(out: &mut String) {
    let _ = writeln!(out, "医生资源");
    cards(out, &resources::doctor_kpis());
    let titles = resources::title_distribution();
    let total: u64 = titles.iter().map(|t| t.value).sum();
    for t in &titles {
        let _ = writeln!(out, "  {:<6} {:>5} ({}%)", t.name, t.value, percent_of(t.value, total));
    }
    for d in resources::doctors() {
        let _ = writeln!(out, "  {} {} {} · {}  {}次 {:.1}", d.name, d.title, d.hospital, d.dept, d.volume, d.score);
    }
    let _ = writeln!(out, "患者分析");
    cards(out, &resources::patient_kpis());
    for p in resources::patients() {
        let _ = writeln!(
            out,
            "  {} {}{}岁 {} {} {} {}",
            p.name,
            p.gender.label(),
            p.age,
            p.diagnosis,
            p.service_type,
            p.date,
            p.status.label()
        );
    }
}

fn service_panel(out: &mut String) {
    cards(out, &services::service_kpis());
    for tab in [ServiceTab::B2b, ServiceTab::Toc] {
        let _ = writeln!(out, "{}  {}: {}", tab.label(), tab.volume_label(), group_thousands(services::monthly_volume(tab)));
        for c in services::categories_for(tab) {
            let _ = writeln!(out, "  {:<10} 机构 {:>4}  服务人次 {:>5}", c.name, c.institutions, c.doctors);
        }
        ranking(out, "医院服务量排名", &services::rankings_for(tab));
    }
}

fn operation_panel(out: &mut String) {
    cards(out, &operations::operation_kpis());
    ranking(out, "州市业务量排名", &operations::city_rankings());
    for d in operations::city_details() {
        let _ = writeln!(
            out,
            "  {}  远程 {} / 互医 {}  合计 {}  增长 {:.1}%  占比 {:.1}%",
            d.name,
            group_thousands(d.remote),
            group_thousands(d.internet),
            group_thousands(d.total),
            d.growth,
            d.percent
        );
    }
    for day in operations::daily_trend() {
        let _ = writeln!(out, "  {}  {:>9}  {:+}%", day.name, group_thousands(day.volume), day.growth);
    }
}

fn quality_panel(out: &mut String) {
    let s = quality::summary();
    let _ = writeln!(
        out,
        "综合评分 {:.2}  好评率 {}%  差评率 {}%  样本 {}",
        s.score, s.positive_rate, s.negative_rate, s.sample_size
    );
    let _ = writeln!(out, "好评总数 {}  差评总数 {}  视频问诊好评率 {}", s.positive_total, s.negative_total, s.video_positive_rate);
    for r in quality::regional() {
        let _ = writeln!(out, "  {}  好评 {}  差评 {}  {}", r.name, r.positive, r.negative, r.rate);
    }
    for r in quality::negative_reviews() {
        let _ = writeln!(out, "  [{}] {} {} ({} {})", r.kind.tag(), r.service_type, r.content, r.location, r.date);
    }
}

fn finance_panel(out: &mut String) {
    for k in finance::finance_kpis() {
        let trend = k.trend.map(|t| format!(" {}", t.change)).unwrap_or_default();
        let _ = writeln!(out, "  {}: {}{}  远程 {} / 互医 {}", k.label, k.value, trend, k.remote_value, k.internet_value);
    }
    for r in finance::regional_analysis() {
        let _ = writeln!(
            out,
            "  {}  {}  远程 {}% {} / 互医 {}% {}",
            r.name, r.revenue, r.remote_share, r.remote_revenue, r.internet_share, r.internet_revenue
        );
    }
    for i in finance::institutions() {
        let _ = writeln!(out, "- {} [{}] {}", i.name, i.level, i.revenue);
    }
}

fn finance_detail_panel(out: &mut String) {
    let Some(inst) = finance::institutions().into_iter().next() else {
        return;
    };
    let d = finance::detail_for(&inst);
    let _ = writeln!(out, "{} [{}] 总营收 {}", d.hospital_name, d.level, d.revenue);
    let _ = writeln!(out, "  收入构成: 远程 {}% / 互医 {}%", d.composition_remote, d.composition_internet);
    let _ = writeln!(out, "  人力成本 {}%  设施运维 {}%  净利润率 {}%", d.human_cost, d.ops_cost, d.profit);
    let _ = writeln!(out, "  结算: 支出 {}  收入 {}", d.settlement_expense, d.settlement_income);
    for item in &d.services {
        let _ = writeln!(
            out,
            "  {} [{}] {}  {} × {} = {}",
            item.name,
            item.flow.label(),
            item.tag,
            item.count,
            item.price,
            item.total
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supervisor_mock::StaticRegions;

    #[test]
    fn summary_lists_kpis_trend_and_ranking() {
        let text = summary(&get_dashboard_data("贵州省"));
        assert!(text.starts_with("贵州省 (省级)"), "got: {text}");
        assert!(text.contains("4,158,230"));
        assert!(text.contains("10.60亿"));
        assert!(text.contains("覆盖率 99%"));
        assert!(text.contains("州市活跃度 (Top 5)"));
        assert!(text.contains("周日"));
    }

    #[test]
    fn regions_tree_indents_by_level() {
        let text = regions(&StaticRegions);
        assert!(text.starts_with("贵州省 [prov] (省级)"), "got: {text}");
        assert!(text.contains("\n  贵阳市 [gy] (市级)"));
        assert!(text.contains("\n    南明区 [nanming] (区县级)"));
        assert!(text.contains("- 油榨街道"));
    }

    #[test]
    fn roles_star_active() {
        let all = supervisor_mock::roles::roles();
        let text = roles(&all, &all[2]);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().nth(2).unwrap().starts_with("* CITY"));
    }

    #[test]
    fn every_panel_renders_with_title() {
        for view in [
            ViewState::Home,
            ViewState::Institution,
            ViewState::Resource,
            ViewState::Service,
            ViewState::Operation,
            ViewState::Quality,
            ViewState::Finance,
            ViewState::FinanceDetail,
        ] {
            let text = panel(view, "贵州省");
            assert!(text.starts_with(&format!("== {} ==", view.title())), "{:?}", view);
            assert!(text.lines().count() > 2, "{:?} panel is empty", view);
        }
    }

    #[test]
    fn finance_detail_marks_expense_row() {
        let text = panel(ViewState::FinanceDetail, "贵州省");
        assert!(text.contains("远程会诊 [支出]"), "got: {text}");
    }
}
