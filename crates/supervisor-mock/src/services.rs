//! Telemedicine service categories and per-hospital adoption.

use supervisor_contracts::{
    records::{HospitalServiceProfile, KpiCard, NamedValue, ServiceCategory},
    view::ServiceTab,
};

use crate::{card, named, owned};

pub fn service_kpis() -> Vec<KpiCard> {
    vec![
        card("开通远程医疗机构数", "342", "", "覆盖率 100%"),
        card("开通互联网医院数", "75", "", "累计服务 300万+"),
        card("活跃注册医生", "8,500", "", "本月活跃 > 60%"),
        card("本月服务总量", "4,158,230", "", "环比 +12.5%"),
    ]
}

fn categories(rows: &[(&str, u32, u32)]) -> Vec<ServiceCategory> {
    rows.iter()
        .map(|&(name, institutions, doctors)| ServiceCategory {
            name: name.to_string(),
            institutions,
            doctors,
        })
        .collect()
}

/// Service categories offered under a tab.
pub fn categories_for(tab: ServiceTab) -> Vec<ServiceCategory> {
    match tab {
        ServiceTab::B2b => categories(&[
            ("远程会诊", 240, 1_200),
            ("远程影像", 300, 800),
            ("远程心电", 320, 600),
            ("远程病理", 180, 400),
            ("远程重症监护", 80, 150),
            ("远程卒中", 120, 200),
            ("远程超声示教", 60, 100),
            ("远程查房", 150, 300),
        ]),
        ServiceTab::Toc => categories(&[
            ("慢病复诊", 70, 5_500),
            ("在线咨询", 75, 8_000),
            ("处方共享及配送", 65, 4_000),
            ("公共卫生随访", 300, 2_000),
            ("AI辅助诊疗", 45, 1_500),
            ("报告解读", 75, 6_000),
        ]),
    }
}

/// Hospital volume ranking under a tab, highest first.
pub fn rankings_for(tab: ServiceTab) -> Vec<NamedValue> {
    match tab {
        ServiceTab::B2b => vec![
            named("贵州省人民医院", 65_890),
            named("贵州省肿瘤医院", 40_600),
            named("贵州医科大学附属医院", 29_050),
        ],
        ServiceTab::Toc => vec![
            named("贵州省人民医院", 391_300),
            named("贵州医科大学附属医院", 339_100),
            named("贵州省肿瘤医院", 249_800),
        ],
    }
}

/// Full scale of the ranking progress bars.
pub fn ranking_max(tab: ServiceTab) -> u64 {
    match tab {
        ServiceTab::B2b => 70_000,
        ServiceTab::Toc => 400_000,
    }
}

/// Month-to-date volume of the tab's channel.
pub fn monthly_volume(tab: ServiceTab) -> u64 {
    match tab {
        ServiceTab::B2b => 1_247_400,
        ServiceTab::Toc => 2_910_830,
    }
}

pub fn hospital_profiles() -> Vec<HospitalServiceProfile> {
    vec![
        HospitalServiceProfile {
            id: 1,
            name: "贵州省人民医院".to_string(),
            service_count: 9,
            doctor_count: 1_240,
            b2b_services: owned(&[
                "远程会诊",
                "远程心电",
                "远程重症监护",
                "远程超声示教",
                "远程双向转诊",
                "远程手术示教",
                "远程检验质控",
                "远程康复指导",
            ]),
            toc_services: owned(&["慢病复诊", "医学科普", "远程胎心监测", "居家护理预约", "健康档案查询"]),
            dept_distribution: vec![
                named("神经内科", 15),
                named("心内科", 12),
                named("普外科", 10),
                named("呼吸科", 8),
                named("儿科", 6),
                named("皮肤科", 4),
            ],
        },
        HospitalServiceProfile {
            id: 2,
            name: "贵州医科大学附属医院".to_string(),
            service_count: 9,
            doctor_count: 980,
            b2b_services: owned(&["远程会诊", "远程影像", "远程病理", "远程查房"]),
            toc_services: owned(&["在线咨询", "处方共享", "AI辅助诊疗"]),
            dept_distribution: vec![
                named("骨科", 18),
                named("消化科", 14),
                named("妇产科", 11),
                named("眼科", 9),
                named("耳鼻喉", 7),
                named("口腔科", 5),
            ],
        },
        HospitalServiceProfile {
            id: 3,
            name: "贵州省肿瘤医院".to_string(),
            service_count: 9,
            doctor_count: 650,
            b2b_services: owned(&["远程会诊", "远程影像", "远程肿瘤MDT"]),
            toc_services: owned(&["随访管理", "康复指导"]),
            dept_distribution: vec![
                named("肿瘤内科", 20),
                named("放疗科", 15),
                named("胸外科", 8),
                named("影像科", 6),
                named("检验科", 4),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_counts_per_tab() {
        assert_eq!(categories_for(ServiceTab::B2b).len(), 8);
        assert_eq!(categories_for(ServiceTab::Toc).len(), 6);
    }

    #[test]
    fn rankings_fit_under_bar_max_and_descend() {
        for tab in [ServiceTab::B2b, ServiceTab::Toc] {
            let ranking = rankings_for(tab);
            let max = ranking_max(tab);
            assert!(ranking.iter().all(|r| r.value <= max), "{:?} exceeds max", tab);
            assert!(
                ranking.windows(2).all(|w| w[0].value >= w[1].value),
                "{:?} ranking not descending",
                tab
            );
        }
    }

    #[test]
    fn channel_volumes_sum_to_month_total() {
        assert_eq!(
            monthly_volume(ServiceTab::B2b) + monthly_volume(ServiceTab::Toc),
            4_158_230
        );
    }

    #[test]
    fn profiles_have_departments() {
        for profile in hospital_profiles() {
            assert!(!profile.dept_distribution.is_empty(), "{}", profile.name);
            assert!(!profile.b2b_services.is_empty());
        }
    }
}
