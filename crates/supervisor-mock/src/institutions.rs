//! Lead institutions of the provincial medical alliances.

use supervisor_contracts::records::{Institution, InstitutionSummary};

use crate::owned;

pub fn institutions() -> Vec<Institution> {
    vec![
        Institution {
            id: 1,
            name: "贵州省人民医院".to_string(),
            level: "三级甲等".to_string(),
            address: "贵阳市中山东路1号".to_string(),
            dept_count: 45,
            status: "正常".to_string(),
            licenses: owned(&["医疗执业许可证", "放射诊疗许可证"]),
            expiry: "2026-12-31".to_string(),
            is_lead: true,
            members: owned(&["贵阳市第一人民医院", "南明区人民医院", "云岩区社区卫生服务中心"]),
            leader: "张院长".to_string(),
            phone: "0851-88888888".to_string(),
            cert_count: 3,
            violation_count: 0,
            depts: owned(&[
                "心血管内科",
                "神经外科",
                "远程医学中心",
                "呼吸与危重症医学科",
                "消化内科",
                "肾内科",
                "内分泌科",
                "血液内科",
            ]),
        },
        Institution {
            id: 2,
            name: "贵州医科大学附属医院".to_string(),
            level: "三级甲等".to_string(),
            address: "贵阳市贵医街28号".to_string(),
            dept_count: 52,
            status: "正常".to_string(),
            licenses: owned(&["医疗执业许可证", "放射诊疗许可证"]),
            expiry: "2026-12-31".to_string(),
            is_lead: true,
            members: owned(&["贵阳市第二人民医院", "白云区医院"]),
            leader: "李院长".to_string(),
            phone: "0851-99999999".to_string(),
            cert_count: 3,
            violation_count: 0,
            depts: owned(&["骨科", "神经内科", "康复医学科", "儿科", "妇产科", "眼科"]),
        },
        Institution {
            id: 3,
            name: "贵州省肿瘤医院".to_string(),
            level: "三级甲等".to_string(),
            address: "贵阳市北京西路1号".to_string(),
            dept_count: 28,
            status: "正常".to_string(),
            licenses: owned(&["医疗执业许可证"]),
            expiry: "2026-12-31".to_string(),
            is_lead: true,
            members: owned(&["花溪区人民医院", "乌当区人民医院"]),
            leader: "王院长".to_string(),
            phone: "0851-77777777".to_string(),
            cert_count: 1,
            violation_count: 0,
            depts: owned(&["肿瘤内科", "放疗科", "胸外科", "头颈外科"]),
        },
    ]
}

/// Connected institutions by grade.
pub fn summary() -> InstitutionSummary {
    InstitutionSummary {
        total: 342,
        tertiary: 12,
        secondary: 45,
        primary: 285,
    }
}
