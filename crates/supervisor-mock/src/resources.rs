//! Registered doctors and recent patient services.

use supervisor_contracts::records::{
    Doctor, DoctorQualification, Gender, KpiCard, NamedValue, Patient, PatientStatus,
};

use crate::{card, owned};

/// Upper bound of the title distribution bars.
pub const TITLE_BAR_MAX: u64 = 5_000;

// ── Doctors ──────────────────────────────────────────────────────────────────

pub fn doctor_kpis() -> Vec<KpiCard> {
    vec![
        card("注册医生总数", "12,450", "人", ""),
        card("资质合格率", "100%", "", ""),
        card("高级职称占比", "64.7%", "", ""),
        card("人均服务量", "334", "次", ""),
    ]
}

pub fn title_distribution() -> Vec<NamedValue> {
    [("主任医师", 3_200), ("副主任医师", 4_800), ("主治医师", 2_450), ("医师", 2_000)]
        .into_iter()
        .map(|(name, value)| NamedValue {
            name: name.to_string(),
            value,
        })
        .collect()
}

pub fn doctors() -> Vec<Doctor> {
    [
        (1, "刘伟", "主任医师", "心内科", 1_540, 4.9),
        (2, "张华", "主任医师", "神经内科", 1_420, 4.8),
        (3, "李明", "副主任医师", "呼吸科", 1_280, 4.9),
        (4, "赵丽", "副主任医师", "内分泌", 1_150, 4.7),
    ]
    .into_iter()
    .map(|(id, name, title, dept, volume, score)| Doctor {
        id,
        name: name.to_string(),
        title: title.to_string(),
        dept: dept.to_string(),
        hospital: "贵州省人民医院".to_string(),
        volume,
        score,
        status: "合规".to_string(),
    })
    .collect()
}

/// License details shown for a doctor. Every mock doctor shares one record.
pub fn qualification(_doctor: &Doctor) -> DoctorQualification {
    DoctorQualification {
        certificate_no: "110520000012345".to_string(),
        issued_on: "2015-06-20".to_string(),
        multi_site: "是 (3家机构)".to_string(),
        certificates: owned(&["医师执业证书", "职称资格证书"]),
    }
}

// ── Patients ─────────────────────────────────────────────────────────────────

pub fn patient_kpis() -> Vec<KpiCard> {
    vec![
        card("总服务人次", "4,158,230", "人次", ""),
        card("基层首诊率", "62.5%", "", ""),
        card("平均住院日", "8.5", "天", ""),
        card("患者满意度", "98.2%", "", ""),
    ]
}

pub fn patients() -> Vec<Patient> {
    use Gender::{Female, Male};
    use PatientStatus::{AwaitingPayment, Cancelled, Completed, InProgress};

    [
        (1, "张*山", Male, 45, "高血压 II级", "贵州省人民医院", "心内科", "10-27 14:30", "慢病复诊", Completed),
        (2, "李*梅", Female, 32, "上呼吸道感染", "南明区人民医院", "呼吸内科", "10-27 10:15", "在线问诊", InProgress),
        (3, "王*强", Male, 67, "冠心病", "遵义医科大学附属医院", "心外科", "10-26 16:20", "远程会诊", AwaitingPayment),
        (4, "赵*珍", Female, 58, "2型糖尿病", "花溪区人民医院", "内分泌科", "10-26 09:45", "慢病续方", Completed),
        (5, "刘*华", Male, 29, "急性肠胃炎", "云岩区第一人民医院", "消化内科", "10-25 19:30", "门诊预约", Cancelled),
        (6, "陈*芳", Female, 41, "甲状腺结节", "贵州医科大学附属医院", "甲乳外科", "10-25 11:00", "专家咨询", Completed),
    ]
    .into_iter()
    .map(
        |(id, name, gender, age, diagnosis, hospital, dept, date, service_type, status)| Patient {
            id,
            name: name.to_string(),
            gender,
            age,
            diagnosis: diagnosis.to_string(),
            hospital: hospital.to_string(),
            dept: dept.to_string(),
            date: date.to_string(),
            service_type: service_type.to_string(),
            status,
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bars_fit_under_max() {
        for title in title_distribution() {
            assert!(title.value <= TITLE_BAR_MAX, "{} exceeds bar max", title.name);
        }
    }

    #[test]
    fn doctors_are_compliant() {
        let list = doctors();
        assert_eq!(list.len(), 4);
        assert!(list.iter().all(|d| d.status == "合规"));
        assert!(list.iter().all(|d| (0.0..=5.0).contains(&d.score)));
    }

    #[test]
    fn patient_names_are_masked() {
        for p in patients() {
            assert!(p.name.contains('*'), "{} is not masked", p.name);
        }
    }

    #[test]
    fn patients_cover_every_status() {
        let list = patients();
        for status in [
            PatientStatus::Completed,
            PatientStatus::InProgress,
            PatientStatus::AwaitingPayment,
            PatientStatus::Cancelled,
        ] {
            assert!(list.iter().any(|p| p.status == status), "missing {:?}", status);
        }
    }

    #[test]
    fn qualification_lists_two_certificates() {
        let q = qualification(&doctors()[0]);
        assert_eq!(q.certificates.len(), 2);
        assert_eq!(q.certificate_no, "110520000012345");
    }
}
