//! Flat descriptive records shown by the domain panels.
//!
//! Every record is pre-populated mock content. The application never
//! creates, updates or deletes them; they derive serde traits only so the
//! CLI can dump a panel as JSON.

use serde::{Deserialize, Serialize};

// ── Shared ────────────────────────────────────────────────────────────────────

/// A supervisory platform identity the operator can switch to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// "SUPER", "PROV", "CITY" or "COUNTY".
    pub id: String,
    pub name: String,
}

/// A labelled headline metric card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    /// Pre-formatted value, e.g. "12,450" or "64.7%".
    pub value: String,
    #[serde(default)]
    pub unit: String,
    /// Secondary caption, e.g. "覆盖率 100%".
    #[serde(default)]
    pub sub: String,
}

/// A name with a numeric value: rankings and distributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: u64,
}

/// A name with a 0–5 review score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredName {
    pub name: String,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
}

/// Period-over-period change shown next to a KPI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    /// Pre-formatted change, e.g. "+12.5%".
    pub change: String,
    pub direction: TrendDirection,
}

// ── Institutions ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: u32,
    pub name: String,
    /// License grade, e.g. "三级甲等".
    pub level: String,
    pub address: String,
    pub dept_count: u32,
    pub status: String,
    pub licenses: Vec<String>,
    pub expiry: String,
    /// Lead institution of a medical alliance (医联体).
    pub is_lead: bool,
    /// Alliance member institutions, only meaningful when `is_lead`.
    pub members: Vec<String>,
    pub leader: String,
    pub phone: String,
    pub cert_count: u32,
    pub violation_count: u32,
    pub depts: Vec<String>,
}

/// Connected-institution counts by grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionSummary {
    pub total: u32,
    pub tertiary: u32,
    pub secondary: u32,
    pub primary: u32,
}

// ── Human resources ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    /// Professional title, e.g. "主任医师".
    pub title: String,
    pub dept: String,
    pub hospital: String,
    /// Services delivered this month.
    pub volume: u32,
    pub score: f32,
    /// Assessment status, e.g. "合规".
    pub status: String,
}

/// Practice-license details shown in the qualification popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorQualification {
    pub certificate_no: String,
    pub issued_on: String,
    pub multi_site: String,
    pub certificates: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    Completed,
    InProgress,
    AwaitingPayment,
    Cancelled,
}

impl PatientStatus {
    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Completed => "已完成",
            PatientStatus::InProgress => "进行中",
            PatientStatus::AwaitingPayment => "待支付",
            PatientStatus::Cancelled => "已取消",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    /// Masked name, e.g. "张*山".
    pub name: String,
    pub gender: Gender,
    pub age: u8,
    pub diagnosis: String,
    pub hospital: String,
    pub dept: String,
    pub date: String,
    /// Service kind, e.g. "慢病复诊".
    pub service_type: String,
    pub status: PatientStatus,
}

// ── Service types ─────────────────────────────────────────────────────────────

/// One telemedicine service category with adoption counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub name: String,
    /// Institutions offering the service.
    pub institutions: u32,
    /// Service volume (人次) charted per category.
    pub doctors: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalServiceProfile {
    pub id: u32,
    pub name: String,
    pub service_count: u32,
    pub doctor_count: u32,
    pub b2b_services: Vec<String>,
    pub toc_services: Vec<String>,
    pub dept_distribution: Vec<NamedValue>,
}

// ── Operations ────────────────────────────────────────────────────────────────

/// Per-city operating volume split by channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDetail {
    pub name: String,
    pub remote: u64,
    pub internet: u64,
    pub total: u64,
    /// Month-over-month growth in percent.
    pub growth: f32,
    /// Share of the provincial total in percent.
    pub percent: f32,
}

/// One day of the operations trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyVolume {
    /// "MM-DD".
    pub name: String,
    pub volume: u64,
    /// Day-over-day change in percent, may be negative.
    pub growth: i32,
}

// ── Quality ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitySummary {
    pub score: f32,
    pub positive_rate: u8,
    pub negative_rate: u8,
    pub sample_size: u32,
    pub positive_total: String,
    pub negative_total: String,
    pub video_positive_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalQuality {
    pub name: String,
    pub positive: String,
    pub negative: String,
    pub rate: String,
    /// Rounded positive rate used for the progress bar.
    pub progress: u8,
}

/// Category of a negative review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewKind {
    WaitTime,
    Attitude,
    Technical,
}

impl ReviewKind {
    pub fn tag(self) -> &'static str {
        match self {
            ReviewKind::WaitTime => "候诊时间长",
            ReviewKind::Attitude => "服务态度差",
            ReviewKind::Technical => "技术故障",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReview {
    pub kind: ReviewKind,
    pub service_type: String,
    pub content: String,
    pub location: String,
    pub date: String,
    /// 1–5 stars.
    pub score: u8,
}

// ── Finance ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceKpi {
    pub label: String,
    pub value: String,
    pub trend: Option<Trend>,
    #[serde(default)]
    pub sub: String,
    pub remote_value: String,
    pub internet_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalFinance {
    pub name: String,
    pub revenue: String,
    pub volume: String,
    /// Remote-care share of revenue in percent.
    pub remote_share: u8,
    pub internet_share: u8,
    pub remote_revenue: String,
    pub internet_revenue: String,
}

/// A key institution on the finance panel; selecting one opens its detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceInstitution {
    pub name: String,
    pub level: String,
    pub address: String,
    pub revenue: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashFlow {
    Income,
    Expense,
}

impl CashFlow {
    pub fn label(self) -> &'static str {
        match self {
            CashFlow::Income => "收入",
            CashFlow::Expense => "支出",
        }
    }
}

/// One row of the hospital income/expense statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceLineItem {
    pub name: String,
    /// Channel tag, e.g. "远程医疗 (机构-机构)".
    pub tag: String,
    pub flow: CashFlow,
    pub count: u32,
    pub price: String,
    pub total: String,
    /// Share of income in percent; 0 for expense rows.
    pub percent: u8,
}

impl FinanceLineItem {
    /// Remote-care rows are tagged "远程…"; the rest are internet services.
    pub fn is_remote(&self) -> bool {
        self.tag.contains("远程")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceDetail {
    pub hospital_name: String,
    pub level: String,
    pub revenue: String,
    pub composition_remote: u8,
    pub composition_internet: u8,
    pub human_cost: u8,
    pub ops_cost: u8,
    pub profit: u8,
    pub settlement_expense: String,
    pub settlement_income: String,
    pub main_partners: Vec<String>,
    pub services: Vec<FinanceLineItem>,
}
