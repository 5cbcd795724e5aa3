//! Patient satisfaction and negative-review monitoring.

use supervisor_contracts::records::{
    QualityReview, QualitySummary, RegionalQuality, ReviewKind, ScoredName,
};

pub fn summary() -> QualitySummary {
    QualitySummary {
        score: 4.85,
        positive_rate: 85,
        negative_rate: 2,
        sample_size: 1_500,
        positive_total: "3,534,495".to_string(),
        negative_total: "83,164".to_string(),
        video_positive_rate: "98.6%".to_string(),
    }
}

pub fn regional() -> Vec<RegionalQuality> {
    [
        ("贵阳市", "1,032,750", "24,300", "98.3%", 98),
        ("遵义市", "822,100", "19,340", "98.4%", 98),
        ("六盘水市", "617,100", "14,520", "99.3%", 99),
        ("安顺市", "427,550", "10,060", "99.2%", 99),
    ]
    .into_iter()
    .map(|(name, positive, negative, rate, progress)| RegionalQuality {
        name: name.to_string(),
        positive: positive.to_string(),
        negative: negative.to_string(),
        rate: rate.to_string(),
        progress,
    })
    .collect()
}

fn scored(rows: &[(&str, f32)]) -> Vec<ScoredName> {
    rows.iter()
        .map(|&(name, score)| ScoredName {
            name: name.to_string(),
            score,
        })
        .collect()
}

/// Best rated service types, highest first.
pub fn service_scores() -> Vec<ScoredName> {
    scored(&[
        ("远程病理诊断", 4.95),
        ("远程影像诊断", 4.90),
        ("专家视频问诊", 4.82),
        ("慢病续方", 4.76),
        ("远程心电分析", 4.65),
    ])
}

/// Best rated hospitals, highest first.
pub fn hospital_scores() -> Vec<ScoredName> {
    scored(&[
        ("贵州省人民医院", 4.92),
        ("贵州医科大学附属医院", 4.88),
        ("贵州省肿瘤医院", 4.85),
        ("贵阳市第一人民医院", 4.79),
        ("遵义医科大学附属医院", 4.75),
    ])
}

/// Recent negative reviews, newest first.
pub fn negative_reviews() -> Vec<QualityReview> {
    use ReviewKind::{Attitude, Technical, WaitTime};

    [
        (WaitTime, "远程专家会诊", "等待专家接诊时间超过30分钟，没有提前通知。", "南明区花果园社区卫生服务中心", "2023-10-27", 2),
        (Attitude, "互联网门诊", "医生回复非常敷衍，三句话就结束了问诊。", "贵州医科大学附属医院", "2023-10-26", 1),
        (Technical, "远程影像诊断", "系统卡顿严重，影像加载不出来。", "乌当区人民医院", "2023-10-25", 2),
        (Attitude, "慢病复诊", "医生未仔细询问病情就直接开药。", "遵义医科大学附属医院", "2023-10-24", 1),
        (WaitTime, "远程会诊", "连接超时多次，体验很差。", "六盘水市人民医院", "2023-10-23", 2),
        (Technical, "在线咨询", "视频画面卡顿，声音听不清楚。", "安顺市人民医院", "2023-10-22", 2),
    ]
    .into_iter()
    .map(|(kind, service_type, content, location, date, score)| QualityReview {
        kind,
        service_type: service_type.to_string(),
        content: content.to_string(),
        location: location.to_string(),
        date: date.to_string(),
        score,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_stay_within_hundred() {
        let s = summary();
        assert!(s.positive_rate + s.negative_rate <= 100);
        assert!(s.score <= 5.0);
    }

    #[test]
    fn score_rankings_descend() {
        for list in [service_scores(), hospital_scores()] {
            assert_eq!(list.len(), 5);
            assert!(list.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn reviews_are_negative_and_newest_first() {
        let reviews = negative_reviews();
        assert_eq!(reviews.len(), 6);
        assert!(reviews.iter().all(|r| r.score <= 2));
        assert!(reviews.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn regional_progress_matches_rate() {
        for r in regional() {
            let rate: f32 = r.rate.trim_end_matches('%').parse().unwrap();
            assert_eq!(rate.floor() as u8, r.progress, "{}", r.name);
        }
    }
}
