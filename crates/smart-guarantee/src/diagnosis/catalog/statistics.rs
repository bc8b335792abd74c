use serde::Serialize;

use crate::diagnosis::domain::Tone;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryApprovalStat {
    pub industry: &'static str,
    pub rate: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountBandStat {
    pub range: &'static str,
    pub rate: f64,
    pub count: u32,
}

impl AmountBandStat {
    pub fn tone(&self) -> Tone {
        match self.rate {
            rate if rate >= 80.0 => Tone::Excellent,
            rate if rate >= 70.0 => Tone::Good,
            rate if rate >= 60.0 => Tone::Fair,
            _ => Tone::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    pub last_hour_diagnosis: u32,
    pub peak_hours: &'static str,
    pub most_active_day: &'static str,
}

/// Display-only aggregate counters. Nothing in the scoring path reads these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub total_diagnosis_today: u32,
    pub total_applications_this_month: u32,
    pub average_approval_days: f64,
    /// Won.
    pub average_approval_amount: u64,
    pub most_requested_amount: &'static str,
    pub recent_activity: RecentActivity,
    pub approval_rate_by_industry: Vec<IndustryApprovalStat>,
    pub success_rate_by_amount: Vec<AmountBandStat>,
}

impl StatisticsSnapshot {
    pub fn standard() -> Self {
        Self {
            total_diagnosis_today: 1_247,
            total_applications_this_month: 28_934,
            average_approval_days: 7.2,
            average_approval_amount: 48_500_000,
            most_requested_amount: "3천만원-5천만원",
            recent_activity: RecentActivity {
                last_hour_diagnosis: 42,
                peak_hours: "10:00-12:00",
                most_active_day: "화요일",
            },
            approval_rate_by_industry: vec![
                industry("음식업", 72.4, 1_842),
                industry("소매업", 70.1, 1_531),
                industry("제조업", 82.3, 1_227),
                industry("건설업", 61.2, 806),
                industry("서비스업", 74.8, 1_405),
                industry("도매업", 71.5, 688),
                industry("운수업", 66.7, 512),
                industry("숙박업", 68.9, 433),
                industry("교육서비스업", 83.6, 377),
                industry("의료업", 88.1, 298),
                industry("농업", 69.3, 241),
                industry("IT서비스업", 84.2, 965),
                industry("부동산업", 60.4, 354),
                industry("문화예술업", 64.5, 219),
                industry("금융보험업", 85.7, 187),
            ],
            success_rate_by_amount: vec![
                band("1천만원 미만", 86.2, 6_412),
                band("1천만원-3천만원", 81.5, 9_873),
                band("3천만원-5천만원", 76.4, 7_205),
                band("5천만원-1억원", 69.8, 3_518),
                band("1억원-3억원", 63.1, 1_486),
                band("3억원 초과", 55.7, 440),
            ],
        }
    }

    /// Highest approval rates first.
    pub fn top_industries(&self, limit: usize) -> Vec<&IndustryApprovalStat> {
        let mut ranked: Vec<_> = self.approval_rate_by_industry.iter().collect();
        ranked.sort_by(|a, b| b.rate.total_cmp(&a.rate));
        ranked.truncate(limit);
        ranked
    }

    /// Lowest approval rates first.
    pub fn bottom_industries(&self, limit: usize) -> Vec<&IndustryApprovalStat> {
        let mut ranked: Vec<_> = self.approval_rate_by_industry.iter().collect();
        ranked.sort_by(|a, b| a.rate.total_cmp(&b.rate));
        ranked.truncate(limit);
        ranked
    }

    pub fn total_industry_applications(&self) -> u64 {
        self.approval_rate_by_industry
            .iter()
            .map(|stat| u64::from(stat.count))
            .sum()
    }
}

fn industry(industry: &'static str, rate: f64, count: u32) -> IndustryApprovalStat {
    IndustryApprovalStat {
        industry,
        rate,
        count,
    }
}

fn band(range: &'static str, rate: f64, count: u32) -> AmountBandStat {
    AmountBandStat { range, rate, count }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_industries_by_rate() {
        let stats = StatisticsSnapshot::standard();

        let top: Vec<_> = stats.top_industries(5).iter().map(|s| s.industry).collect();
        assert_eq!(
            top,
            vec![
                "의료업",
                "금융보험업",
                "IT서비스업",
                "교육서비스업",
                "제조업"
            ]
        );

        let bottom: Vec<_> = stats
            .bottom_industries(5)
            .iter()
            .map(|s| s.industry)
            .collect();
        assert_eq!(
            bottom,
            vec![
                "부동산업",
                "건설업",
                "문화예술업",
                "운수업",
                "숙박업"
            ]
        );
    }

    #[test]
    fn ranking_does_not_reorder_the_fixture() {
        let stats = StatisticsSnapshot::standard();
        let _ = stats.top_industries(3);
        assert_eq!(stats.approval_rate_by_industry[0].industry, "음식업");
    }

    #[test]
    fn totals_and_band_tones() {
        let stats = StatisticsSnapshot::standard();
        assert_eq!(stats.total_industry_applications(), 11_085);

        let tones: Vec<_> = stats
            .success_rate_by_amount
            .iter()
            .map(AmountBandStat::tone)
            .collect();
        assert_eq!(
            tones,
            vec![
                Tone::Excellent,
                Tone::Excellent,
                Tone::Good,
                Tone::Fair,
                Tone::Fair,
                Tone::Critical
            ]
        );
    }
}
