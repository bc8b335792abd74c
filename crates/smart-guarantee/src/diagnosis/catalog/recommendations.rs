use serde::Serialize;

use crate::diagnosis::domain::RecommendationType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeProduct {
    pub name: &'static str,
    pub description: &'static str,
    pub rate: &'static str,
    pub max_amount: &'static str,
}

/// Canned guidance shown next to a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub recommendation_type: RecommendationType,
    pub title: &'static str,
    pub message: &'static str,
    pub actions: Vec<&'static str>,
    pub tips: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<AlternativeProduct>>,
}

#[derive(Debug, Clone)]
pub struct RecommendationCatalog {
    high_approval: Recommendation,
    medium_approval: Recommendation,
    low_approval: Recommendation,
}

impl RecommendationCatalog {
    pub fn standard() -> Self {
        Self {
            high_approval: high_approval(),
            medium_approval: medium_approval(),
            low_approval: low_approval(),
        }
    }

    pub fn for_type(&self, recommendation_type: RecommendationType) -> &Recommendation {
        match recommendation_type {
            RecommendationType::HighApproval => &self.high_approval,
            RecommendationType::MediumApproval => &self.medium_approval,
            RecommendationType::LowApproval => &self.low_approval,
        }
    }
}

fn high_approval() -> Recommendation {
    Recommendation {
        recommendation_type: RecommendationType::HighApproval,
        title: "보증 승인 가능성이 높습니다",
        message: "현재 조건이 일반적인 승인 기준을 충분히 넘습니다. 서류를 빠짐없이 준비해 신청하면 유리한 한도와 보증료율을 받을 수 있습니다.",
        actions: vec![
            "이번 달 안에 지역 신용보증재단 상담을 예약하세요.",
            "최근 2년간의 종합소득세 신고서와 부가가치세 신고서를 준비하세요.",
            "예상 한도에 여유가 있으니 필요한 금액 전액을 신청하세요.",
        ],
        tips: vec![
            "신용정보가 갱신되기 전에 신청하면 현재 등급으로 심사받을 수 있습니다.",
            "첫 보증 이용자 보증료 감면 혜택을 문의해 보세요.",
        ],
        alternatives: None,
    }
}

fn medium_approval() -> Recommendation {
    Recommendation {
        recommendation_type: RecommendationType::MediumApproval,
        title: "준비하면 승인 가능성이 있습니다",
        message: "대부분의 기준은 충족하지만 일부 항목이 점수를 낮추고 있습니다. 해당 항목을 보완한 뒤 신청하거나 신청금액을 줄여 보세요.",
        actions: vec![
            "단기 카드론을 먼저 상환해 부채비율을 낮추세요.",
            "매출장부나 카드 매출 정산 내역을 첨부해 매출을 증빙하세요.",
            "소액 보증으로 시작한 뒤 갱신 시 증액하는 방법을 고려하세요.",
        ],
        tips: vec![
            "일부라도 담보를 제공하면 평가가 좋아집니다.",
            "사업 기간이 6개월 더 쌓이면 더 유리한 구간으로 올라갑니다.",
        ],
        alternatives: Some(vec![
            AlternativeProduct {
                name: "소상공인 정책자금",
                description: "매출은 안정적이지만 담보가 부족한 사업자를 위한 직접 대출입니다.",
                rate: "연 2.5%부터",
                max_amount: "7천만원",
            },
            AlternativeProduct {
                name: "은행 협약보증",
                description: "협약 은행을 통해 간소화된 심사로 발급되는 보증입니다.",
                rate: "보증료 1.2%부터",
                max_amount: "5천만원",
            },
        ]),
    }
}

fn low_approval() -> Recommendation {
    Recommendation {
        recommendation_type: RecommendationType::LowApproval,
        title: "신청 전에 조건을 개선하세요",
        message: "여러 항목이 일반적인 승인 기준에 못 미칩니다. 거절 이력은 기록에 남으므로 기본 조건부터 개선하세요.",
        actions: vec![
            "신용정보를 확인하고 연체 잔액을 정리하세요.",
            "사업 매출은 하나의 사업용 계좌로 관리하세요.",
            "소상공인 컨설턴트와 상담해 채무 조정 계획을 세우세요.",
        ],
        tips: vec![
            "공과금과 세금을 제때 납부하면 몇 달 안에 신용등급이 오릅니다.",
            "미소금융은 보증 없이 이용할 수 있어 거래 이력을 쌓는 데 도움이 됩니다.",
        ],
        alternatives: Some(vec![
            AlternativeProduct {
                name: "자영업자 미소금융",
                description: "저소득·저신용 사업자도 담보 없이 대출받을 수 있습니다.",
                rate: "연 4.5%",
                max_amount: "2천만원",
            },
            AlternativeProduct {
                name: "긴급 경영안정자금",
                description: "일시적인 매출 감소를 겪는 사업자를 위한 단기 유동성 지원입니다.",
                rate: "연 3.0%부터",
                max_amount: "3천만원",
            },
        ]),
    }
}
