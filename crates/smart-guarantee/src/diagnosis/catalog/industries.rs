use serde::Serialize;

use crate::diagnosis::domain::{IndustryId, RiskLevel};

/// Fee adjustment applied when an industry id has no catalog entry.
pub const UNKNOWN_INDUSTRY_ADJUSTMENT: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryProfile {
    pub id: IndustryId,
    pub name: &'static str,
    pub description: &'static str,
    /// Baseline approval rate for the sector, in percent.
    pub avg_approval_rate: u8,
    pub risk_level: RiskLevel,
    /// Percentage points added to the guarantee fee rate.
    pub fee_adjustment: f64,
}

#[derive(Debug, Clone)]
pub struct IndustryCatalog {
    profiles: Vec<IndustryProfile>,
}

impl IndustryCatalog {
    pub fn standard() -> Self {
        Self::from_profiles(standard_profiles())
    }

    pub fn from_profiles(profiles: Vec<IndustryProfile>) -> Self {
        Self { profiles }
    }

    pub fn get(&self, id: IndustryId) -> Option<&IndustryProfile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndustryProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn risk_adjustment(&self, id: IndustryId) -> f64 {
        self.get(id)
            .map(|profile| profile.fee_adjustment)
            .unwrap_or(UNKNOWN_INDUSTRY_ADJUSTMENT)
    }
}

fn standard_profiles() -> Vec<IndustryProfile> {
    vec![
        IndustryProfile {
            id: IndustryId(1),
            name: "음식업",
            description: "음식점, 카페, 배달 전문점 등 외식 업종으로 마진이 낮고 폐업률이 높은 편입니다.",
            avg_approval_rate: 72,
            risk_level: RiskLevel::C,
            fee_adjustment: 0.1,
        },
        IndustryProfile {
            id: IndustryId(2),
            name: "소매업",
            description: "동네 상점과 온라인 판매업으로 소비 경기와 플랫폼 경쟁의 영향을 크게 받습니다.",
            avg_approval_rate: 70,
            risk_level: RiskLevel::C,
            fee_adjustment: 0.2,
        },
        IndustryProfile {
            id: IndustryId(3),
            name: "제조업",
            description: "생산 설비와 안정적인 거래처를 갖춘 업종으로 정책자금 지원 우대 대상입니다.",
            avg_approval_rate: 82,
            risk_level: RiskLevel::B,
            fee_adjustment: -0.1,
        },
        IndustryProfile {
            id: IndustryId(4),
            name: "건설업",
            description: "종합·전문 건설업으로 공사 단위 수금 구조 때문에 현금흐름 변동이 큽니다.",
            avg_approval_rate: 61,
            risk_level: RiskLevel::D,
            fee_adjustment: 0.4,
        },
        IndustryProfile {
            id: IndustryId(5),
            name: "서비스업",
            description: "미용실, 수리점, 컨설팅 등 개인 및 사업 서비스 업종입니다.",
            avg_approval_rate: 75,
            risk_level: RiskLevel::C,
            fee_adjustment: 0.1,
        },
        IndustryProfile {
            id: IndustryId(6),
            name: "도매업",
            description: "외상 거래로 재고를 운영하는 유통업으로 운전자금 수요가 많습니다.",
            avg_approval_rate: 72,
            risk_level: RiskLevel::C,
            fee_adjustment: 0.2,
        },
        IndustryProfile {
            id: IndustryId(7),
            name: "운수업",
            description: "화물, 택배, 여객 운송업으로 유류비와 차량 할부 부담에 민감합니다.",
            avg_approval_rate: 67,
            risk_level: RiskLevel::D,
            fee_adjustment: 0.3,
        },
        IndustryProfile {
            id: IndustryId(8),
            name: "숙박업",
            description: "게스트하우스, 모텔 등 숙박 시설로 계절에 따라 가동률이 달라집니다.",
            avg_approval_rate: 69,
            risk_level: RiskLevel::C,
            fee_adjustment: 0.2,
        },
        IndustryProfile {
            id: IndustryId(9),
            name: "교육서비스업",
            description: "학원과 교육기관으로 수강료 선납과 예측 가능한 모집 주기를 갖습니다.",
            avg_approval_rate: 84,
            risk_level: RiskLevel::B,
            fee_adjustment: -0.1,
        },
        IndustryProfile {
            id: IndustryId(10),
            name: "의료업",
            description: "의원, 약국, 요양기관 등 면허 기반 업종으로 보험 청구 수입이 안정적입니다.",
            avg_approval_rate: 88,
            risk_level: RiskLevel::A,
            fee_adjustment: -0.2,
        },
        IndustryProfile {
            id: IndustryId(11),
            name: "농업",
            description: "농업, 수산업, 농산물 가공업으로 기상 여건과 작황 가격의 영향을 받습니다.",
            avg_approval_rate: 69,
            risk_level: RiskLevel::C,
            fee_adjustment: 0.2,
        },
        IndustryProfile {
            id: IndustryId(12),
            name: "IT서비스업",
            description: "소프트웨어 개발, 웹 제작, IT 컨설팅 업종으로 고정비가 낮고 반복 계약이 많습니다.",
            avg_approval_rate: 84,
            risk_level: RiskLevel::B,
            fee_adjustment: -0.1,
        },
        IndustryProfile {
            id: IndustryId(13),
            name: "부동산업",
            description: "중개, 임대, 관리업으로 거래량과 금리 변동에 직접 영향을 받습니다.",
            avg_approval_rate: 60,
            risk_level: RiskLevel::D,
            fee_adjustment: 0.4,
        },
        IndustryProfile {
            id: IndustryId(14),
            name: "문화예술업",
            description: "스튜디오, 공연장, 창작 기획사 등 프로젝트 단위 수입 구조의 업종입니다.",
            avg_approval_rate: 65,
            risk_level: RiskLevel::D,
            fee_adjustment: 0.3,
        },
        IndustryProfile {
            id: IndustryId(15),
            name: "금융보험업",
            description: "보험 대리점과 중개업으로 규제 아래 수수료 기반 수익을 올립니다.",
            avg_approval_rate: 86,
            risk_level: RiskLevel::A,
            fee_adjustment: -0.1,
        },
    ]
}
