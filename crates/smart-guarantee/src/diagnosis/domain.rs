use serde::{Deserialize, Serialize};

use super::validation::ValidationErrors;

/// Identifier of an industry row in the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndustryId(pub u8);

/// Candidate questionnaire answers before validation.
///
/// Every field is optional so that a partially filled form, a JSON body or a CSV row can
/// be represented as-is and reported on field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisDraft {
    #[serde(default)]
    pub industry: Option<i64>,
    /// Monthly average revenue in won.
    #[serde(default)]
    pub revenue: Option<i64>,
    /// Years in business.
    #[serde(default, alias = "businessPeriod")]
    pub business_period: Option<f64>,
    /// 1 (best) .. 10 (worst).
    #[serde(default, alias = "creditRating")]
    pub credit_rating: Option<i64>,
    /// Total outstanding loan balance in won.
    #[serde(default, alias = "existingDebt")]
    pub existing_debt: Option<i64>,
    #[serde(default, alias = "hasCollateral")]
    pub has_collateral: Option<bool>,
    /// Desired guarantee amount in won.
    #[serde(default, alias = "requestedAmount")]
    pub requested_amount: Option<i64>,
}

/// Validated questionnaire answers consumed by the scoring engine.
///
/// Only [`DiagnosisDraft::validate`] (or `TryFrom<DiagnosisDraft>`) produces values of this
/// type, so the engine never observes a zero revenue or an out-of-range rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DiagnosisDraft")]
pub struct DiagnosisInput {
    pub(crate) industry: IndustryId,
    pub(crate) revenue: u64,
    pub(crate) business_period: f64,
    pub(crate) credit_rating: u8,
    pub(crate) existing_debt: u64,
    pub(crate) has_collateral: bool,
    pub(crate) requested_amount: u64,
}

impl DiagnosisInput {
    pub fn industry(&self) -> IndustryId {
        self.industry
    }

    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    pub fn business_period(&self) -> f64 {
        self.business_period
    }

    pub fn credit_rating(&self) -> u8 {
        self.credit_rating
    }

    pub fn existing_debt(&self) -> u64 {
        self.existing_debt
    }

    pub fn has_collateral(&self) -> bool {
        self.has_collateral
    }

    pub fn requested_amount(&self) -> u64 {
        self.requested_amount
    }

    /// Draft carrying the same answers, useful for editing and resubmitting.
    pub fn to_draft(&self) -> DiagnosisDraft {
        DiagnosisDraft {
            industry: Some(i64::from(self.industry.0)),
            revenue: Some(self.revenue as i64),
            business_period: Some(self.business_period),
            credit_rating: Some(i64::from(self.credit_rating)),
            existing_debt: Some(self.existing_debt as i64),
            has_collateral: Some(self.has_collateral),
            requested_amount: Some(self.requested_amount as i64),
        }
    }
}

impl TryFrom<DiagnosisDraft> for DiagnosisInput {
    type Error = ValidationErrors;

    fn try_from(draft: DiagnosisDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

/// Five-step risk grade derived from the approval probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    A,
    B,
    C,
    D,
    E,
}

impl RiskLevel {
    pub const fn from_probability(approval_probability: u8) -> Self {
        match approval_probability {
            p if p >= 85 => RiskLevel::A,
            p if p >= 75 => RiskLevel::B,
            p if p >= 60 => RiskLevel::C,
            p if p >= 45 => RiskLevel::D,
            _ => RiskLevel::E,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::A => "A",
            RiskLevel::B => "B",
            RiskLevel::C => "C",
            RiskLevel::D => "D",
            RiskLevel::E => "E",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            RiskLevel::A => Tone::Excellent,
            RiskLevel::B => Tone::Good,
            RiskLevel::C => Tone::Fair,
            RiskLevel::D => Tone::Caution,
            RiskLevel::E => Tone::Critical,
        }
    }
}

/// Which canned recommendation block accompanies a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    HighApproval,
    MediumApproval,
    LowApproval,
}

impl RecommendationType {
    pub const ALL: [RecommendationType; 3] = [
        RecommendationType::HighApproval,
        RecommendationType::MediumApproval,
        RecommendationType::LowApproval,
    ];

    pub const fn from_probability(approval_probability: u8) -> Self {
        match approval_probability {
            p if p >= 75 => RecommendationType::HighApproval,
            p if p >= 50 => RecommendationType::MediumApproval,
            _ => RecommendationType::LowApproval,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            RecommendationType::HighApproval => "high_approval",
            RecommendationType::MediumApproval => "medium_approval",
            RecommendationType::LowApproval => "low_approval",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.key() == key.trim())
    }
}

/// Display tier shared by risk grades, probabilities and statistics bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Excellent,
    Good,
    Fair,
    Caution,
    Critical,
}

impl Tone {
    pub const fn for_probability(approval_probability: u8) -> Self {
        RiskLevel::from_probability(approval_probability).tone()
    }

    pub const fn color(self) -> &'static str {
        match self {
            Tone::Excellent => "green",
            Tone::Good => "blue",
            Tone::Fair => "yellow",
            Tone::Caution => "orange",
            Tone::Critical => "red",
        }
    }
}

/// Scoring output. Every field is a pure function of `input`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub approval_probability: u8,
    /// Won, a multiple of 1,000,000 and at most 500,000,000.
    pub guarantee_limit: u64,
    /// Percent, one decimal place.
    pub guarantee_fee_rate: f64,
    pub risk_level: RiskLevel,
    pub recommendation_type: RecommendationType,
    pub input: DiagnosisInput,
}
