//! Static reference data: industry profiles, recommendation copy and display statistics.
//!
//! Loaded once through [`ReferenceData::standard`] and handed to the engine and the
//! report builder explicitly.

mod industries;
mod recommendations;
mod statistics;

pub use industries::{IndustryCatalog, IndustryProfile, UNKNOWN_INDUSTRY_ADJUSTMENT};
pub use recommendations::{AlternativeProduct, Recommendation, RecommendationCatalog};
pub use statistics::{AmountBandStat, IndustryApprovalStat, RecentActivity, StatisticsSnapshot};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub industries: Arc<IndustryCatalog>,
    pub recommendations: RecommendationCatalog,
    pub statistics: StatisticsSnapshot,
}

impl ReferenceData {
    pub fn standard() -> Self {
        Self {
            industries: Arc::new(IndustryCatalog::standard()),
            recommendations: RecommendationCatalog::standard(),
            statistics: StatisticsSnapshot::standard(),
        }
    }
}
