use serde::Serialize;

use crate::core::catalog::Platform;
use crate::core::conversion::SourceType;
use crate::core::signal::SignalType;
use crate::core::volume::Volume;

/// One platform's priced line in a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformCost {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    /// USD per month
    pub monthly_cost: f64,
    /// USD per year (12 months)
    pub annual_cost: f64,
    /// Sum of the self-hosted infrastructure breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure_total: Option<f64>,
    pub self_hosted: bool,
    pub unit: &'static str,
}

impl PlatformCost {
    pub fn new(platform: &'static Platform, monthly_cost: f64) -> Self {
        Self {
            id: platform.id,
            name: platform.name,
            color: platform.color,
            monthly_cost,
            annual_cost: monthly_cost * 12.0,
            infrastructure_total: platform.infrastructure.map(|i| i.total()),
            self_hosted: platform.is_self_hosted(),
            unit: platform.pricing.unit,
        }
    }
}

/// Volume and per-platform costs for one signal, cheapest first.
#[derive(Debug, Clone, Serialize)]
pub struct CostReport {
    pub signal: SignalType,
    pub volume: Volume,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// Metrics only: `tag_values ^ tags`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality_multiplier: Option<f64>,
    pub costs: Vec<PlatformCost>,
}

impl CostReport {
    pub fn cheapest(&self) -> Option<&PlatformCost> {
        self.costs.first()
    }

    pub fn most_expensive(&self) -> Option<&PlatformCost> {
        self.costs.last()
    }
}
