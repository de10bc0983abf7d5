mod logs;
mod metrics;
mod security;
mod traces;

use serde::Serialize;

use crate::core::error::CalcError;
use crate::core::signal::SignalType;

/// How a platform charges for volume. Exactly one basis applies per record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum RateBasis {
    /// Flat infrastructure cost, volume independent.
    Fixed,
    PerUnit { price: f64 },
    PerMillionUnits { price: f64 },
    /// Volume priced by GB. `bytes_per_unit` overrides the signal default.
    PerGb {
        price: f64,
        bytes_per_unit: Option<f64>,
    },
}

impl RateBasis {
    pub fn price(&self) -> f64 {
        match self {
            Self::Fixed => 0.0,
            Self::PerUnit { price }
            | Self::PerMillionUnits { price }
            | Self::PerGb { price, .. } => *price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingModel {
    /// Fixed monthly charge in USD
    pub base_price: f64,
    pub rate: RateBasis,
    /// Units (or GB for logs) excluded from billing each month
    pub free_tier: f64,
    /// Display label only
    pub unit: &'static str,
}

/// Monthly infrastructure breakdown for self-hosted platforms, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Infrastructure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}

impl Infrastructure {
    pub const EMPTY: Infrastructure = Infrastructure {
        compute: None,
        storage: None,
        memory: None,
        network: None,
        other: None,
        notes: None,
    };

    /// Labelled line items in display order, skipping absent ones.
    pub fn items(&self) -> Vec<(&'static str, f64)> {
        [
            ("Compute", self.compute),
            ("Storage", self.storage),
            ("Memory", self.memory),
            ("Network", self.network),
            ("Other", self.other),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    pub fn total(&self) -> f64 {
        self.items().iter().map(|(_, v)| v).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    /// Presentation only
    pub color: &'static str,
    pub signal: SignalType,
    pub pricing: PricingModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<Infrastructure>,
    /// Supported metric ingestion formats (metrics platforms only)
    pub metric_types: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl Platform {
    pub fn is_self_hosted(&self) -> bool {
        matches!(self.pricing.rate, RateBasis::Fixed)
    }
}

/// All platforms for a signal, in catalog order.
pub fn list_platforms(signal: SignalType) -> &'static [Platform] {
    match signal {
        SignalType::Metrics => metrics::PLATFORMS,
        SignalType::Tracing => traces::PLATFORMS,
        SignalType::Logs => logs::PLATFORMS,
        SignalType::Security => security::PLATFORMS,
    }
}

/// Look up a platform by id within one signal collection.
pub fn find_platform(signal: SignalType, id: &str) -> Result<&'static Platform, CalcError> {
    list_platforms(signal)
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| CalcError::UnknownPlatform(id.to_string()))
}

/// Look up a platform by id across every signal collection.
pub fn find_platform_by_id(id: &str) -> Result<&'static Platform, CalcError> {
    SignalType::all()
        .iter()
        .find_map(|signal| find_platform(*signal, id).ok())
        .ok_or_else(|| CalcError::UnknownPlatform(id.to_string()))
}

/// Every platform in the catalog, grouped by signal.
pub fn all_platforms() -> impl Iterator<Item = &'static Platform> {
    SignalType::all()
        .iter()
        .flat_map(|signal| list_platforms(*signal).iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_signal_has_platforms() {
        for signal in SignalType::all() {
            assert!(!list_platforms(*signal).is_empty(), "{} is empty", signal);
        }
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(list_platforms(SignalType::Metrics).len(), 12);
        assert_eq!(list_platforms(SignalType::Tracing).len(), 9);
        assert_eq!(list_platforms(SignalType::Logs).len(), 10);
        assert_eq!(list_platforms(SignalType::Security).len(), 10);
    }

    #[test]
    fn ids_are_globally_unique() {
        let mut seen = HashSet::new();
        for p in all_platforms() {
            assert!(seen.insert(p.id), "duplicate id {}", p.id);
        }
    }

    #[test]
    fn records_live_in_their_own_signal_collection() {
        for signal in SignalType::all() {
            for p in list_platforms(*signal) {
                assert_eq!(p.signal, *signal, "{} filed under wrong signal", p.id);
            }
        }
    }

    #[test]
    fn rates_are_non_negative() {
        for p in all_platforms() {
            assert!(p.pricing.base_price >= 0.0, "{}", p.id);
            assert!(p.pricing.free_tier >= 0.0, "{}", p.id);
            assert!(p.pricing.rate.price() >= 0.0, "{}", p.id);
        }
    }

    #[test]
    fn self_hosted_infrastructure_sums_to_base_price() {
        for p in all_platforms().filter(|p| p.is_self_hosted()) {
            let infra = p
                .infrastructure
                .unwrap_or_else(|| panic!("{} has no infrastructure breakdown", p.id));
            assert!(
                (infra.total() - p.pricing.base_price).abs() < 1e-9,
                "{}: {} != {}",
                p.id,
                infra.total(),
                p.pricing.base_price
            );
        }
    }

    #[test]
    fn only_metrics_platforms_list_metric_types() {
        for p in all_platforms() {
            if p.signal != SignalType::Metrics {
                assert!(p.metric_types.is_empty(), "{}", p.id);
            }
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        let p = find_platform(SignalType::Metrics, "New-Relic").unwrap();
        assert_eq!(p.name, "New Relic");
    }

    #[test]
    fn find_in_wrong_signal_fails() {
        let err = find_platform(SignalType::Logs, "new-relic").unwrap_err();
        assert_eq!(err, CalcError::UnknownPlatform("new-relic".to_string()));
    }

    #[test]
    fn find_by_id_searches_all_signals() {
        let p = find_platform_by_id("microsoft-sentinel").unwrap();
        assert_eq!(p.signal, SignalType::Security);
        assert!(find_platform_by_id("not-a-vendor").is_err());
    }

    #[test]
    fn new_relic_metrics_pricing() {
        let p = find_platform(SignalType::Metrics, "new-relic").unwrap();
        assert_eq!(p.pricing.base_price, 0.0);
        assert_eq!(p.pricing.free_tier, 100_000_000.0);
        assert_eq!(p.pricing.rate, RateBasis::PerMillionUnits { price: 0.25 });
    }

    #[test]
    fn infrastructure_items_skip_missing() {
        let infra = Infrastructure {
            compute: Some(10.0),
            network: Some(5.0),
            ..Infrastructure::EMPTY
        };
        assert_eq!(infra.items(), vec![("Compute", 10.0), ("Network", 5.0)]);
        assert_eq!(infra.total(), 15.0);
    }

    #[test]
    fn non_metric_platforms_carry_notes() {
        for signal in [SignalType::Tracing, SignalType::Logs, SignalType::Security] {
            for p in list_platforms(signal) {
                assert!(p.note.is_some(), "{} has no note", p.id);
            }
        }
        let datadog = find_platform(SignalType::Security, "datadog-security").unwrap();
        assert!(datadog.note.unwrap().contains("5 GB free tier"));
    }
}
