use crate::core::catalog::{Platform, PricingModel, RateBasis};
use crate::core::conversion::{default_bytes_per_unit, units_to_gb, SourceType};
use crate::core::error::{ensure_non_negative, CalcError};
use crate::core::signal::SignalType;

/// Usage left after the free tier, never negative.
pub fn billable_units(model: &PricingModel, monthly_units: f64) -> f64 {
    (monthly_units - model.free_tier).max(0.0)
}

/// Monthly cost in USD of `monthly_units` under a pricing model.
///
/// The free tier is subtracted before the rate applies. For GB rates the
/// bytes per unit come from the explicit source override first, then the
/// record's own figure, then the signal default. The result is floored at 0.
pub fn evaluate(
    model: &PricingModel,
    signal: SignalType,
    monthly_units: f64,
    source: Option<SourceType>,
) -> Result<f64, CalcError> {
    ensure_non_negative("monthly_units", monthly_units)?;

    let billable = billable_units(model, monthly_units);
    let usage_cost = match model.rate {
        RateBasis::Fixed => 0.0,
        RateBasis::PerGb {
            price,
            bytes_per_unit,
        } => {
            let bytes_per_unit = match (signal, source) {
                (SignalType::Metrics, Some(source)) => source.bytes_per_datapoint(),
                _ => bytes_per_unit.unwrap_or_else(|| default_bytes_per_unit(signal, source)),
            };
            units_to_gb(billable, bytes_per_unit) * price
        }
        RateBasis::PerMillionUnits { price } => billable / 1_000_000.0 * price,
        RateBasis::PerUnit { price } => billable * price,
    };

    let cost = (model.base_price + usage_cost).max(0.0);
    ensure_non_negative("monthly_cost", cost)
}

/// Monthly cost in USD for one catalog platform.
pub fn compute_cost(
    platform: &Platform,
    monthly_units: f64,
    source: Option<SourceType>,
) -> Result<f64, CalcError> {
    evaluate(&platform.pricing, platform.signal, monthly_units, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::find_platform;

    fn model(base_price: f64, rate: RateBasis, free_tier: f64) -> PricingModel {
        PricingModel {
            base_price,
            rate,
            free_tier,
            unit: "test",
        }
    }

    #[test]
    fn gb_rate_matches_formula() {
        let m = model(
            0.0,
            RateBasis::PerGb {
                price: 2.36,
                bytes_per_unit: Some(320.0),
            },
            0.0,
        );
        let cost = evaluate(&m, SignalType::Tracing, 1_000_000_000.0, None).unwrap();
        let expected = 1_000_000_000.0 * 320.0 / 1_073_741_824.0 * 2.36;
        assert!((cost - expected).abs() < 1e-9);
        // ~298.02 GB
        assert!((cost - 703.33).abs() < 0.01);
    }

    #[test]
    fn source_override_beats_record_bytes() {
        let m = model(
            0.0,
            RateBasis::PerGb {
                price: 1.0,
                bytes_per_unit: Some(1_073_741_824.0),
            },
            0.0,
        );
        // Without override the record's bytes make one unit one GB
        let plain = evaluate(&m, SignalType::Metrics, 2.0, None).unwrap();
        assert_eq!(plain, 2.0);

        let otel = evaluate(
            &m,
            SignalType::Metrics,
            1_073_741_824.0,
            Some(SourceType::OpenTelemetry),
        )
        .unwrap();
        assert!((otel - 320.0).abs() < 1e-9);
    }

    #[test]
    fn record_bytes_beat_signal_default() {
        let m = model(
            0.0,
            RateBasis::PerGb {
                price: 1.0,
                bytes_per_unit: Some(2000.0),
            },
            0.0,
        );
        let cost = evaluate(&m, SignalType::Security, 1_073_741_824.0, None).unwrap();
        assert!((cost - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn signal_default_when_record_has_none() {
        let m = model(
            0.0,
            RateBasis::PerGb {
                price: 1.0,
                bytes_per_unit: None,
            },
            0.0,
        );
        let spans = evaluate(&m, SignalType::Tracing, 1_073_741_824.0, None).unwrap();
        assert!((spans - 500.0).abs() < 1e-9);
        let mixed = evaluate(&m, SignalType::Metrics, 1_073_741_824.0, None).unwrap();
        assert!((mixed - SourceType::Mixed.bytes_per_datapoint()).abs() < 1e-9);
    }

    #[test]
    fn per_unit_rate() {
        let m = model(10.0, RateBasis::PerUnit { price: 0.001 }, 1000.0);
        let cost = evaluate(&m, SignalType::Tracing, 3000.0, None).unwrap();
        assert!((cost - 12.0).abs() < 1e-9);
    }

    #[test]
    fn fixed_rate_is_base_price() {
        let m = model(600.0, RateBasis::Fixed, 0.0);
        assert_eq!(evaluate(&m, SignalType::Metrics, 1e15, None).unwrap(), 600.0);
    }

    #[test]
    fn within_free_tier_costs_base_price() {
        let m = model(25.0, RateBasis::PerMillionUnits { price: 5.0 }, 1_000_000.0);
        assert_eq!(evaluate(&m, SignalType::Metrics, 999_999.0, None).unwrap(), 25.0);
        assert_eq!(evaluate(&m, SignalType::Metrics, 1_000_000.0, None).unwrap(), 25.0);
        assert_eq!(billable_units(&m, 10.0), 0.0);
    }

    #[test]
    fn new_relic_inside_free_tier() {
        let p = find_platform(SignalType::Metrics, "new-relic").unwrap();
        assert_eq!(compute_cost(p, 50_000_000.0, None).unwrap(), 0.0);
    }

    #[test]
    fn new_relic_above_free_tier() {
        let p = find_platform(SignalType::Metrics, "new-relic").unwrap();
        let cost = compute_cost(p, 600_000_000.0, None).unwrap();
        assert!((cost - 125.0).abs() < 1e-9);
    }

    #[test]
    fn logs_bill_gb_directly() {
        let p = find_platform(SignalType::Logs, "datadog-logs").unwrap();
        // 305 GB - 5 GB free = 300 GB * $0.10
        let cost = compute_cost(p, 305.0, None).unwrap();
        assert!((cost - 30.0).abs() < 1e-9);
    }

    #[test]
    fn elastic_tracing_uses_span_size() {
        let p = find_platform(SignalType::Tracing, "elastic-tracing").unwrap();
        let cost = compute_cost(p, 2_592_000_000.0, None).unwrap();
        let expected = 2_592_000_000.0 * 500.0 / 1_073_741_824.0 * 0.109;
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn source_type_ignored_outside_metrics() {
        let p = find_platform(SignalType::Security, "splunk-security").unwrap();
        let with = compute_cost(p, 1e9, Some(SourceType::StatsD)).unwrap();
        let without = compute_cost(p, 1e9, None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn negative_volume_rejected() {
        let p = find_platform(SignalType::Metrics, "datadog").unwrap();
        assert!(matches!(
            compute_cost(p, -5.0, None),
            Err(CalcError::InvalidInput { field: "monthly_units", .. })
        ));
    }

    #[test]
    fn infinite_volume_rejected() {
        let p = find_platform(SignalType::Metrics, "datadog").unwrap();
        assert!(compute_cost(p, f64::INFINITY, None).is_err());
    }

    #[test]
    fn cost_never_negative_across_catalog() {
        for signal in SignalType::all() {
            for p in crate::core::catalog::list_platforms(*signal) {
                for units in [0.0, 1.0, 5.0, 1e6, 1e9, 1e12] {
                    assert!(compute_cost(p, units, None).unwrap() >= 0.0, "{}", p.id);
                }
            }
        }
    }
}
