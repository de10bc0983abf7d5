use crate::core::catalog::{list_platforms, Platform};
use crate::core::conversion::SourceType;
use crate::core::cost::pricing::compute_cost;
use crate::core::error::CalcError;
use crate::core::models::report::{CostReport, PlatformCost};
use crate::core::volume::{cardinality_multiplier, compute_volume, SignalConfig, Volume};

/// Price every platform of the volume's signal that `include` accepts.
///
/// Results are sorted by monthly cost, cheapest first. The sort is stable, so
/// platforms with equal cost keep their catalog order.
pub fn compare<F>(
    volume: &Volume,
    source: Option<SourceType>,
    include: F,
) -> Result<Vec<PlatformCost>, CalcError>
where
    F: Fn(&Platform) -> bool,
{
    let mut costs = list_platforms(volume.signal)
        .iter()
        .filter(|p| include(*p))
        .map(|p| compute_cost(p, volume.monthly_units, source).map(|c| PlatformCost::new(p, c)))
        .collect::<Result<Vec<_>, _>>()?;

    costs.sort_by(|a, b| a.monthly_cost.total_cmp(&b.monthly_cost));
    Ok(costs)
}

/// Volume plus platform comparison for one signal.
pub fn estimate<F>(config: &SignalConfig, include: F) -> Result<CostReport, CalcError>
where
    F: Fn(&Platform) -> bool,
{
    let volume = compute_volume(config)?;
    let source = config.source_type();
    let costs = compare(&volume, source, include)?;

    tracing::debug!(
        signal = volume.signal.id(),
        platforms = costs.len(),
        cheapest = costs.first().map(|c| c.id),
        "estimated costs"
    );

    Ok(CostReport {
        signal: volume.signal,
        volume,
        source_type: source,
        cardinality_multiplier: match config {
            SignalConfig::Metrics(metrics) => Some(cardinality_multiplier(metrics)),
            _ => None,
        },
        costs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::signal::SignalType;
    use crate::core::volume::{LogsConfig, MetricConfig, SecurityConfig, TracingConfig};

    fn metrics(base_volume: f64, tags: usize, tag_values: u32) -> SignalConfig {
        SignalConfig::Metrics(MetricConfig {
            base_volume,
            tags: (0..tags).map(|i| format!("tag{}", i)).collect(),
            tag_values,
            source_type: SourceType::Mixed,
        })
    }

    fn assert_sorted(costs: &[PlatformCost]) {
        for pair in costs.windows(2) {
            assert!(pair[0].monthly_cost <= pair[1].monthly_cost);
        }
    }

    #[test]
    fn report_covers_every_platform_sorted() {
        let report = estimate(&metrics(100.0, 2, 10), |_| true).unwrap();
        assert_eq!(report.costs.len(), list_platforms(SignalType::Metrics).len());
        assert_sorted(&report.costs);
        assert_eq!(report.cardinality_multiplier, Some(100.0));
        assert_eq!(report.volume.per_second, Some(10_000.0));
    }

    #[test]
    fn ties_keep_catalog_order() {
        // Zero volume: every usage-priced platform costs $0
        let report = estimate(&metrics(0.0, 0, 1), |_| true).unwrap();
        let zero_ids: Vec<&str> = report
            .costs
            .iter()
            .filter(|c| c.monthly_cost == 0.0)
            .map(|c| c.id)
            .collect();
        let catalog_ids: Vec<&str> = list_platforms(SignalType::Metrics)
            .iter()
            .filter(|p| !p.is_self_hosted())
            .map(|p| p.id)
            .collect();
        assert_eq!(zero_ids, catalog_ids);
    }

    #[test]
    fn annual_is_twelve_months() {
        let report = estimate(&metrics(1000.0, 1, 10), |_| true).unwrap();
        for cost in &report.costs {
            assert!((cost.annual_cost - cost.monthly_cost * 12.0).abs() < 1e-6);
        }
    }

    #[test]
    fn filter_excludes_platforms() {
        let report = estimate(
            &SignalConfig::Logs(LogsConfig { gb_per_day: 10.0 }),
            |p| !p.is_self_hosted(),
        )
        .unwrap();
        assert!(report.costs.iter().all(|c| !c.self_hosted));
        assert_eq!(report.costs.len(), 7);
    }

    #[test]
    fn logs_cheapest_under_free_tier() {
        // 3 GB/day = 90 GB/month, inside New Relic's 100 GB free tier
        let report = estimate(&SignalConfig::Logs(LogsConfig { gb_per_day: 3.0 }), |_| true)
            .unwrap();
        let cheapest = report.cheapest().unwrap();
        assert_eq!(cheapest.id, "new-relic-logs");
        assert_eq!(cheapest.monthly_cost, 0.0);
    }

    #[test]
    fn high_cardinality_makes_self_hosted_cheapest() {
        let report = estimate(&metrics(1000.0, 3, 10), |_| true).unwrap();
        assert!(report.cheapest().unwrap().self_hosted);
        assert_eq!(report.most_expensive().unwrap().id, "datadog");
    }

    #[test]
    fn tracing_report_has_no_multiplier() {
        let report = estimate(
            &SignalConfig::Tracing(TracingConfig {
                spans_per_second: 500.0,
            }),
            |_| true,
        )
        .unwrap();
        assert_eq!(report.cardinality_multiplier, None);
        assert_eq!(report.source_type, None);
        assert_sorted(&report.costs);
    }

    #[test]
    fn security_report() {
        let report = estimate(
            &SignalConfig::Security(SecurityConfig {
                events_per_second: 1000.0,
            }),
            |_| true,
        )
        .unwrap();
        assert_eq!(report.signal, SignalType::Security);
        assert_eq!(report.costs.len(), 10);
        assert_sorted(&report.costs);
    }

    #[test]
    fn invalid_input_propagates() {
        let err = estimate(&metrics(-3.0, 0, 10), |_| true).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));
    }

    #[test]
    fn self_hosted_costs_carry_infrastructure_total() {
        let report = estimate(&metrics(100.0, 1, 10), |_| true).unwrap();
        let thanos = report.costs.iter().find(|c| c.id == "thanos").unwrap();
        assert_eq!(thanos.infrastructure_total, Some(900.0));
        assert_eq!(thanos.monthly_cost, 900.0);
        let datadog = report.costs.iter().find(|c| c.id == "datadog").unwrap();
        assert_eq!(datadog.infrastructure_total, None);
    }
}
