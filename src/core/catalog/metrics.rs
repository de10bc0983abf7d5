use super::{Infrastructure, Platform, PricingModel, RateBasis};
use crate::core::signal::SignalType;

const ALL_FORMATS: &[&str] = &["Prometheus", "OpenTelemetry", "StatsD", "Custom"];
const PROMETHEUS_ONLY: &[&str] = &["Prometheus"];

const PER_MILLION: &str = "per million metrics/month";
const FIXED: &str = "fixed infrastructure cost";

/// Metrics platforms, priced as of 2025.
pub(super) static PLATFORMS: &[Platform] = &[
    Platform {
        id: "elastic-serverless",
        name: "Elastic Serverless",
        color: "blue",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 0.0,
            // $0.09/GB ingest + $0.019/GB retention at ~150 bytes per data point
            rate: RateBasis::PerMillionUnits { price: 0.016 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: ALL_FORMATS,
        note: Some("Volume-based serverless pricing converted to a per-metric rate."),
    },
    Platform {
        id: "elastic-self-hosted",
        name: "Elastic (Self-hosted)",
        color: "slate",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 1000.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(450.0),
            storage: Some(300.0),
            memory: Some(150.0),
            network: Some(50.0),
            other: Some(50.0),
            notes: Some("3+ node Elasticsearch cluster for HA"),
        }),
        metric_types: ALL_FORMATS,
        note: None,
    },
    Platform {
        id: "datadog",
        name: "Datadog",
        color: "purple",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 0.75 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: ALL_FORMATS,
        note: None,
    },
    Platform {
        id: "new-relic",
        name: "New Relic",
        color: "green",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 0.25 },
            free_tier: 100_000_000.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: ALL_FORMATS,
        note: Some("First 100M metrics per month are free."),
    },
    Platform {
        id: "splunk-o11y",
        name: "Splunk Observability",
        color: "orange",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 0.55 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: ALL_FORMATS,
        note: None,
    },
    Platform {
        id: "dynatrace",
        name: "Dynatrace",
        color: "cyan",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 0.60 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: &["Prometheus", "OpenTelemetry", "Custom"],
        note: None,
    },
    Platform {
        id: "prometheus",
        name: "Prometheus (Self-hosted)",
        color: "red",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 600.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(300.0),
            storage: Some(200.0),
            memory: Some(50.0),
            network: Some(30.0),
            other: Some(20.0),
            notes: Some("2-3 nodes for HA, local SSD storage"),
        }),
        metric_types: PROMETHEUS_ONLY,
        note: None,
    },
    Platform {
        id: "grafana-cloud",
        name: "Grafana Cloud",
        color: "indigo",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 0.30 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: ALL_FORMATS,
        note: None,
    },
    Platform {
        id: "chronosphere",
        name: "Chronosphere",
        color: "teal",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 0.0,
            // estimate, premium positioning
            rate: RateBasis::PerMillionUnits { price: 0.45 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: &["Prometheus", "OpenTelemetry", "StatsD", "DogStatsD", "Wavefront"],
        note: None,
    },
    Platform {
        id: "thanos",
        name: "Thanos (Self-hosted)",
        color: "pink",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 900.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(400.0),
            storage: Some(350.0),
            memory: Some(80.0),
            network: Some(40.0),
            other: Some(30.0),
            notes: Some("Prometheus + Thanos components + object storage"),
        }),
        metric_types: PROMETHEUS_ONLY,
        note: None,
    },
    Platform {
        id: "victoria-metrics",
        name: "VictoriaMetrics (Self-hosted)",
        color: "emerald",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 500.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(250.0),
            storage: Some(150.0),
            memory: Some(60.0),
            network: Some(25.0),
            other: Some(15.0),
            notes: Some("2 nodes for HA, compressed storage"),
        }),
        metric_types: &["Prometheus", "OpenTelemetry", "StatsD", "InfluxDB", "Graphite"],
        note: None,
    },
    Platform {
        id: "cortex",
        name: "Cortex (Self-hosted)",
        color: "amber",
        signal: SignalType::Metrics,
        pricing: PricingModel {
            base_price: 800.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(450.0),
            storage: Some(250.0),
            memory: Some(60.0),
            network: Some(30.0),
            other: Some(10.0),
            notes: Some("Ingester, querier and distributor services over object storage"),
        }),
        metric_types: PROMETHEUS_ONLY,
        note: None,
    },
];
