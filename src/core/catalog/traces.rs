use super::{Infrastructure, Platform, PricingModel, RateBasis};
use crate::core::signal::SignalType;

const PER_MILLION: &str = "per million spans/month";
const FIXED: &str = "fixed infrastructure cost";

/// Tracing/APM platforms, priced as of 2025.
pub(super) static PLATFORMS: &[Platform] = &[
    Platform {
        id: "datadog-tracing",
        name: "Datadog APM",
        color: "purple",
        signal: SignalType::Tracing,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 1.70 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per span ingested. Includes distributed tracing, APM, and error tracking. Free tier: 100K spans/month.",
        ),
    },
    Platform {
        id: "new-relic-tracing",
        name: "New Relic APM",
        color: "green",
        signal: SignalType::Tracing,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 0.25 },
            free_tier: 100_000_000.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per span after 100M free tier. Includes full APM, distributed tracing, and error analytics.",
        ),
    },
    Platform {
        id: "dynatrace-tracing",
        name: "Dynatrace APM",
        color: "cyan",
        signal: SignalType::Tracing,
        pricing: PricingModel {
            base_price: 0.0,
            // estimate
            rate: RateBasis::PerMillionUnits { price: 0.50 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "AI-powered APM with automated root cause analysis. Pricing based on host units and spans.",
        ),
    },
    Platform {
        id: "elastic-tracing",
        name: "Elastic Serverless APM",
        color: "blue",
        signal: SignalType::Tracing,
        pricing: PricingModel {
            base_price: 0.0,
            // $0.09/GB ingest + $0.019/GB retention (Complete tier)
            rate: RateBasis::PerGb {
                price: 0.109,
                bytes_per_unit: Some(500.0),
            },
            free_tier: 0.0,
            unit: "per GB/month",
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Elastic Serverless Complete: Volume-based pricing (GB). $0.09/GB ingested + $0.019/GB retained per month. High cardinality doesn't directly increase costs, only data volume matters. Source: https://www.elastic.co/pricing/serverless-observability",
        ),
    },
    Platform {
        id: "splunk-tracing",
        name: "Splunk Observability APM",
        color: "orange",
        signal: SignalType::Tracing,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 0.55 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per span. Includes distributed tracing, continuous profiling, and error tracking.",
        ),
    },
    Platform {
        id: "grafana-tracing",
        name: "Grafana Cloud Traces",
        color: "indigo",
        signal: SignalType::Tracing,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 0.30 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per span. Integrates with Grafana dashboards and alerting.",
        ),
    },
    Platform {
        id: "honeycomb-tracing",
        name: "Honeycomb",
        color: "amber",
        signal: SignalType::Tracing,
        pricing: PricingModel {
            base_price: 0.0,
            rate: RateBasis::PerMillionUnits { price: 0.40 },
            free_tier: 0.0,
            unit: PER_MILLION,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Event-based pricing. High-cardinality data is a feature, not a cost concern.",
        ),
    },
    Platform {
        id: "jaeger-self-hosted",
        name: "Jaeger (Self-hosted)",
        color: "red",
        signal: SignalType::Tracing,
        pricing: PricingModel {
            base_price: 400.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(250.0),
            storage: Some(100.0),
            memory: Some(30.0),
            network: Some(20.0),
            ..Infrastructure::EMPTY
        }),
        metric_types: &[],
        note: Some(
            "Fixed infrastructure cost. Open-source distributed tracing system.",
        ),
    },
    Platform {
        id: "tempo-self-hosted",
        name: "Grafana Tempo (Self-hosted)",
        color: "indigo",
        signal: SignalType::Tracing,
        pricing: PricingModel {
            base_price: 350.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(200.0),
            storage: Some(100.0),
            memory: Some(30.0),
            network: Some(20.0),
            ..Infrastructure::EMPTY
        }),
        metric_types: &[],
        note: Some(
            "Fixed infrastructure cost. Highly scalable, cost-effective tracing backend.",
        ),
    },
];
