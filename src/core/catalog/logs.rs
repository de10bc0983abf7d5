use super::{Infrastructure, Platform, PricingModel, RateBasis};
use crate::core::signal::SignalType;

const PER_GB: &str = "per GB/month";
const FIXED: &str = "fixed infrastructure cost";

const fn per_gb(price: f64) -> RateBasis {
    RateBasis::PerGb {
        price,
        bytes_per_unit: None,
    }
}

/// Log platforms, priced as of 2025. Free tiers are in GB.
pub(super) static PLATFORMS: &[Platform] = &[
    Platform {
        id: "datadog-logs",
        name: "Datadog Logs",
        color: "purple",
        signal: SignalType::Logs,
        pricing: PricingModel {
            base_price: 0.0,
            rate: per_gb(0.10),
            free_tier: 5.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per GB ingested. 5 GB free tier. Indexing and retention costs additional.",
        ),
    },
    Platform {
        id: "new-relic-logs",
        name: "New Relic Logs",
        color: "green",
        signal: SignalType::Logs,
        pricing: PricingModel {
            base_price: 0.0,
            rate: per_gb(0.25),
            free_tier: 100.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per GB after 100 GB free tier. Includes log analytics and querying.",
        ),
    },
    Platform {
        id: "elastic-logs",
        name: "Elastic Serverless Logs",
        color: "blue",
        signal: SignalType::Logs,
        pricing: PricingModel {
            base_price: 0.0,
            // $0.09/GB ingest + $0.019/GB retention (Complete tier)
            rate: per_gb(0.109),
            free_tier: 0.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Elastic Serverless Complete: $0.09/GB ingested + $0.019/GB retained per month. Includes logs analysis, dashboards, integrations, alerts, and AI-powered insights. Source: https://www.elastic.co/pricing/serverless-observability",
        ),
    },
    Platform {
        id: "splunk-logs",
        name: "Splunk Observability Logs",
        color: "orange",
        signal: SignalType::Logs,
        pricing: PricingModel {
            base_price: 0.0,
            rate: per_gb(0.50),
            free_tier: 0.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per GB ingested. Includes indexing and search capabilities.",
        ),
    },
    Platform {
        id: "splunk-cloud-logs",
        name: "Splunk Cloud",
        color: "orange",
        signal: SignalType::Logs,
        pricing: PricingModel {
            base_price: 0.0,
            // conservative estimate; list prices vary by contract
            rate: per_gb(1.50),
            free_tier: 0.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Splunk Cloud offers ingest-based pricing. Pricing varies by volume and can range from $0.60-$1.20/GB/day. Estimated monthly pricing shown. Includes indexing, search, and analytics capabilities. Contact Splunk for exact pricing based on your volume.",
        ),
    },
    Platform {
        id: "splunk-core-logs",
        name: "Splunk Core (Self-hosted)",
        color: "orange",
        signal: SignalType::Logs,
        pricing: PricingModel {
            base_price: 1200.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(600.0),
            storage: Some(400.0),
            memory: Some(100.0),
            network: Some(50.0),
            other: Some(50.0),
            notes: Some("3-4 indexer cluster, requires Splunk Enterprise licensing"),
        }),
        metric_types: &[],
        note: Some(
            "Fixed infrastructure cost. Splunk Core (self-hosted) requires Splunk Enterprise licenses and infrastructure. High-performance storage and compute required for indexing and search operations. Costs scale with data volume and retention requirements.",
        ),
    },
    Platform {
        id: "grafana-logs",
        name: "Grafana Cloud Logs",
        color: "indigo",
        signal: SignalType::Logs,
        pricing: PricingModel {
            base_price: 0.0,
            rate: per_gb(0.50),
            free_tier: 50.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per GB after 50 GB free tier. Based on Loki backend.",
        ),
    },
    Platform {
        id: "observe-logs",
        name: "Observe Inc Logs",
        color: "sky",
        signal: SignalType::Logs,
        pricing: PricingModel {
            base_price: 0.0,
            rate: per_gb(0.35),
            free_tier: 0.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per GiB ingested. 60-day retention included. Snowflake backend.",
        ),
    },
    Platform {
        id: "loki-self-hosted",
        name: "Grafana Loki (Self-hosted)",
        color: "indigo",
        signal: SignalType::Logs,
        pricing: PricingModel {
            base_price: 300.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(150.0),
            storage: Some(100.0),
            memory: Some(30.0),
            network: Some(20.0),
            ..Infrastructure::EMPTY
        }),
        metric_types: &[],
        note: Some(
            "Fixed infrastructure cost. Highly efficient log aggregation system.",
        ),
    },
    Platform {
        id: "elasticsearch-logs",
        name: "Elasticsearch (Self-hosted)",
        color: "slate",
        signal: SignalType::Logs,
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
            notes: None,
        }),
        metric_types: &[],
        note: Some(
            "Fixed infrastructure cost. Full-text search and log analytics.",
        ),
    },
];
