use super::{Infrastructure, Platform, PricingModel, RateBasis};
use crate::core::conversion::BYTES_PER_SECURITY_EVENT;
use crate::core::signal::SignalType;

const PER_GB: &str = "per GB/month";
const FIXED: &str = "fixed infrastructure cost";

const fn per_gb(price: f64) -> RateBasis {
    RateBasis::PerGb {
        price,
        bytes_per_unit: Some(BYTES_PER_SECURITY_EVENT),
    }
}

/// Security/SIEM platforms, priced as of 2025.
///
/// Free tiers are subtracted from the monthly event count before the GB
/// conversion, the same as every other count-based model.
pub(super) static PLATFORMS: &[Platform] = &[
    Platform {
        id: "elastic-security",
        name: "Elastic Security",
        color: "blue",
        signal: SignalType::Security,
        pricing: PricingModel {
            base_price: 0.0,
            // $0.11/GB ingest + $0.019/GB retention (Security Analytics Complete)
            rate: per_gb(0.129),
            free_tier: 0.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Elastic Security Serverless, Security Analytics Complete: $0.11/GB ingested + $0.019/GB retained per month (top volume tier pricing). Includes SIEM, threat detection, security analytics, AI-powered insights, entity analytics/UEBA, threat intelligence management, bidirectional response framework, extended security content, and Elastic AI Assistant. No additional add-ons or per-feature charges required for core security analytics. Unified observability platform (metrics, logs, traces, security) in one solution. Optional add-ons: Endpoint Protection ($0.49/endpoint/month) and Cloud Protection ($0.65/asset/month). Source: https://www.elastic.co/pricing/serverless-security. Comparison is based on raw ingest volume; features other vendors sell as add-ons are included here.",
        ),
    },
    Platform {
        id: "elastic-security-self-hosted",
        name: "Elastic Security (Self-hosted)",
        color: "slate",
        signal: SignalType::Security,
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
            notes: Some("3+ node Elasticsearch cluster with Kibana security features"),
        }),
        metric_types: &[],
        note: Some(
            "Fixed infrastructure cost. Elastic Security (self-hosted) uses the open source Elastic Stack (Elasticsearch, Kibana) with Security features. Includes SIEM, threat detection, security analytics, and log analysis capabilities. Open source version available at no licensing cost. Requires infrastructure for Elasticsearch cluster, Kibana, and security event processing. Costs scale with data volume and retention requirements.",
        ),
    },
    Platform {
        id: "splunk-security",
        name: "Splunk Enterprise Security",
        color: "orange",
        signal: SignalType::Security,
        pricing: PricingModel {
            base_price: 0.0,
            rate: per_gb(0.50),
            free_tier: 0.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per GB ingested. Includes SIEM, threat detection, and security analytics. Enterprise Security add-on required.",
        ),
    },
    Platform {
        id: "splunk-cloud-security",
        name: "Splunk Cloud Security",
        color: "orange",
        signal: SignalType::Security,
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
            "Splunk Cloud offers ingest-based pricing for security events. Pricing varies by volume and can range from $0.60-$1.20/GB/day. Estimated monthly pricing shown. Includes SIEM, threat detection, and security analytics. Contact Splunk for exact pricing based on your volume.",
        ),
    },
    Platform {
        id: "splunk-core-security",
        name: "Splunk Core (Self-hosted)",
        color: "orange",
        signal: SignalType::Security,
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
            "Fixed infrastructure cost. Splunk Core (self-hosted) requires Splunk Enterprise licenses and infrastructure. High-performance storage and compute required for security event indexing and search operations. Costs scale with data volume and retention requirements.",
        ),
    },
    Platform {
        id: "datadog-security",
        name: "Datadog Security",
        color: "purple",
        signal: SignalType::Security,
        pricing: PricingModel {
            base_price: 0.0,
            rate: per_gb(0.10),
            free_tier: 5.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Charges per GB ingested. 5 GB free tier. Includes security monitoring, threat detection, and compliance reporting. The free tier is applied to the monthly event count before conversion to GB.",
        ),
    },
    Platform {
        id: "microsoft-sentinel",
        name: "Microsoft Sentinel",
        color: "blue",
        signal: SignalType::Security,
        pricing: PricingModel {
            base_price: 0.0,
            rate: per_gb(0.10),
            free_tier: 5.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Microsoft Sentinel charges $0.10/GB ingested. First 5 GB free per month. Base pricing includes SIEM, threat detection, and security analytics. Azure integration required. Additional features, connectors, and advanced analytics may require separate Azure services or add-ons. Compare total cost including all required Azure services for complete security operations.",
        ),
    },
    Platform {
        id: "google-secops",
        name: "Google Security Operations",
        color: "red",
        signal: SignalType::Security,
        pricing: PricingModel {
            base_price: 0.0,
            // baseline estimate, Chronicle pricing is contract based
            rate: per_gb(0.10),
            free_tier: 0.0,
            unit: PER_GB,
        },
        infrastructure: None,
        metric_types: &[],
        note: Some(
            "Google Security Operations (Chronicle) pricing varies by volume and contract terms. Estimated baseline pricing shown. Base pricing includes SIEM, threat detection, and security analytics. Google Cloud integration required. Additional features, advanced analytics, and enterprise capabilities may require separate services or add-ons. Contact Google for exact pricing based on your volume and requirements.",
        ),
    },
    Platform {
        id: "wazuh-self-hosted",
        name: "Wazuh (Self-hosted)",
        color: "green",
        signal: SignalType::Security,
        pricing: PricingModel {
            base_price: 500.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(250.0),
            storage: Some(150.0),
            memory: Some(50.0),
            network: Some(25.0),
            other: Some(25.0),
            notes: Some("Manager, indexer and dashboard nodes"),
        }),
        metric_types: &[],
        note: Some(
            "Fixed infrastructure cost. Open-source SIEM solution. Requires infrastructure for manager, indexer, and dashboard components. No licensing costs.",
        ),
    },
    Platform {
        id: "security-onion",
        name: "Security Onion (Self-hosted)",
        color: "green",
        signal: SignalType::Security,
        pricing: PricingModel {
            base_price: 800.0,
            rate: RateBasis::Fixed,
            free_tier: 0.0,
            unit: FIXED,
        },
        infrastructure: Some(Infrastructure {
            compute: Some(400.0),
            storage: Some(300.0),
            memory: Some(50.0),
            network: Some(25.0),
            other: Some(25.0),
            notes: Some("Manager, worker and storage nodes"),
        }),
        metric_types: &[],
        note: Some(
            "Fixed infrastructure cost. Open-source security monitoring and log management platform. Includes SIEM, network security monitoring (NSM), and host-based intrusion detection (HIDS). Requires infrastructure for manager, worker, and storage components.",
        ),
    },
];
