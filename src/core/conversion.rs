use serde::{Deserialize, Serialize};

use crate::core::signal::SignalType;

/// Bytes in one GB as billed by every GB-rate platform (binary gigabyte).
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Average OpenTelemetry span size.
pub const BYTES_PER_SPAN: f64 = 500.0;

/// Average SIEM event size (logs, alerts, detections).
pub const BYTES_PER_SECURITY_EVENT: f64 = 1000.0;

/// Where metric data points come from. Each source encodes a data point with a
/// different average wire size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    OpenTelemetry,
    Prometheus,
    StatsD,
    VendorAgent,
    #[default]
    Mixed,
}

/// Average bytes per metric data point by source.
static BYTES_PER_DATAPOINT: &[(SourceType, f64)] = &[
    (SourceType::OpenTelemetry, 320.0),
    (SourceType::Prometheus, 150.0),
    (SourceType::StatsD, 100.0),
    (SourceType::VendorAgent, 250.0),
    // Weighted blend of the above
    (SourceType::Mixed, 250.0),
];

impl SourceType {
    /// Parse a source id, ignoring case and separators.
    pub fn parse(id: &str) -> Option<Self> {
        match id.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "opentelemetry" | "otel" | "otlp" => Some(Self::OpenTelemetry),
            "prometheus" | "prom" => Some(Self::Prometheus),
            "statsd" | "dogstatsd" => Some(Self::StatsD),
            "vendoragent" | "agent" | "datadogagent" => Some(Self::VendorAgent),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    /// Parse a source id. Unknown ids fall back to `Mixed`.
    pub fn from_id(id: &str) -> Self {
        Self::parse(id).unwrap_or_else(|| {
            tracing::debug!(source_type = id, "unknown source type, using mixed");
            Self::Mixed
        })
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::OpenTelemetry => "opentelemetry",
            Self::Prometheus => "prometheus",
            Self::StatsD => "statsd",
            Self::VendorAgent => "vendor_agent",
            Self::Mixed => "mixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenTelemetry => "OpenTelemetry",
            Self::Prometheus => "Prometheus",
            Self::StatsD => "StatsD",
            Self::VendorAgent => "Vendor agent",
            Self::Mixed => "Mixed",
        }
    }

    pub fn bytes_per_datapoint(&self) -> f64 {
        BYTES_PER_DATAPOINT
            .iter()
            .find(|(source, _)| source == self)
            .or_else(|| BYTES_PER_DATAPOINT.iter().find(|(s, _)| *s == SourceType::Mixed))
            .map(|(_, bytes)| *bytes)
            .unwrap_or(250.0)
    }

    pub fn all() -> &'static [SourceType] {
        &[
            Self::OpenTelemetry,
            Self::Prometheus,
            Self::StatsD,
            Self::VendorAgent,
            Self::Mixed,
        ]
    }
}

/// Default bytes per billed unit for a signal when the pricing record carries
/// no override. Log volume is already measured in GB, so one unit is one GB.
pub fn default_bytes_per_unit(signal: SignalType, source: Option<SourceType>) -> f64 {
    match signal {
        SignalType::Metrics => source.unwrap_or_default().bytes_per_datapoint(),
        SignalType::Tracing => BYTES_PER_SPAN,
        SignalType::Logs => BYTES_PER_GB,
        SignalType::Security => BYTES_PER_SECURITY_EVENT,
    }
}

/// Convert a unit count to GB.
pub fn units_to_gb(units: f64, bytes_per_unit: f64) -> f64 {
    units * bytes_per_unit / BYTES_PER_GB
}
