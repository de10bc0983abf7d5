use serde::{Deserialize, Serialize};

use crate::core::conversion::{SourceType, BYTES_PER_GB, BYTES_PER_SECURITY_EVENT};
use crate::core::error::{ensure_non_negative, CalcError};
use crate::core::signal::SignalType;

/// Fixed 30-day month.
pub const SECONDS_PER_MONTH: f64 = 30.0 * 24.0 * 60.0 * 60.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Data points per second before any tags are applied
    pub base_volume: f64,
    /// Tag names; only the count affects volume
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unique values per tag
    pub tag_values: u32,
    #[serde(default)]
    pub source_type: SourceType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracingConfig {
    pub spans_per_second: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogsConfig {
    pub gb_per_day: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub events_per_second: f64,
}

/// Input for one signal's calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalConfig {
    Metrics(MetricConfig),
    Tracing(TracingConfig),
    Logs(LogsConfig),
    Security(SecurityConfig),
}

impl SignalConfig {
    pub fn signal(&self) -> SignalType {
        match self {
            Self::Metrics(_) => SignalType::Metrics,
            Self::Tracing(_) => SignalType::Tracing,
            Self::Logs(_) => SignalType::Logs,
            Self::Security(_) => SignalType::Security,
        }
    }

    /// Source selector for byte conversion; only metrics carry one.
    pub fn source_type(&self) -> Option<SourceType> {
        match self {
            Self::Metrics(config) => Some(config.source_type),
            _ => None,
        }
    }
}

/// Computed volume for one signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Volume {
    pub signal: SignalType,
    /// Units per second (absent for logs, which are entered per day)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_second: Option<f64>,
    /// Quantity the pricing models bill on: data points, spans, GB or events
    pub monthly_units: f64,
    /// Daily GB (logs as entered, security derived from event size)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gb_per_day: Option<f64>,
}

/// `tag_values ^ tags`, exactly 1 with no tags.
pub fn cardinality_multiplier(config: &MetricConfig) -> f64 {
    config
        .tags
        .iter()
        .fold(1.0, |acc, _| acc * f64::from(config.tag_values))
}

/// Data points per second after the cardinality explosion: each tag multiplies
/// the base volume by the number of values it can take.
pub fn calculate_metric_volume(config: &MetricConfig) -> Result<f64, CalcError> {
    ensure_non_negative("base_volume", config.base_volume)?;
    if config.tag_values == 0 {
        return Err(CalcError::ZeroTagValues);
    }
    let total = config
        .tags
        .iter()
        .fold(config.base_volume, |acc, _| acc * f64::from(config.tag_values));
    ensure_non_negative("metrics_per_second", total)
}

pub fn per_second_to_monthly(rate: f64) -> f64 {
    rate * SECONDS_PER_MONTH
}

pub fn gb_per_day_to_monthly(gb_per_day: f64) -> f64 {
    gb_per_day * DAYS_PER_MONTH
}

/// Daily ingest in GB for a security event rate.
pub fn security_gb_per_day(events_per_second: f64, bytes_per_event: f64) -> f64 {
    events_per_second * bytes_per_event * SECONDS_PER_DAY / BYTES_PER_GB
}

/// Per-second and monthly volume for a signal.
pub fn compute_volume(config: &SignalConfig) -> Result<Volume, CalcError> {
    let volume = match config {
        SignalConfig::Metrics(metrics) => {
            let per_second = calculate_metric_volume(metrics)?;
            Volume {
                signal: SignalType::Metrics,
                per_second: Some(per_second),
                monthly_units: per_second_to_monthly(per_second),
                gb_per_day: None,
            }
        }
        SignalConfig::Tracing(spans) => {
            let per_second = ensure_non_negative("spans_per_second", spans.spans_per_second)?;
            Volume {
                signal: SignalType::Tracing,
                per_second: Some(per_second),
                monthly_units: per_second_to_monthly(per_second),
                gb_per_day: None,
            }
        }
        SignalConfig::Logs(logs) => {
            let gb_per_day = ensure_non_negative("gb_per_day", logs.gb_per_day)?;
            Volume {
                signal: SignalType::Logs,
                per_second: None,
                monthly_units: gb_per_day_to_monthly(gb_per_day),
                gb_per_day: Some(gb_per_day),
            }
        }
        SignalConfig::Security(security) => {
            let per_second =
                ensure_non_negative("events_per_second", security.events_per_second)?;
            Volume {
                signal: SignalType::Security,
                per_second: Some(per_second),
                monthly_units: per_second_to_monthly(per_second),
                gb_per_day: Some(security_gb_per_day(per_second, BYTES_PER_SECURITY_EVENT)),
            }
        }
    };
    ensure_non_negative("monthly_units", volume.monthly_units)?;
    tracing::debug!(
        signal = volume.signal.id(),
        per_second = ?volume.per_second,
        monthly_units = volume.monthly_units,
        "computed volume"
    );
    Ok(volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_config(base_volume: f64, tags: &[&str], tag_values: u32) -> MetricConfig {
        MetricConfig {
            base_volume,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            tag_values,
            source_type: SourceType::Mixed,
        }
    }

    #[test]
    fn seconds_per_month_is_thirty_days() {
        assert_eq!(SECONDS_PER_MONTH, 2_592_000.0);
        assert_eq!(per_second_to_monthly(1.0), 2_592_000.0);
    }

    #[test]
    fn two_tags_multiply_by_tag_values_squared() {
        let config = metric_config(100.0, &["env", "service"], 10);
        assert_eq!(calculate_metric_volume(&config).unwrap(), 10_000.0);
        assert_eq!(cardinality_multiplier(&config), 100.0);
    }

    #[test]
    fn no_tags_leaves_volume_unchanged() {
        let config = metric_config(100.0, &[], 50);
        assert_eq!(calculate_metric_volume(&config).unwrap(), 100.0);
        assert_eq!(cardinality_multiplier(&config), 1.0);
    }

    #[test]
    fn tag_names_do_not_matter() {
        let a = metric_config(7.0, &["a", "b", "c"], 3);
        let b = metric_config(7.0, &["region", "pod", "route"], 3);
        assert_eq!(
            calculate_metric_volume(&a).unwrap(),
            calculate_metric_volume(&b).unwrap()
        );
        assert_eq!(calculate_metric_volume(&a).unwrap(), 189.0);
    }

    #[test]
    fn zero_base_volume_is_zero() {
        let config = metric_config(0.0, &["env"], 10);
        assert_eq!(calculate_metric_volume(&config).unwrap(), 0.0);
    }

    #[test]
    fn negative_base_volume_rejected() {
        let config = metric_config(-1.0, &[], 10);
        assert!(matches!(
            calculate_metric_volume(&config),
            Err(CalcError::InvalidInput { field: "base_volume", .. })
        ));
    }

    #[test]
    fn zero_tag_values_rejected() {
        let config = metric_config(10.0, &["env"], 0);
        assert_eq!(calculate_metric_volume(&config), Err(CalcError::ZeroTagValues));
    }

    #[test]
    fn overflow_is_rejected() {
        let tags: Vec<&str> = std::iter::repeat("t").take(400).collect();
        let config = metric_config(1.0, &tags, 10);
        assert!(matches!(
            calculate_metric_volume(&config),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn logs_are_thirty_days_of_gb() {
        assert_eq!(gb_per_day_to_monthly(10.0), 300.0);
        let volume = compute_volume(&SignalConfig::Logs(LogsConfig { gb_per_day: 2.5 })).unwrap();
        assert_eq!(volume.monthly_units, 75.0);
        assert_eq!(volume.per_second, None);
        assert_eq!(volume.gb_per_day, Some(2.5));
    }

    #[test]
    fn security_derives_daily_gb() {
        let gb = security_gb_per_day(1.0, 1000.0);
        assert!((gb - 86_400_000.0 / 1_073_741_824.0).abs() < 1e-12);

        let volume = compute_volume(&SignalConfig::Security(SecurityConfig {
            events_per_second: 100.0,
        }))
        .unwrap();
        assert_eq!(volume.monthly_units, 259_200_000.0);
        assert!((volume.gb_per_day.unwrap() - 100.0 * gb).abs() < 1e-9);
    }

    #[test]
    fn tracing_volume() {
        let volume = compute_volume(&SignalConfig::Tracing(TracingConfig {
            spans_per_second: 1000.0,
        }))
        .unwrap();
        assert_eq!(volume.signal, SignalType::Tracing);
        assert_eq!(volume.monthly_units, 2_592_000_000.0);
    }

    #[test]
    fn compute_volume_rejects_nan() {
        let err = compute_volume(&SignalConfig::Tracing(TracingConfig {
            spans_per_second: f64::NAN,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("spans_per_second"));
    }

    #[test]
    fn metric_signal_config_carries_source() {
        let mut config = metric_config(1.0, &[], 1);
        config.source_type = SourceType::Prometheus;
        let signal = SignalConfig::Metrics(config);
        assert_eq!(signal.signal(), SignalType::Metrics);
        assert_eq!(signal.source_type(), Some(SourceType::Prometheus));
        assert_eq!(
            SignalConfig::Logs(LogsConfig { gb_per_day: 1.0 }).source_type(),
            None
        );
    }
}
