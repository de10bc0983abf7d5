use serde::{Deserialize, Serialize};

use crate::core::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    Metrics,
    Tracing,
    Logs,
    Security,
}

impl SignalType {
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "metrics" | "metric" => Some(Self::Metrics),
            "tracing" | "traces" | "apm" => Some(Self::Tracing),
            "logs" | "log" => Some(Self::Logs),
            "security" | "siem" => Some(Self::Security),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::Tracing => "tracing",
            Self::Logs => "logs",
            Self::Security => "security",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Metrics => "Metrics",
            Self::Tracing => "Tracing/APM",
            Self::Logs => "Logs",
            Self::Security => "Security",
        }
    }

    /// Label for the monthly quantity a pricing model of this signal bills on.
    pub fn volume_label(&self) -> &'static str {
        match self {
            Self::Metrics => "metrics/month",
            Self::Tracing => "spans/month",
            Self::Logs => "GB/month",
            Self::Security => "events/month",
        }
    }

    pub fn all() -> &'static [SignalType] {
        &[Self::Metrics, Self::Tracing, Self::Logs, Self::Security]
    }
}

impl std::str::FromStr for SignalType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| CalcError::UnknownSignal(s.to_string()))
    }
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_accepts_aliases() {
        assert_eq!(SignalType::from_id("APM"), Some(SignalType::Tracing));
        assert_eq!(SignalType::from_id("siem"), Some(SignalType::Security));
        assert_eq!(SignalType::from_id("nope"), None);
    }

    #[test]
    fn id_roundtrips_through_from_id() {
        for signal in SignalType::all() {
            assert_eq!(SignalType::from_id(signal.id()), Some(*signal));
        }
    }

    #[test]
    fn parse_unknown_is_error() {
        let err = "profiles".parse::<SignalType>().unwrap_err();
        assert_eq!(err, CalcError::UnknownSignal("profiles".to_string()));
    }
}
