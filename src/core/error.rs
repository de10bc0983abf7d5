use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid input for {field}: {value} (must be finite and non-negative)")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("tag_values must be at least 1")]
    ZeroTagValues,
    #[error("Unknown platform: '{0}'")]
    UnknownPlatform(String),
    #[error("Unknown signal type: '{0}' (must be metrics|tracing|logs|security)")]
    UnknownSignal(String),
}

/// Reject negative, NaN and infinite values.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(ensure_non_negative("x", 0.0), Ok(0.0));
        assert_eq!(ensure_non_negative("x", 12.5), Ok(12.5));
    }

    #[test]
    fn rejects_negative() {
        let err = ensure_non_negative("base_volume", -1.0).unwrap_err();
        assert!(err.to_string().contains("base_volume"));
    }

    #[test]
    fn rejects_nan_and_infinity() {
        assert!(ensure_non_negative("x", f64::NAN).is_err());
        assert!(ensure_non_negative("x", f64::INFINITY).is_err());
    }
}
