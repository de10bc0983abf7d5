//! Last-used calculator inputs.
//!
//! The calculation core never reads or writes this state. Callers load it
//! through a [`SessionStore`], overlay fresh input, run the calculation, and
//! save the result back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::conversion::SourceType;
use crate::core::volume::{LogsConfig, MetricConfig, SecurityConfig, SignalConfig, TracingConfig};

const SESSION_VERSION: u64 = 1;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode session state: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub version: u64,
    #[serde(default = "default_metrics")]
    pub metrics: MetricConfig,
    #[serde(default = "default_tracing")]
    pub tracing: TracingConfig,
    #[serde(default = "default_logs")]
    pub logs: LogsConfig,
    #[serde(default = "default_security")]
    pub security: SecurityConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

fn default_metrics() -> MetricConfig {
    MetricConfig {
        base_volume: 100.0,
        tags: Vec::new(),
        tag_values: 10,
        source_type: SourceType::Mixed,
    }
}
fn default_tracing() -> TracingConfig {
    TracingConfig {
        spans_per_second: 1000.0,
    }
}
fn default_logs() -> LogsConfig {
    LogsConfig { gb_per_day: 10.0 }
}
fn default_security() -> SecurityConfig {
    SecurityConfig {
        events_per_second: 100.0,
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            version: SESSION_VERSION,
            metrics: default_metrics(),
            tracing: default_tracing(),
            logs: default_logs(),
            security: default_security(),
            saved_at: None,
        }
    }
}

impl SessionState {
    /// Inputs for every signal, in display order.
    pub fn signal_configs(&self) -> Vec<SignalConfig> {
        vec![
            SignalConfig::Metrics(self.metrics.clone()),
            SignalConfig::Tracing(self.tracing),
            SignalConfig::Logs(self.logs),
            SignalConfig::Security(self.security),
        ]
    }
}

/// Load/save collaborator for [`SessionState`].
pub trait SessionStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<SessionState>, SessionError>;
    fn save(&self, state: &SessionState) -> Result<(), SessionError>;
}

/// JSON file under the XDG state directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new() -> Self {
        Self::at(default_session_path())
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn default_session_path() -> PathBuf {
    let base = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join(".local")
                .join("state")
        });
    base.join("o11ycost").join("session.json")
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<SessionState>, SessionError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state: SessionState = serde_json::from_str(&content)?;
        if state.version != SESSION_VERSION {
            tracing::debug!(version = state.version, "discarding session state from another version");
            return Ok(None);
        }
        Ok(Some(state))
    }

    fn save(&self, state: &SessionState) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut state = state.clone();
        state.version = SESSION_VERSION;
        state.saved_at = Some(Utc::now());
        std::fs::write(&self.path, serde_json::to_string_pretty(&state)?)?;
        tracing::debug!(path = %self.path.display(), "saved session state");
        Ok(())
    }
}

/// In-process store, for callers that keep state elsewhere and for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    state: RefCell<Option<SessionState>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SessionState>, SessionError> {
        Ok(self.state.borrow().clone())
    }

    fn save(&self, state: &SessionState) -> Result<(), SessionError> {
        *self.state.borrow_mut() = Some(state.clone());
        Ok(())
    }
}
