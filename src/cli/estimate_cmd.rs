use anyhow::{Context, Result};

use crate::cli::output::{OutputFormat, OutputOptions};
use crate::cli::renderer;
use crate::core::config::AppConfig;
use crate::core::conversion::SourceType;
use crate::core::cost::estimate;
use crate::core::models::report::CostReport;
use crate::core::session::{SessionState, SessionStore};
use crate::core::signal::SignalType;

/// Command-line overrides for the saved session inputs.
#[derive(Debug, Default, Clone)]
pub struct InputFlags {
    pub base_volume: Option<f64>,
    /// Replaces the saved tags when present
    pub tags: Option<Vec<String>>,
    pub tag_values: Option<u32>,
    pub source_type: Option<String>,
    pub spans_per_second: Option<f64>,
    pub gb_per_day: Option<f64>,
    pub events_per_second: Option<f64>,
}

impl InputFlags {
    pub fn apply(&self, state: &mut SessionState) {
        if let Some(base_volume) = self.base_volume {
            state.metrics.base_volume = base_volume;
        }
        if let Some(tags) = &self.tags {
            state.metrics.tags = tags.clone();
        }
        if let Some(tag_values) = self.tag_values {
            state.metrics.tag_values = tag_values;
        }
        if let Some(source) = &self.source_type {
            state.metrics.source_type = SourceType::parse(source).unwrap_or_else(|| {
                tracing::warn!(source_type = %source, "unknown source type, using mixed");
                SourceType::Mixed
            });
        }
        if let Some(spans) = self.spans_per_second {
            state.tracing.spans_per_second = spans;
        }
        if let Some(gb) = self.gb_per_day {
            state.logs.gb_per_day = gb;
        }
        if let Some(eps) = self.events_per_second {
            state.security.events_per_second = eps;
        }
    }
}

/// Saved state, or defaults seeded with the configured source type.
pub fn initial_state(store: &dyn SessionStore, config: &AppConfig) -> SessionState {
    match store.load() {
        Ok(Some(state)) => state,
        Ok(None) => {
            let mut state = SessionState::default();
            state.metrics.source_type = config.source_type();
            state
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable session state");
            SessionState::default()
        }
    }
}

/// Estimate each signal from `state`, pricing only platforms enabled in config.
pub fn build_reports(
    signals: &[SignalType],
    state: &SessionState,
    config: &AppConfig,
) -> Result<Vec<CostReport>> {
    state
        .signal_configs()
        .iter()
        .filter(|c| signals.contains(&c.signal()))
        .map(|c| {
            estimate(c, |p| config.is_enabled(p))
                .with_context(|| format!("Failed to estimate {} costs", c.signal().id()))
        })
        .collect()
}

/// Estimate `signals`, print the reports, and save the inputs when `persist`.
pub fn run(
    signals: &[SignalType],
    flags: &InputFlags,
    persist: bool,
    store: &dyn SessionStore,
    config: &AppConfig,
    opts: &OutputOptions,
) -> Result<()> {
    let mut state = initial_state(store, config);
    flags.apply(&mut state);

    let reports = build_reports(signals, &state, config)?;

    if persist {
        if let Err(e) = store.save(&state) {
            tracing::warn!(error = %e, "failed to save session state");
        }
    }

    match opts.format {
        OutputFormat::Text => {
            let sections: Vec<String> = reports
                .iter()
                .map(|report| {
                    renderer::render_report(
                        report,
                        state.metrics.tags.len(),
                        state.metrics.tag_values,
                        opts.use_color,
                    )
                })
                .collect();
            println!("{}", sections.join("\n\n"));
        }
        OutputFormat::Json => {
            let json = match reports.as_slice() {
                [single] => opts.to_json(single)?,
                _ => opts.to_json(&reports)?,
            };
            println!("{}", json);
        }
    }

    Ok(())
}
