use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{OutputFormat, OutputOptions};
use crate::cli::renderer;
use crate::core::catalog::{find_platform_by_id, list_platforms, Platform};
use crate::core::config::AppConfig;
use crate::core::signal::SignalType;

#[derive(Serialize)]
struct PlatformEntry<'a> {
    #[serde(flatten)]
    platform: &'a Platform,
    self_hosted: bool,
    enabled: bool,
}

/// Signals selected by `--signal`, or all of them.
pub fn selected_signals(filter: Option<&str>) -> Result<Vec<SignalType>> {
    match filter {
        Some(id) => Ok(vec![id.parse::<SignalType>()?]),
        None => Ok(SignalType::all().to_vec()),
    }
}

pub fn list(signal_filter: Option<&str>, config: &AppConfig, opts: &OutputOptions) -> Result<()> {
    let signals = selected_signals(signal_filter)?;

    match opts.format {
        OutputFormat::Text => {
            let sections: Vec<String> = signals
                .iter()
                .map(|s| renderer::render_platform_list(*s, list_platforms(*s), config, opts.use_color))
                .collect();
            println!("{}", sections.join("\n\n"));
        }
        OutputFormat::Json => {
            let entries: Vec<PlatformEntry> = signals
                .iter()
                .flat_map(|s| list_platforms(*s).iter())
                .map(|p| PlatformEntry {
                    platform: p,
                    self_hosted: p.is_self_hosted(),
                    enabled: config.is_enabled(p),
                })
                .collect();
            println!("{}", opts.to_json(&entries)?);
        }
    }
    Ok(())
}

pub fn show(platform_id: &str, config: &AppConfig, opts: &OutputOptions) -> Result<()> {
    let platform = match find_platform_by_id(platform_id) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run `o11ycost platforms` to list available platforms.");
            std::process::exit(1);
        }
    };

    match opts.format {
        OutputFormat::Text => {
            println!("{}", renderer::render_platform_details(platform, opts.use_color));
        }
        OutputFormat::Json => {
            let entry = PlatformEntry {
                platform,
                self_hosted: platform.is_self_hosted(),
                enabled: config.is_enabled(platform),
            };
            println!("{}", opts.to_json(&entry)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_selects_every_signal() {
        assert_eq!(selected_signals(None).unwrap().len(), 4);
    }

    #[test]
    fn filter_accepts_aliases() {
        assert_eq!(selected_signals(Some("apm")).unwrap(), vec![SignalType::Tracing]);
        assert_eq!(selected_signals(Some("SIEM")).unwrap(), vec![SignalType::Security]);
    }

    #[test]
    fn unknown_signal_is_rejected() {
        let err = selected_signals(Some("profiles")).unwrap_err();
        assert!(err.to_string().contains("profiles"));
    }

    #[test]
    fn json_entry_flattens_platform() {
        let platform = find_platform_by_id("thanos").unwrap();
        let entry = PlatformEntry {
            platform,
            self_hosted: platform.is_self_hosted(),
            enabled: true,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], "thanos");
        assert_eq!(value["self_hosted"], true);
        assert_eq!(value["pricing"]["rate"]["basis"], "fixed");
        assert!(value["infrastructure"]["compute"].is_number());
    }
}
