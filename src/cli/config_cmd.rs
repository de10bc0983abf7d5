use anyhow::Result;

use crate::cli::output::OutputOptions;
use crate::cli::selector;
use crate::core::catalog::{all_platforms, find_platform_by_id};
use crate::core::config::AppConfig;

fn print_enabled(ids: &[String]) {
    let count = ids.len();
    if count > 0 {
        println!(
            "  {} platform{} enabled: {}",
            count,
            if count == 1 { "" } else { "s" },
            ids.join(", ")
        );
    } else {
        println!("  No platforms enabled. Comparisons will be empty.");
    }
}

pub fn init(_opts: &OutputOptions) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        eprintln!("Config file already exists at {}", path.display());
        eprintln!("Remove it first if you want to regenerate.");
        return Ok(());
    }

    let items = selector::build_selectable_list();
    let selected_ids = match selector::interactive_select(&items) {
        Ok(Some(ids)) => ids,
        Ok(None) => {
            // Non-TTY fallback: enable the whole catalog
            all_platforms().map(|p| p.id.to_string()).collect()
        }
        Err(_) => {
            eprintln!("Config init cancelled.");
            return Ok(());
        }
    };

    match AppConfig::with_enabled(&selected_ids).save() {
        Ok(path) => {
            println!("Generated config at {}", path.display());
            print_enabled(&selected_ids);
        }
        Err(e) => {
            eprintln!("Failed to generate config: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}

pub fn edit(_opts: &OutputOptions) -> Result<()> {
    let path = AppConfig::config_path();
    if !path.exists() {
        eprintln!("No config file found at {}", path.display());
        eprintln!("Run `o11ycost config init` to create one first.");
        return Ok(());
    }

    let mut config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let items = selector::build_selectable_list_from_config(&config);
    let selected_ids = match selector::interactive_select(&items) {
        Ok(Some(ids)) => ids,
        Ok(None) => {
            eprintln!("Not a terminal. Edit the config manually at {}", path.display());
            return Ok(());
        }
        Err(_) => {
            eprintln!("Config edit cancelled.");
            return Ok(());
        }
    };

    config.update_platforms(&selected_ids);
    match config.save() {
        Ok(path) => {
            println!("Updated config at {}", path.display());
            print_enabled(&selected_ids);
        }
        Err(e) => {
            eprintln!("Failed to update config: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Flip one platform's flag. Returns false when it already had that state.
pub fn toggle(config: &mut AppConfig, platform_id: &str, enabled: bool) -> Result<bool> {
    let platform = find_platform_by_id(platform_id)?;
    if config.is_enabled(platform) == enabled {
        return Ok(false);
    }
    config.set_enabled(platform.id, enabled);
    Ok(true)
}

pub fn add(platform_id: &str, _opts: &OutputOptions) -> Result<()> {
    set(platform_id, true)
}

pub fn remove(platform_id: &str, _opts: &OutputOptions) -> Result<()> {
    set(platform_id, false)
}

fn set(platform_id: &str, enabled: bool) -> Result<()> {
    let state = if enabled { "enabled" } else { "disabled" };
    let mut config = AppConfig::load()?;

    match toggle(&mut config, platform_id, enabled) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Platform '{}' is already {}", platform_id, state);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    config.save()?;
    tracing::debug!(platform = platform_id, enabled, "updated config");
    println!(
        "{} platform: {}",
        if enabled { "Enabled" } else { "Disabled" },
        platform_id
    );
    Ok(())
}

pub fn check(_opts: &OutputOptions) -> Result<()> {
    let path = AppConfig::config_path();
    if !path.exists() {
        eprintln!("No config file found at {}", path.display());
        eprintln!("Run `o11ycost config init` to create one.");
        return Ok(());
    }

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let issues = config.validate();
    if issues.is_empty() {
        println!("Config is valid: {}", path.display());
        let disabled: Vec<_> = config
            .platforms
            .iter()
            .filter(|p| !p.enabled)
            .map(|p| p.id.as_str())
            .collect();
        if disabled.is_empty() {
            println!("  All platforms enabled.");
        } else {
            println!("  Disabled platforms: {}", disabled.join(", "));
        }
    } else {
        eprintln!("Config issues found in {}:", path.display());
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_disables_then_reports_no_change() {
        let mut config = AppConfig::default();
        assert!(toggle(&mut config, "grafana-logs", false).unwrap());
        assert!(!toggle(&mut config, "grafana-logs", false).unwrap());
        assert!(toggle(&mut config, "grafana-logs", true).unwrap());
    }

    #[test]
    fn toggle_accepts_any_case() {
        let mut config = AppConfig::default();
        assert!(toggle(&mut config, "DATADOG", false).unwrap());
        assert_eq!(config.platforms[0].id, "datadog");
    }

    #[test]
    fn toggle_rejects_unknown_platform() {
        let mut config = AppConfig::default();
        let err = toggle(&mut config, "nagios", true).unwrap_err();
        assert!(err.to_string().contains("nagios"));
        assert!(config.platforms.is_empty());
    }
}
