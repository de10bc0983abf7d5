use colored::{control, Color, Colorize};

use crate::core::catalog::{Platform, RateBasis};
use crate::core::config::AppConfig;
use crate::core::formatter::{
    format_cost_bar, format_count, format_currency, format_gb, format_multiplier, format_rate,
};
use crate::core::models::report::CostReport;
use crate::core::signal::SignalType;

const BAR_WIDTH: usize = 20;

/// Map a catalog color name to a terminal color.
fn platform_color(name: &str) -> Color {
    match name {
        "blue" => Color::Blue,
        "sky" => Color::BrightBlue,
        "cyan" => Color::Cyan,
        "green" | "emerald" | "teal" => Color::Green,
        "purple" | "indigo" => Color::Magenta,
        "pink" => Color::BrightMagenta,
        "red" => Color::Red,
        "amber" => Color::Yellow,
        "orange" => Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        "slate" => Color::BrightBlack,
        _ => Color::White,
    }
}

/// Render one signal's comparison as a colored (or plain) string.
///
/// Layout:
/// ```text
///  Metrics
///   Volume       10.00K/sec (25.92B metrics/month)
///   Cardinality  100x (2 tags x 10 values)
///   Source       Mixed (250 bytes/point)
///
///   Grafana Cloud          $6,480/mo    $77,760/yr  [████░░░░░░░░░░░░░░░░]
/// ```
pub fn render_report(report: &CostReport, tag_count: usize, tag_values: u32, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(" {}", report.signal.display_name()).bold().to_string());

    let volume = &report.volume;
    let monthly = format!("{} {}", format_count(volume.monthly_units), report.signal.volume_label());
    let volume_line = match (report.signal, volume.per_second, volume.gb_per_day) {
        (SignalType::Logs, _, Some(gb)) => format!("{}/day ({})", format_gb(gb), monthly),
        (_, Some(rate), Some(gb)) => {
            format!("{} ({}, {}/day)", format_rate(rate), monthly, format_gb(gb))
        }
        (_, Some(rate), None) => format!("{} ({})", format_rate(rate), monthly),
        _ => monthly,
    };
    lines.push(format!("  {}       {}", "Volume".cyan(), volume_line));

    if let Some(multiplier) = report.cardinality_multiplier {
        lines.push(format!(
            "  {}  {} ({} tag{} x {} values)",
            "Cardinality".cyan(),
            format_multiplier(multiplier),
            tag_count,
            if tag_count == 1 { "" } else { "s" },
            tag_values
        ));
    }
    if let Some(source) = report.source_type {
        lines.push(format!(
            "  {}       {} ({} bytes/point)",
            "Source".cyan(),
            source.display_name(),
            source.bytes_per_datapoint()
        ));
    }

    lines.push(String::new());

    if report.costs.is_empty() {
        lines.push(format!("  {}", "No platforms enabled.".dimmed()));
        return lines.join("\n");
    }

    let max_cost = report
        .most_expensive()
        .map(|c| c.monthly_cost)
        .unwrap_or(0.0);
    let name_width = report.costs.iter().map(|c| c.name.len()).max().unwrap_or(0);

    for (i, cost) in report.costs.iter().enumerate() {
        let monthly = format!("{:>12}/mo", format_currency(cost.monthly_cost));
        let monthly = if i == 0 {
            monthly.green().bold().to_string()
        } else {
            monthly
        };
        let bar = format_cost_bar(cost.monthly_cost, max_cost, BAR_WIDTH)
            .color(platform_color(cost.color));
        lines.push(format!(
            "  {:<width$}  {}  {:>12}/yr  {}",
            cost.name,
            monthly,
            format_currency(cost.annual_cost),
            bar,
            width = name_width
        ));
    }

    lines.join("\n")
}

fn describe_rate(platform: &Platform) -> String {
    let pricing = &platform.pricing;
    match pricing.rate {
        RateBasis::Fixed => "Fixed".to_string(),
        RateBasis::PerUnit { price } => format!("${} per unit", price),
        RateBasis::PerMillionUnits { price } => format!("${} per million", price),
        RateBasis::PerGb {
            price,
            bytes_per_unit: Some(bytes),
        } => format!("${} per GB ({} bytes/unit)", price, bytes),
        RateBasis::PerGb { price, .. } => format!("${} per GB", price),
    }
}

/// Render pricing details and the infrastructure breakdown for one platform.
pub fn render_platform_details(platform: &Platform, use_color: bool) -> String {
    control::set_override(use_color);

    let pricing = &platform.pricing;
    let mut lines: Vec<String> = Vec::new();
    lines.push(
        format!(" {} ({})", platform.name, platform.id)
            .color(platform_color(platform.color))
            .bold()
            .to_string(),
    );
    lines.push(format!("  {}     {}", "Signal".cyan(), platform.signal.display_name()));
    if pricing.base_price > 0.0 {
        lines.push(format!(
            "  {}       {}/month",
            "Base".cyan(),
            format_currency(pricing.base_price)
        ));
    }
    lines.push(format!("  {}       {}", "Rate".cyan(), describe_rate(platform)));
    lines.push(format!("  {}       {}", "Unit".cyan(), pricing.unit));
    if pricing.free_tier > 0.0 {
        lines.push(format!(
            "  {}  {} {}",
            "Free tier".cyan(),
            format_count(pricing.free_tier),
            platform.signal.volume_label()
        ));
    }
    if !platform.metric_types.is_empty() {
        lines.push(format!("  {}    {}", "Formats".cyan(), platform.metric_types.join(", ")));
    }

    if let Some(infra) = &platform.infrastructure {
        lines.push(format!("  {}:", "Infrastructure".cyan()));
        for (label, value) in infra.items() {
            lines.push(format!("    {:<10} {:>10}", label, format_currency(value)));
        }
        lines.push(format!(
            "    {:<10} {:>10}",
            "Total".bold(),
            format_currency(infra.total())
        ));
        if let Some(notes) = infra.notes {
            lines.push(format!("    {}", notes.dimmed()));
        }
    }

    if let Some(note) = platform.note {
        lines.push(format!("  {}", note.dimmed()));
    }

    lines.join("\n")
}

/// Render the catalog of one signal, marking platforms disabled in config.
pub fn render_platform_list(
    signal: SignalType,
    platforms: &[Platform],
    config: &AppConfig,
    use_color: bool,
) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(" {}", signal.display_name()).bold().to_string());
    let id_width = platforms.iter().map(|p| p.id.len()).max().unwrap_or(0);
    for platform in platforms {
        let kind = if platform.is_self_hosted() {
            "self-hosted"
        } else {
            "usage"
        };
        let line = format!(
            "  {:<width$}  {:<28} {:<11}  {}",
            platform.id,
            platform.name,
            kind,
            describe_rate(platform),
            width = id_width
        );
        if config.is_enabled(platform) {
            lines.push(line);
        } else {
            lines.push(format!("{} (disabled)", line).dimmed().to_string());
        }
    }
    lines.join("\n")
}
