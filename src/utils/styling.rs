//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static DICE: Emoji<'_, '_> = Emoji("🎲 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("edastat").cyan().bold(),
        style("Exploratory data analysis & interval simulation").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(
    input: &Path,
    output: &Path,
    sample_size: usize,
    confidence_level: f64,
    coverage_iterations: usize,
    clt_iterations: usize,
    seed: Option<u64>,
) {
    println!("    {} Input:  {}", FOLDER, input.display());
    println!("    {} Output: {}", SAVE, output.display());
    println!(
        "    {} Sample size: {}  Confidence: {}  Coverage iters: {}  CLT iters: {}",
        CHART,
        style(sample_size).yellow(),
        style(format!("{:.0}%", confidence_level * 100.0)).yellow(),
        style(coverage_iterations).yellow(),
        style(clt_iterations).yellow(),
    );
    match seed {
        Some(seed) => println!("    {} Seed: {}", DICE, style(seed).yellow()),
        None => println!("    {} Seed: {}", DICE, style("from entropy").dim()),
    }
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, threshold_info: Option<&str>) {
    if let Some(info) = threshold_info {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!(
            "      Found {} {}",
            style(count).yellow().bold(),
            description
        );
    }
}

/// Print the elapsed time of a step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "      {}",
        style(format!("({:.2}s)", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Edastat analysis complete!").green().bold()
    );
    println!();
}
