//! Terminal styling utilities for startup and report output

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗ ██╗███╗   ██╗███████╗██╗ ██████╗ ██╗  ██╗████████╗
    ██╔══██╗██║████╗  ██║██╔════╝██║██╔════╝ ██║  ██║╚══██╔══╝
    ██████╔╝██║██╔██╗ ██║███████╗██║██║  ███╗███████║   ██║
    ██╔══██╗██║██║╚██╗██║╚════██║██║██║   ██║██╔══██║   ██║
    ██████╔╝██║██║ ╚████║███████║██║╚██████╔╝██║  ██║   ██║
    ╚═════╝ ╚═╝╚═╝  ╚═══╝╚══════╝╚═╝ ╚═════╝ ╚═╝  ╚═╝   ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Terminal dashboard for binary-outcome datasets").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(58)).dim());
    println!();
}

/// Print a section header with styling
pub fn print_section_header(title: &str) {
    println!();
    println!("    {}", style(title).cyan().bold());
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
    println!("    {} {}", WARNING, style(message).yellow());
}

/// Print a fatal error message to stderr
pub fn print_fatal(message: &str) {
    eprintln!();
    eprintln!("    {} {}", style("✗").red().bold(), style(message).red());
    eprintln!();
}
