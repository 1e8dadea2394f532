//! Version banner for tour.

use super::colors::SemanticStyle;

/// Prints the version banner.
pub fn print_version_banner(version: &str) {
    println!();
    println!(
        "  {} {} {}",
        "»".info(),
        "tour".header(),
        format!("v{version}").muted()
    );
    println!("  {}", "Small lessons on everyday language features".muted());
    println!();
}
