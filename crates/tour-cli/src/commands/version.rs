//! Version command implementation.

use crate::style::banner::print_version_banner;

/// Version information for the CLI.
const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn run() {
    print_version_banner(VERSION);
    println!("{NAME} {VERSION}");
    println!();
    println!("Build info:");
    println!("  Lessons:      {}", tour::Lesson::ALL.len());
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
}
