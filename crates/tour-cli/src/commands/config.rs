//! Configuration management commands.

use anyhow::Result;
use tour_config::TourConfig;

use crate::style::{colors::SemanticStyle, print_labeled, print_spacer};

/// Show the effective configuration.
pub fn show(config: &TourConfig, output: &str) -> Result<()> {
    match output {
        "json" => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{json}");
        }
        "toml" => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{toml_str}");
        }
        _ => {
            println!("{}", "tour Configuration".header());
            print_spacer();

            println!("Output:");
            print_labeled("Format", &format!("{:?}", config.output.format));
            print_labeled("Color", &config.output.color.to_string());
            print_spacer();

            let c = &config.conditions;
            println!("Conditions:");
            print_labeled("Parity of", &c.parity_of.to_string());
            print_labeled("Dividend", &c.dividend.to_string());
            print_labeled("Divisor", &c.divisor.to_string());
            print_labeled("Scoped", &c.scoped.to_string());
            print_spacer();

            let m = &config.maps;
            let pairs = |entries: &[tour::maps::MapEntry]| {
                entries
                    .iter()
                    .map(|e| format!("{}:{}", e.key, e.value))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            println!("Maps:");
            print_labeled("Entries", &pairs(m.entries.as_slice()));
            print_labeled("Lookup", &m.lookup);
            print_labeled("Missing", &m.missing);
            print_labeled("Remove", &m.remove);
            print_labeled("Literal", &pairs(m.literal.as_slice()));
            print_spacer();

            println!("Runes:");
            print_labeled("Text", &config.runes.text);
        }
    }

    Ok(())
}
