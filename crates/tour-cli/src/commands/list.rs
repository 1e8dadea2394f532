//! List command - show the available lessons.

use anyhow::Result;
use serde_json::json;
use tour::Lesson;
use tour_config::OutputFormat;

use crate::style::print_table;

pub fn run(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let lessons: Vec<_> = Lesson::ALL
                .iter()
                .map(|l| json!({ "name": l.name(), "summary": l.summary() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&lessons)?);
        }
        OutputFormat::Text => {
            let columns = ["Lesson".to_string(), "Summary".to_string()];
            let rows: Vec<Vec<String>> = Lesson::ALL
                .iter()
                .map(|l| vec![l.name().to_string(), l.summary().to_string()])
                .collect();
            print_table(&columns, &rows);
        }
    }
    Ok(())
}
