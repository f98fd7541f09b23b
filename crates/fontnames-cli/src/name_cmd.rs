use fontnames::FontResolver;

use crate::cli::OutputFormat;
use crate::shared::{EXIT_BAD_INPUT, EXIT_NOT_FOUND, TEXT_HEADER, json_entry, print_json, text_row};

pub fn run(specifiers: &[String], format: &OutputFormat) -> Result<(), i32> {
    let resolver = FontResolver::new();
    let inputs: Vec<&str> = specifiers.iter().map(String::as_str).collect();
    tracing::debug!(count = inputs.len(), "resolving font specifiers");
    let results = resolver.resolve_all(&inputs);

    let mut exit = 0;
    let mut entries = Vec::new();
    if *format == OutputFormat::Text {
        println!("{TEXT_HEADER}");
    }

    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(Some(names)) => match format {
                OutputFormat::Text => println!("{}", text_row(input, &names)),
                OutputFormat::Json => entries.push(json_entry(input, Some(&names), None)),
            },
            Ok(None) => {
                exit = exit.max(EXIT_NOT_FOUND);
                match format {
                    OutputFormat::Text => eprintln!("not found: {input}"),
                    OutputFormat::Json => entries.push(json_entry(input, None, None)),
                }
            }
            Err(e) => {
                exit = exit.max(EXIT_BAD_INPUT);
                match format {
                    OutputFormat::Text => eprintln!("Error: {e}"),
                    OutputFormat::Json => {
                        entries.push(json_entry(input, None, Some(e.to_string())));
                    }
                }
            }
        }
    }

    if *format == OutputFormat::Json {
        print_json(&serde_json::Value::Array(entries))?;
    }

    if exit == 0 { Ok(()) } else { Err(exit) }
}
