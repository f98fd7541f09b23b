use std::path::Path;

use fontnames::FontResolver;
use fontnames::fontnames_core::DEFAULT_MAX_INPUT_BYTES;
use fontnames::fontnames_parse::source::read_font_file;

use crate::cli::OutputFormat;
use crate::shared::{EXIT_BAD_INPUT, EXIT_NOT_FOUND, TEXT_HEADER, json_entry, print_json, text_row};

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let data = read_font_file(file, Some(DEFAULT_MAX_INPUT_BYTES)).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        EXIT_BAD_INPUT
    })?;
    tracing::debug!(path = %file.display(), len = data.len(), "read font file");

    let input = file.display().to_string();
    let names = FontResolver::new().resolve_bytes(&data);

    match format {
        OutputFormat::Text => {
            println!("{TEXT_HEADER}");
            if let Some(names) = &names {
                println!("{}", text_row(&input, names));
            }
        }
        OutputFormat::Json => print_json(&json_entry(&input, names.as_ref(), None))?,
    }

    if names.is_none() {
        if *format == OutputFormat::Text {
            eprintln!("not found: {input}");
        }
        return Err(EXIT_NOT_FOUND);
    }
    Ok(())
}
