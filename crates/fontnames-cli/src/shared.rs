use fontnames::{FontFormat, FontNames};
use tracing_subscriber::EnvFilter;

/// Exit code when an input resolves to nothing.
pub const EXIT_NOT_FOUND: i32 = 1;

/// Exit code for a malformed specifier or an unreadable input file.
pub const EXIT_BAD_INPUT: i32 = 2;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` selects the filter (default `warn`); `--verbose` forces `debug`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Header row for text output.
pub const TEXT_HEADER: &str =
    "input\tpostscript_name\tfamily\tstyle\tfull_name\tweight\twidth\tbold\titalic\tformat";

pub fn format_label(format: FontFormat) -> &'static str {
    match format {
        FontFormat::OpenType => "opentype",
        FontFormat::Type1 => "type1",
        FontFormat::CidKeyed => "cid",
    }
}

/// One tab-separated row of text output.
pub fn text_row(input: &str, names: &FontNames) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        input,
        names.postscript_name,
        names.family_name,
        names.style_name,
        names.full_name,
        names.weight,
        names.width,
        names.bold,
        names.italic,
        format_label(names.format),
    )
}

/// JSON object for one input. `names` is `null` when nothing resolved.
pub fn json_entry(
    input: &str,
    names: Option<&FontNames>,
    error: Option<String>,
) -> serde_json::Value {
    let mut entry = serde_json::json!({
        "input": input,
        "names": names,
    });
    if let Some(error) = error {
        entry["error"] = serde_json::Value::String(error);
    }
    entry
}

/// Print a JSON value on one line.
pub fn print_json(value: &serde_json::Value) -> Result<(), i32> {
    let json_str = serde_json::to_string(value).map_err(|e| {
        eprintln!("Error: failed to serialize output: {e}");
        EXIT_BAD_INPUT
    })?;
    println!("{json_str}");
    Ok(())
}
