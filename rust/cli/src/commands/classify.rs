//! Classify command handler.
//!
//! Runs one hand supplied on the command line through the variant's classifier
//! and prints the category name, or `no win`.

use crate::cli::VariantArg;
use crate::commands::resolve_variant;
use crate::config;
use crate::error::CliError;
use crate::formatters::format_result;
use crate::validation::parse_symbol_list;
use std::io::Write;

/// Handle the classify command.
///
/// `suits` and `ranks` are comma-separated symbol lists. Validation errors
/// are returned as `CliError::Hand` before anything is printed.
pub fn handle_classify_command(
    variant: Option<VariantArg>,
    suits: &str,
    ranks: &str,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let variant = resolve_variant(variant, &cfg);
    let suits = parse_symbol_list(suits);
    let ranks = parse_symbol_list(ranks);

    let category = variant.classify(&suits, &ranks)?;
    if json {
        let display = serde_json::json!({
            "variant": variant.kind,
            "suits": suits,
            "ranks": ranks,
            "category": category,
        });
        writeln!(out, "{}", serde_json::to_string(&display).map_err(std::io::Error::other)?)?;
    } else {
        writeln!(out, "{}", format_result(category))?;
    }
    Ok(())
}
