use super::theme::prompt_theme;
use crate::model::SortCriterion;
use console::style;
use dialoguer::Input;
use std::path::PathBuf;

pub const CRITERION_PROMPT: &str = "Sort by (P = Price, C = CO2_Emissions, T = Lead Time)?";

/// Asks for the IFC model path. `None` means the user entered nothing.
pub fn prompt_model_path() -> Result<Option<PathBuf>, dialoguer::Error> {
    let input: String = Input::with_theme(&prompt_theme())
        .with_prompt("Select IFC file")
        .allow_empty(true)
        .interact_text()?;

    Ok(non_empty_path(&input))
}

fn non_empty_path(input: &str) -> Option<PathBuf> {
    // Paths dragged into a terminal often arrive quoted
    let trimmed = input.trim().trim_matches(|c| c == '"' || c == '\'');
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

/// Asks for the one-letter sort shortcut.
pub fn prompt_criterion() -> Result<SortCriterion, dialoguer::Error> {
    let input: String = Input::with_theme(&prompt_theme())
        .with_prompt(CRITERION_PROMPT)
        .allow_empty(true)
        .interact_text()?;

    Ok(resolve_criterion(&input))
}

/// Maps a shortcut to a criterion, falling back to price with a warning.
#[must_use]
pub fn resolve_criterion(input: &str) -> SortCriterion {
    if let Some(criterion) = SortCriterion::from_shortcut(input) {
        return criterion;
    }

    log::warn!("invalid sort shortcut {:?}, defaulting to price", input.trim());
    println!(
        "{} {}",
        style("⚠").yellow().bold(),
        style("Invalid input! Defaulting to 'P' (Price).").yellow()
    );
    SortCriterion::default()
}

/// Prints the numbered list of classified model types.
pub fn print_filtered_types(lines: &[String]) {
    println!();
    println!(
        "  {}",
        style("IFC objects with OmniClass mapping:").cyan().bold()
    );
    if lines.is_empty() {
        println!("  {}", style("(none)").dim());
    }
    for line in lines {
        println!("  {line}");
    }
    println!();
}
