pub mod prompt;
pub mod theme;

pub use prompt::{print_filtered_types, prompt_criterion, prompt_model_path, resolve_criterion};
