use super::ClassificationMap;
use crate::model::UNKNOWN;
use std::collections::BTreeSet;

/// Mapped type codes present in the model, in lexicographic order.
///
/// `model_keywords` are STEP entity keywords; a mapping code matches a keyword
/// regardless of ASCII case and is returned as spelled in the mapping. Model
/// types absent from `map` are dropped; their elements never reach the report.
#[must_use]
pub fn filtered_types(model_keywords: &BTreeSet<String>, map: &ClassificationMap) -> Vec<String> {
    let mut filtered: Vec<String> = map
        .codes()
        .filter(|code| model_keywords.contains(&code.to_ascii_uppercase()))
        .map(str::to_string)
        .collect();
    filtered.sort();
    filtered
}

/// Classification description for an element type.
#[must_use]
pub fn classify<'a>(type_code: &str, map: &'a ClassificationMap) -> &'a str {
    map.get(type_code).unwrap_or(UNKNOWN)
}

/// Numbered operator listing, one `i - description` line per filtered type.
#[must_use]
pub fn describe_types(filtered: &[String], map: &ClassificationMap) -> Vec<String> {
    filtered
        .iter()
        .enumerate()
        .map(|(i, type_code)| format!("{} - {}", i + 1, classify(type_code, map)))
        .collect()
}
