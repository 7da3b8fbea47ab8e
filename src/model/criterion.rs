use super::supplier::{COLUMN_CO2, COLUMN_LEAD_TIME, COLUMN_PRICE};

/// Column used to rank competing supplier offers. Lowest value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    #[default]
    Price,
    Co2,
    LeadTime,
}

impl SortCriterion {
    /// Parses the one-letter shortcut (`P`, `C`, `T`), ignoring case and whitespace.
    #[must_use]
    pub fn from_shortcut(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "P" => Some(Self::Price),
            "C" => Some(Self::Co2),
            "T" => Some(Self::LeadTime),
            _ => None,
        }
    }

    /// Catalog column holding the ranked value.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Price => COLUMN_PRICE,
            Self::Co2 => COLUMN_CO2,
            Self::LeadTime => COLUMN_LEAD_TIME,
        }
    }

    /// Tag embedded in the report file name.
    #[must_use]
    pub fn file_tag(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Co2 => "co2",
            Self::LeadTime => "leadtime",
        }
    }
}
