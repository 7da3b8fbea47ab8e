use super::SortCriterion;

pub const COLUMN_CLASSIFICATION: &str = "OmniClass";
pub const COLUMN_COMPANY: &str = "Company";
pub const COLUMN_PRODUCT: &str = "Product";
pub const COLUMN_PRODUCT_CODE: &str = "Product Code";
pub const COLUMN_PRICE: &str = "Price";
pub const COLUMN_CO2: &str = "CO2_Emissions";
pub const COLUMN_LEAD_TIME: &str = "Lead Time";

/// Columns a supplier catalog header must contain.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COLUMN_CLASSIFICATION,
    COLUMN_COMPANY,
    COLUMN_PRODUCT,
    COLUMN_PRODUCT_CODE,
    COLUMN_PRICE,
    COLUMN_CO2,
    COLUMN_LEAD_TIME,
];

pub const NO_SUPPLIER: &str = "No Supplier";
pub const NOT_AVAILABLE: &str = "N/A";

/// The supplier half of a catalog row.
///
/// Numeric columns stay as catalog text so reports reproduce them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierOffer {
    pub company: String,
    pub product: String,
    pub product_code: String,
    pub price: String,
    pub co2: String,
    pub lead_time: String,
}

impl SupplierOffer {
    /// Placeholder used when no catalog row matches a classification.
    #[must_use]
    pub fn no_supplier() -> Self {
        Self {
            company: NO_SUPPLIER.to_string(),
            product: NOT_AVAILABLE.to_string(),
            product_code: NOT_AVAILABLE.to_string(),
            price: NOT_AVAILABLE.to_string(),
            co2: NOT_AVAILABLE.to_string(),
            lead_time: NOT_AVAILABLE.to_string(),
        }
    }

    /// Raw text of the column ranked by `criterion`.
    #[must_use]
    pub fn ranking_value(&self, criterion: SortCriterion) -> &str {
        match criterion {
            SortCriterion::Price => &self.price,
            SortCriterion::Co2 => &self.co2,
            SortCriterion::LeadTime => &self.lead_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierRow {
    pub classification: String,
    pub offer: SupplierOffer,
}
