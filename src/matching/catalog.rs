use crate::error::ResourceError;
use crate::model::supplier::{
    COLUMN_CLASSIFICATION, COLUMN_CO2, COLUMN_COMPANY, COLUMN_LEAD_TIME, COLUMN_PRICE,
    COLUMN_PRODUCT, COLUMN_PRODUCT_CODE,
};
use crate::model::{SupplierOffer, SupplierRow, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const DELIMITER: u8 = b';';

/// Supplier offers read from the `;`-separated company catalog, in file order.
#[derive(Debug, Clone, Default)]
pub struct SupplierCatalog {
    rows: Vec<SupplierRow>,
}

impl SupplierCatalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let file = File::open(&path).map_err(|source| ResourceError::CatalogOpen {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        let catalog = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} supplier rows from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Reads a catalog and checks its header for every required column.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Schema`] naming the absent columns before any
    /// row is read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ResourceError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(DELIMITER)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let header_map = build_header_map(&headers);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !header_map.contains_key(**column))
            .map(|column| (*column).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ResourceError::Schema { missing });
        }

        let cell = |record: &StringRecord, column: &str| -> String {
            header_map
                .get(column)
                .and_then(|&idx| record.get(idx))
                .unwrap_or_default()
                .to_string()
        };

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(SupplierRow {
                classification: cell(&record, COLUMN_CLASSIFICATION),
                offer: SupplierOffer {
                    company: cell(&record, COLUMN_COMPANY),
                    product: cell(&record, COLUMN_PRODUCT),
                    product_code: cell(&record, COLUMN_PRODUCT_CODE),
                    price: cell(&record, COLUMN_PRICE),
                    co2: cell(&record, COLUMN_CO2),
                    lead_time: cell(&record, COLUMN_LEAD_TIME),
                },
            });
        }

        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[SupplierRow] {
        &self.rows
    }

    /// Rows whose classification equals `classification` exactly.
    pub fn matching<'a>(
        &'a self,
        classification: &'a str,
    ) -> impl Iterator<Item = &'a SupplierRow> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.classification == classification)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<SupplierRow>> for SupplierCatalog {
    fn from(rows: Vec<SupplierRow>) -> Self {
        Self { rows }
    }
}

/// Column name to index. The first occurrence of a repeated name wins.
fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        let name = name.trim_start_matches('\u{feff}').trim();
        map.entry(name.to_string()).or_insert(idx);
    }
    map
}
