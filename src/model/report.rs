use super::SupplierOffer;
use serde::Serialize;

/// Classification and supplier choice for a single model element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub classification: String,
    pub sub_type: String,
    pub name: String,
    pub offer: SupplierOffer,
}

/// Report header, matching the serialized field names of [`ReportRow`].
pub const REPORT_COLUMNS: [&str; 10] = [
    "OmniClass",
    "Object Type",
    "Name",
    "Count",
    "Company",
    "Product",
    "Product Code",
    "Price",
    "CO2_Emissions",
    "Lead Time",
];

/// One line of the exported report: a representative element per sub type.
///
/// Field order is the report's column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "OmniClass")]
    pub classification: String,
    #[serde(rename = "Object Type")]
    pub sub_type: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Count")]
    pub count: usize,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Product Code")]
    pub product_code: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "CO2_Emissions")]
    pub co2: String,
    #[serde(rename = "Lead Time")]
    pub lead_time: String,
}

impl ReportRow {
    #[must_use]
    pub fn from_record(record: ElementRecord, count: usize) -> Self {
        let ElementRecord {
            classification,
            sub_type,
            name,
            offer,
        } = record;

        Self {
            classification,
            sub_type,
            name,
            count,
            company: offer.company,
            product: offer.product,
            product_code: offer.product_code,
            price: offer.price,
            co2: offer.co2,
            lead_time: offer.lead_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serialized_header_matches_report_columns() {
        let row = ReportRow::from_record(
            ElementRecord {
                classification: "23-10 Walls".to_string(),
                sub_type: "Basic Wall".to_string(),
                name: "W1".to_string(),
                offer: SupplierOffer::no_supplier(),
            },
            4,
        );

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&row).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some(REPORT_COLUMNS.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some("23-10 Walls,Basic Wall,W1,4,No Supplier,N/A,N/A,N/A,N/A,N/A")
        );
    }
}
