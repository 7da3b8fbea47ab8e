use super::SupplierCatalog;
use crate::error::MatchError;
use crate::model::{SortCriterion, SupplierOffer};

/// Picks the best catalog offer for a classification.
///
/// Rows are matched on the exact classification text. The row with the lowest
/// value in the `criterion` column wins; on a tie the row listed first in the
/// catalog is kept. Blank cells rank after every number. With no matching rows
/// the "No Supplier" placeholder is returned.
///
/// # Errors
///
/// Returns [`MatchError::DataType`] if a matching row's ranking column holds
/// text that is not a number.
pub fn select(
    classification: &str,
    catalog: &SupplierCatalog,
    criterion: SortCriterion,
) -> Result<SupplierOffer, MatchError> {
    let mut best: Option<(Rank, &SupplierOffer)> = None;

    for row in catalog.matching(classification) {
        let raw = row.offer.ranking_value(criterion);
        let rank = Rank::parse(raw).ok_or_else(|| MatchError::DataType {
            classification: classification.to_string(),
            column: criterion.column(),
            value: raw.to_string(),
        })?;

        let improves = match best {
            Some((current, _)) => rank.ranks_before(current),
            None => true,
        };
        if improves {
            best = Some((rank, &row.offer));
        }
    }

    Ok(best.map_or_else(SupplierOffer::no_supplier, |(_, offer)| offer.clone()))
}

/// Sort key of a ranking cell.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Rank {
    Value(f64),
    Blank,
}

impl Rank {
    /// `None` for text that is neither blank nor a number.
    fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return Some(Self::Blank);
        }
        parse_number(raw).map(Self::Value)
    }

    /// Strictly lower; equal keys keep the earlier row.
    fn ranks_before(self, other: Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a < b,
            (Self::Value(_), Self::Blank) => true,
            (Self::Blank, _) => false,
        }
    }
}

/// Parses a catalog number, accepting `.` or `,` as decimal separator.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<f64>()
        .or_else(|_| trimmed.replacen(',', ".", 1).parse::<f64>())
        .ok()?;
    (!value.is_nan()).then_some(value)
}
