use super::{classifier, selector, ClassificationMap, SupplierCatalog};
use crate::error::MatchError;
use crate::model::{ElementRecord, ModelElement, ReportRow, SortCriterion};
use crate::parser::IfcModel;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only inputs shared by every worker task.
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub map: Arc<ClassificationMap>,
    pub catalog: Arc<SupplierCatalog>,
    pub criterion: SortCriterion,
}

impl MatchContext {
    #[must_use]
    pub fn new(map: ClassificationMap, catalog: SupplierCatalog, criterion: SortCriterion) -> Self {
        Self {
            map: Arc::new(map),
            catalog: Arc::new(catalog),
            criterion,
        }
    }

    /// Classifies one element and picks its supplier.
    pub fn build_record(&self, element: &ModelElement) -> Result<ElementRecord, MatchError> {
        let classification = classifier::classify(&element.type_code, &self.map);
        let offer = selector::select(classification, &self.catalog, self.criterion)?;
        log::debug!(
            "{} {} -> {classification}: {}",
            element.type_code,
            element.label(),
            offer.company
        );

        Ok(ElementRecord {
            classification: classification.to_string(),
            sub_type: element.sub_type().to_string(),
            name: element.name_or_unknown().to_string(),
            offer,
        })
    }
}

/// Builds records for one batch of elements on at most `workers` blocking tasks.
///
/// Results come back in input order. The first failing element aborts the
/// batch.
pub async fn collect_records(
    ctx: &MatchContext,
    elements: Vec<ModelElement>,
    workers: usize,
) -> Result<Vec<ElementRecord>, MatchError> {
    stream::iter(elements)
        .map(|element| {
            let ctx = ctx.clone();
            tokio::task::spawn_blocking(move || ctx.build_record(&element))
        })
        .buffered(workers.max(1))
        .map(|joined| -> Result<ElementRecord, MatchError> { joined? })
        .try_collect()
        .await
}

/// Runs every element group through [`collect_records`] and deduplicates the
/// combined result by sub type.
pub async fn aggregate_groups<I>(
    groups: I,
    ctx: &MatchContext,
    workers: usize,
) -> Result<Vec<ReportRow>, MatchError>
where
    I: IntoIterator<Item = Vec<ModelElement>>,
{
    let mut records = Vec::new();
    for elements in groups {
        records.extend(collect_records(ctx, elements, workers).await?);
    }

    let total = records.len();
    let rows = dedupe_by_sub_type(records);
    log::info!("{total} elements matched, {} distinct object types", rows.len());
    Ok(rows)
}

/// Aggregates the elements of every filtered type in `model`.
///
/// Types are processed in the order given, elements in file order, so the
/// representative row for a sub type is always the first such element.
pub async fn aggregate(
    model: &IfcModel,
    filtered_types: &[String],
    ctx: &MatchContext,
    workers: usize,
) -> Result<Vec<ReportRow>, MatchError> {
    let groups = filtered_types.iter().map(|type_code| {
        let elements = model.elements_by_type(type_code);
        log::debug!("{type_code}: {} elements", elements.len());
        elements
    });

    aggregate_groups(groups, ctx, workers).await
}

/// Keeps the first record of each sub type, annotated with how many records
/// share that sub type across the whole input.
#[must_use]
pub fn dedupe_by_sub_type(records: Vec<ElementRecord>) -> Vec<ReportRow> {
    let mut kept: Vec<(ElementRecord, usize)> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for record in records {
        if let Some(&idx) = position.get(&record.sub_type) {
            kept[idx].1 += 1;
        } else {
            position.insert(record.sub_type.clone(), kept.len());
            kept.push((record, 1));
        }
    }

    kept.into_iter()
        .map(|(record, count)| ReportRow::from_record(record, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SupplierOffer, SupplierRow};
    use pretty_assertions::assert_eq;

    fn offer(company: &str, price: &str) -> SupplierOffer {
        SupplierOffer {
            company: company.to_string(),
            product: "Panel".to_string(),
            product_code: "PX-1".to_string(),
            price: price.to_string(),
            co2: "10".to_string(),
            lead_time: "5".to_string(),
        }
    }

    fn context() -> MatchContext {
        let map = [("IfcWall", "23-10 Walls"), ("IfcDoor", "23-17 Doors")]
            .into_iter()
            .collect();
        let catalog = SupplierCatalog::from(vec![
            SupplierRow {
                classification: "23-10 Walls".to_string(),
                offer: offer("Acme", "100"),
            },
            SupplierRow {
                classification: "23-10 Walls".to_string(),
                offer: offer("Brick Co", "80"),
            },
        ]);
        MatchContext::new(map, catalog, SortCriterion::Price)
    }

    fn record(sub_type: &str, name: &str) -> ElementRecord {
        ElementRecord {
            classification: "23-10 Walls".to_string(),
            sub_type: sub_type.to_string(),
            name: name.to_string(),
            offer: offer("Acme", "1"),
        }
    }

    #[test]
    fn build_record_resolves_defaults() {
        let record = context()
            .build_record(&ModelElement::new(5, "IfcWall"))
            .unwrap();
        assert_eq!(record.classification, "23-10 Walls");
        assert_eq!(record.sub_type, "Unknown");
        assert_eq!(record.name, "Unknown");
        assert_eq!(record.offer.company, "Brick Co");
    }

    #[test]
    fn build_record_uses_placeholder_without_supplier() {
        let element = ModelElement::new(6, "IfcDoor").with_name("D-1");
        let record = context().build_record(&element).unwrap();
        assert_eq!(record.classification, "23-17 Doors");
        assert_eq!(record.offer, SupplierOffer::no_supplier());
    }

    #[test]
    fn dedupe_keeps_first_and_counts_all() {
        let rows = dedupe_by_sub_type(vec![
            record("Basic Wall", "W1"),
            record("Curtain Wall", "W2"),
            record("Basic Wall", "W3"),
            record("Basic Wall", "W4"),
        ]);
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.sub_type.as_str(), r.name.as_str(), r.count))
            .collect();
        assert_eq!(
            summary,
            vec![("Basic Wall", "W1", 3), ("Curtain Wall", "W2", 1)]
        );
    }

    #[test]
    fn dedupe_of_nothing_is_empty() {
        assert!(dedupe_by_sub_type(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn collect_records_preserves_input_order() {
        let elements: Vec<_> = (0..50)
            .map(|i| {
                ModelElement::new(i, "IfcWall")
                    .with_name(format!("W{i}"))
                    .with_object_type(format!("T{}", i % 7))
            })
            .collect();
        let records = collect_records(&context(), elements, 4).await.unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.clone()).collect();
        let expected: Vec<_> = (0..50).map(|i| format!("W{i}")).collect();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn counts_are_global_across_types() {
        let walls = vec![
            ModelElement::new(1, "IfcWall").with_object_type("Generic"),
            ModelElement::new(2, "IfcWall").with_object_type("Basic Wall"),
        ];
        let doors = vec![
            ModelElement::new(3, "IfcDoor").with_object_type("Generic"),
            ModelElement::new(4, "IfcDoor"),
        ];
        let rows = aggregate_groups(vec![walls, doors], &context(), 2)
            .await
            .unwrap();

        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.classification.as_str(), r.sub_type.as_str(), r.count))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("23-10 Walls", "Generic", 2),
                ("23-10 Walls", "Basic Wall", 1),
                ("23-17 Doors", "Unknown", 1),
            ]
        );
    }

    #[tokio::test]
    async fn data_error_aborts_the_run() {
        let map = [("IfcWall", "23-10 Walls")].into_iter().collect();
        let catalog = SupplierCatalog::from(vec![SupplierRow {
            classification: "23-10 Walls".to_string(),
            offer: offer("Acme", "ask"),
        }]);
        let ctx = MatchContext::new(map, catalog, SortCriterion::Price);
        let elements = vec![ModelElement::new(1, "IfcWall")];

        let err = aggregate_groups(vec![elements], &ctx, 1).await.unwrap_err();
        assert!(matches!(err, MatchError::DataType { .. }));
    }
}
