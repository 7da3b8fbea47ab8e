//! End-to-end matching run: resources, model, aggregation, report.

use crate::config::RunConfig;
use crate::error::{PipelineError, ResourceError};
use crate::export::{export_csv, report_path};
use crate::matching::{
    aggregate, describe_types, filtered_types, ClassificationMap, MatchContext, SupplierCatalog,
};
use crate::model::SortCriterion;
use crate::parser::IfcModel;
use std::path::PathBuf;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report_path: PathBuf,
    /// Rows written, one per distinct object type.
    pub rows: usize,
    /// Elements matched before deduplication.
    pub elements: usize,
}

/// Reference data loaded once per run.
#[derive(Debug)]
pub struct Pipeline {
    config: RunConfig,
    map: ClassificationMap,
    catalog: SupplierCatalog,
}

impl Pipeline {
    /// Loads the classification mapping and the supplier catalog.
    ///
    /// # Errors
    ///
    /// Fails with [`ResourceError::Config`] when the mapping cannot be read and
    /// with [`ResourceError::Schema`] when the catalog lacks required columns.
    pub fn load(config: RunConfig) -> Result<Self, ResourceError> {
        let map = ClassificationMap::load(&config.mapping_path)?;
        let catalog = SupplierCatalog::load(&config.catalog_path)?;
        log::info!("{} classifications, {} supplier rows", map.len(), catalog.len());
        Ok(Self::new(config, map, catalog))
    }

    #[must_use]
    pub fn new(config: RunConfig, map: ClassificationMap, catalog: SupplierCatalog) -> Self {
        Self {
            config,
            map,
            catalog,
        }
    }

    /// Mapped type codes present in the model, sorted.
    #[must_use]
    pub fn filtered_types(&self, model: &IfcModel) -> Vec<String> {
        filtered_types(&model.entity_types(), &self.map)
    }

    /// Operator listing for `filtered`, see [`describe_types`].
    #[must_use]
    pub fn describe(&self, filtered: &[String]) -> Vec<String> {
        describe_types(filtered, &self.map)
    }

    /// Matches every filtered element and writes the report.
    ///
    /// Nothing is written unless all elements were matched.
    pub async fn run(
        self,
        model: &IfcModel,
        filtered: &[String],
        criterion: SortCriterion,
    ) -> Result<RunSummary, PipelineError> {
        let Self {
            config,
            map,
            catalog,
        } = self;

        let ctx = MatchContext::new(map, catalog, criterion);
        let rows = aggregate(model, filtered, &ctx, config.workers).await?;

        let path = report_path(&config.output_dir, criterion);
        export_csv(&rows, &path)?;
        log::info!("wrote {} rows to {}", rows.len(), path.display());

        Ok(RunSummary {
            report_path: path,
            rows: rows.len(),
            elements: rows.iter().map(|r| r.count).sum(),
        })
    }
}
