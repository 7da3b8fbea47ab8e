//! # IFC Supplier Match
//!
//! Matches the elements of an IFC building model against a supplier catalog
//! and exports one CSV row per distinct object type.
//!
//! ## Pipeline
//!
//! - Map IFC types to OmniClass descriptions (`omniclass_mapping.txt`)
//! - Load supplier offers keyed by description (`company_data.csv`)
//! - Pick the cheapest, lowest-CO2 or fastest supplier per element
//! - Deduplicate by object type with an occurrence count
//! - Export to `ifc_unique_<criterion>.csv`
//!
//! ## Example
//!
//! ```no_run
//! use ifc_supplier_match::config::RunConfig;
//! use ifc_supplier_match::model::SortCriterion;
//! use ifc_supplier_match::parser::IfcModel;
//! use ifc_supplier_match::pipeline::Pipeline;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::load(RunConfig::from_resource_dir("resources"))?;
//! let model = IfcModel::open("model.ifc")?;
//! let filtered = pipeline.filtered_types(&model);
//! let summary = pipeline.run(&model, &filtered, SortCriterion::Price).await?;
//! println!("Report: {}", summary.report_path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod matching;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod ui;
