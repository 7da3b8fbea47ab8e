use clap::Parser;
use color_eyre::Result;
use console::style;
use std::path::PathBuf;

use ifc_supplier_match::config::{default_resource_dir, RunConfig};
use ifc_supplier_match::parser::IfcModel;
use ifc_supplier_match::pipeline::Pipeline;
use ifc_supplier_match::ui::{
    print_filtered_types, prompt_criterion, prompt_model_path, resolve_criterion,
};

#[derive(Parser, Debug)]
#[command(name = "ifc-supplier-match")]
#[command(about = "Match IFC model elements against a supplier catalog")]
#[command(version)]
struct Args {
    /// Path to IFC file (prompted for when omitted)
    file: Option<PathBuf>,

    /// Sort shortcut: P = Price, C = CO2_Emissions, T = Lead Time
    #[arg(short, long, value_name = "P|C|T")]
    sort: Option<String>,

    /// Directory holding omniclass_mapping.txt and company_data.csv
    #[arg(long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Classification mapping file (overrides --resources)
    #[arg(long, value_name = "FILE")]
    mapping: Option<PathBuf>,

    /// Supplier catalog file (overrides --resources)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Directory for the report (defaults to the resource directory)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum number of concurrent element tasks
    #[arg(long, value_name = "N")]
    workers: Option<usize>,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        let resource_dir = self.resources.clone().unwrap_or_else(default_resource_dir);
        let mut config = RunConfig::from_resource_dir(resource_dir);

        if let Some(mapping) = &self.mapping {
            config.mapping_path.clone_from(mapping);
        }
        if let Some(catalog) = &self.catalog {
            config.catalog_path.clone_from(catalog);
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir.clone_from(output_dir);
        }
        match self.workers {
            Some(workers) => config.with_workers(workers),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let args = Args::parse();

    let pipeline = Pipeline::load(args.run_config())?;

    let model_path = match args.file.clone() {
        Some(path) => path,
        None => match prompt_model_path()? {
            Some(path) => path,
            None => {
                println!("{} No file selected. Exiting...", style("✖").red().bold());
                std::process::exit(1);
            }
        },
    };

    let model = IfcModel::open(&model_path)?;
    log::debug!("{} entities in model", model.entity_count());

    let filtered = pipeline.filtered_types(&model);
    print_filtered_types(&pipeline.describe(&filtered));

    let criterion = match &args.sort {
        Some(shortcut) => resolve_criterion(shortcut),
        None => prompt_criterion()?,
    };

    let summary = pipeline.run(&model, &filtered, criterion).await?;

    println!(
        "{} Process complete! Unique objects CSV created ({} rows from {} elements):",
        style("✓").green().bold(),
        summary.rows,
        summary.elements
    );
    println!("  {}", summary.report_path.display());

    Ok(())
}
