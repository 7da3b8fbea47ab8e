pub mod aggregator;
pub mod catalog;
pub mod classifier;
pub mod mapping;
pub mod selector;

pub use aggregator::{aggregate, MatchContext};
pub use catalog::SupplierCatalog;
pub use classifier::{classify, describe_types, filtered_types};
pub use mapping::ClassificationMap;
pub use selector::select;
