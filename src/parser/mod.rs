pub mod ifc;
pub mod step;

pub use crate::error::ParseError;
pub use ifc::IfcModel;
pub use step::{StepEntity, StepFile, StepValue};
