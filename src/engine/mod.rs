pub mod descriptor;
pub mod executor;

pub use descriptor::{Action, Descriptor, ResourceKind};
pub use executor::{execute, Exchange};
