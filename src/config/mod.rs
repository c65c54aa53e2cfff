pub mod models;

pub use models::{Options, ServerEndpoint};
