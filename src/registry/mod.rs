//! Agent catalog: loading, file access, and queries.

pub mod definition;
pub mod query;
pub mod store;

pub use definition::{Agent, Category};
pub use query::Catalog;
pub use store::Registry;
