pub mod filter;
pub mod project;
pub mod seed;
pub mod store;

pub use filter::filter;
pub use project::{CodeSnippet, Project};
pub use store::{Catalog, CatalogError};
