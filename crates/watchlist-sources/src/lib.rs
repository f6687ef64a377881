pub mod error;
pub mod factory;
pub mod omdb;
pub mod testing;
pub mod traits;

pub use error::CatalogError;
pub use factory::create_catalog_source;
pub use omdb::{OmdbClient, OmdbConfig};
pub use traits::{CatalogSearch, CatalogSource};
