//! Test doubles for the catalog seam.
//!
//! ```rust,ignore
//! use watchlist_sources::testing::MockCatalog;
//!
//! let catalog = MockCatalog::new();
//! catalog.add_entry(CatalogEntry::new("tt0133093", "The Matrix", "1999")).await;
//! let found = catalog.search("matrix").await?;
//! ```

mod mock_catalog;
mod stub_http;

pub use mock_catalog::MockCatalog;
pub use stub_http::{serve_once, StubResponse};
