//! Built-in station catalog for PXFM
//!
//! This crate provides the fixed station catalog served to media-browsing
//! surfaces, and the `BrowseTreeSource` implementation over it.
//!
//! # Features
//!
//! - **Embedded Catalog**: 6 stations and a favorites list, parsed once
//!   from an embedded YAML table and validated at load time
//! - **Three-Level Tree**: root → {Favorites, All Stations} → stations,
//!   fully static, synthesized fresh on every query
//! - **Presentation Policy**: layout hints and the degenerate no-children
//!   variant expressed as configuration (`BrowsePolicy`)
//! - **No Failure Surface**: unknown node ids resolve to empty child lists,
//!   never errors
//! - **Configuration Extension**: persist the presentation policy via
//!   `pxfmconfig`
//!
//! # Example
//!
//! ```
//! use pxfmcatalog::StaticCatalogSource;
//! use pxfmsource::{BrowseTreeSource, ClientIdentity};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let source = StaticCatalogSource::new();
//!
//!     let root = source
//!         .resolve_root(&ClientIdentity::new("com.example.car", 1000))
//!         .await;
//!
//!     for folder in source.list_children(&root.id).await {
//!         let stations = source.list_children(&folder.id).await;
//!         println!("{}: {} stations", folder.title, stations.len());
//!     }
//! }
//! ```
//!
//! # Configuration Extension
//!
//! When the `pxfmconfig` feature is enabled, this crate provides a
//! configuration extension trait for the presentation policy:
//!
//! ```no_run
//! use pxfmcatalog::{CatalogConfigExt, StaticCatalogSource};
//! use pxfmconfig::get_config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//! let source = StaticCatalogSource::with_policy(config.get_browse_policy()?);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod models;
pub mod source;

#[cfg(feature = "pxfmconfig")]
pub mod config_ext;

// Re-exports
pub use catalog::{
    Catalog, FOLDER_ALL_STATIONS, FOLDER_FAVORITES, get_catalog, ROOT_ID, ROOT_TITLE,
};
pub use error::{Error, Result};
pub use models::Station;
pub use source::{BrowsePolicy, StaticCatalogSource};

#[cfg(feature = "pxfmconfig")]
pub use config_ext::CatalogConfigExt;
