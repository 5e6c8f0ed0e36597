//! BrowseTreeSource implementation backed by the built-in catalog
//!
//! This module implements the `BrowseTreeSource` trait from `pxfmsource`
//! over the fixed station table, synthesizing the three-level tree served
//! to media-browsing surfaces (root, folders, stations).

use crate::catalog::{
    Catalog, FOLDER_ALL_STATIONS, FOLDER_FAVORITES, get_catalog, ROOT_ID, ROOT_TITLE,
};
use pxfmsource::{async_trait, BrowseNode, BrowseTreeSource, ClientIdentity, LayoutHint};
use std::sync::Arc;
use tracing::debug;

/// Presentation policy for the served tree
///
/// Browsing hosts were observed in two variants: one attaches rendering
/// hints to the root and serves folder children, the other returns bare
/// nodes and empty folders. Both are expressed here as configuration
/// instead of separate code paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowsePolicy {
    /// Attach a List hint to the root node handed to surfaces
    pub attach_root_hints: bool,

    /// Hint carried by the "All Stations" folder node
    pub all_stations_hint: Option<LayoutHint>,

    /// Hint carried by the "Favorites" folder node
    pub favorites_hint: Option<LayoutHint>,

    /// Serve folder children; when false, every non-root id resolves empty
    pub serve_folder_children: bool,
}

impl Default for BrowsePolicy {
    fn default() -> Self {
        Self {
            attach_root_hints: true,
            all_stations_hint: Some(LayoutHint::Grid),
            favorites_hint: None,
            serve_folder_children: true,
        }
    }
}

/// Browse-tree provider backed by the built-in station catalog
///
/// The tree is exactly three levels deep:
///
/// ```text
/// media_root_id
/// ├── folder_favorites      (Favorites)
/// └── folder_all_stations   (All Stations)
///     ├── 1  Kral FM
///     ├── ...
///     └── 6  Number 1
/// ```
///
/// Every query is answered from memory; unknown ids resolve to an empty
/// child list rather than an error.
///
/// # Example
///
/// ```
/// use pxfmcatalog::StaticCatalogSource;
/// use pxfmsource::{BrowseTreeSource, ClientIdentity};
///
/// # tokio_test::block_on(async {
/// let source = StaticCatalogSource::new();
/// let root = source.resolve_root(&ClientIdentity::new("com.example.car", 1000)).await;
/// let folders = source.list_children(&root.id).await;
/// assert_eq!(folders.len(), 2);
/// # });
/// ```
#[derive(Debug)]
pub struct StaticCatalogSource {
    catalog: Arc<Catalog>,
    policy: BrowsePolicy,
}

impl StaticCatalogSource {
    /// Create a provider over the built-in catalog with the default policy
    pub fn new() -> Self {
        Self::with_policy(BrowsePolicy::default())
    }

    /// Create a provider over the built-in catalog with an explicit policy
    pub fn with_policy(policy: BrowsePolicy) -> Self {
        Self::with_catalog(get_catalog(), policy)
    }

    /// Create a provider over an explicit catalog
    pub fn with_catalog(catalog: Arc<Catalog>, policy: BrowsePolicy) -> Self {
        Self { catalog, policy }
    }

    /// The active presentation policy
    pub fn policy(&self) -> &BrowsePolicy {
        &self.policy
    }

    /// The backing catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // L'ordre Favorites puis All Stations fait partie du contrat
    fn folder_nodes(&self) -> Vec<BrowseNode> {
        let mut favorites =
            BrowseNode::folder(FOLDER_FAVORITES, "Favorites", "Your favorite stations");
        if let Some(hint) = self.policy.favorites_hint {
            favorites = favorites.with_layout_hint(hint);
        }

        let mut all_stations =
            BrowseNode::folder(FOLDER_ALL_STATIONS, "All Stations", "Listen to all stations");
        if let Some(hint) = self.policy.all_stations_hint {
            all_stations = all_stations.with_layout_hint(hint);
        }

        vec![favorites, all_stations]
    }
}

impl Default for StaticCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrowseTreeSource for StaticCatalogSource {
    fn name(&self) -> &str {
        "PXFM Stations"
    }

    fn id(&self) -> &str {
        "pxfm"
    }

    async fn resolve_root(&self, client: &ClientIdentity) -> BrowseNode {
        debug!(client = %client, "Resolving browse root");

        let root = BrowseNode::root(ROOT_ID, ROOT_TITLE);
        if self.policy.attach_root_hints {
            root.with_layout_hint(LayoutHint::List)
        } else {
            root
        }
    }

    async fn list_children(&self, node_id: &str) -> Vec<BrowseNode> {
        match node_id {
            ROOT_ID => {
                let folders = self.folder_nodes();
                debug!(node_id, children = folders.len(), "Listing root folders");
                folders
            }
            FOLDER_ALL_STATIONS | FOLDER_FAVORITES if !self.policy.serve_folder_children => {
                debug!(node_id, "Folder children disabled by policy");
                vec![]
            }
            FOLDER_ALL_STATIONS => {
                let stations: Vec<BrowseNode> = self
                    .catalog
                    .stations()
                    .iter()
                    .map(|s| s.to_browse_node())
                    .collect();
                debug!(node_id, children = stations.len(), "Listing all stations");
                stations
            }
            FOLDER_FAVORITES => {
                let favorites: Vec<BrowseNode> = self
                    .catalog
                    .favorites()
                    .iter()
                    .map(|s| s.to_browse_node())
                    .collect();
                debug!(node_id, children = favorites.len(), "Listing favorites");
                favorites
            }
            other => {
                debug!(node_id = other, "Browse miss, returning empty children");
                vec![]
            }
        }
    }
}
