//! # PXFMSource
//!
//! Common traits and types for PXFM browse-tree providers.
//!
//! This crate provides the foundational abstractions shared by the PXFM
//! surfaces: the node model exposed to media-browsing hosts (car displays,
//! voice assistants) and the `BrowseTreeSource` contract that catalog
//! implementations fulfil.
//!
//! ## Features
//!
//! - **Node model**: browsable folders and playable stations with optional
//!   layout hints (`BrowseNode`, `NodeKind`, `LayoutHint`).
//! - **Browse contract**: `resolve_root` / `list_children` as an async trait,
//!   ready for adapter shims that bridge a host media framework.
//! - **No failure surface**: unknown identifiers degrade to empty child
//!   lists; providers never return errors to a browsing surface.
//! - **Send + Sync**: ready for async hosts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pxfmsource::{BrowseTreeSource, ClientIdentity};
//!
//! let root = source.resolve_root(&ClientIdentity::new("com.example.car", 1000)).await;
//! for child in source.list_children(&root.id).await {
//!     println!("{} ({})", child.title, child.id);
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Kind of a node in the browse hierarchy.
///
/// The tree is exactly three levels deep: one root, a folder level, and the
/// station leaves. No other shapes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The single entry point handed to a connecting surface.
    Root,
    /// A browsable container of stations.
    Folder,
    /// A playable leaf representing one streamable station.
    Station,
}

/// Advisory rendering hint attached to a folder's own node.
///
/// The hosting surface is expected to apply the hint when rendering that
/// folder's children; the core never renders anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutHint {
    List,
    Grid,
}

impl LayoutHint {
    /// Numeric encoding used by media-browse surfaces (`List` = 1, `Grid` = 2).
    ///
    /// Adapter shims put this value into the host's content-style extras;
    /// inside the core the enum form is always used.
    pub fn hint_value(&self) -> u8 {
        match self {
            LayoutHint::List => 1,
            LayoutHint::Grid => 2,
        }
    }
}

/// A point in the browse hierarchy as exposed to remote surfaces.
///
/// Nodes are value objects: the provider synthesizes them fresh on every
/// query from its immutable catalog, so cloning and discarding them is the
/// normal mode of operation.
///
/// # Examples
///
/// ```
/// use pxfmsource::{BrowseNode, LayoutHint};
///
/// let folder = BrowseNode::folder("folder_all_stations", "All Stations", "Listen to all stations")
///     .with_layout_hint(LayoutHint::Grid);
/// assert!(folder.is_browsable());
/// assert!(!folder.is_playable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseNode {
    /// Opaque identifier, unique within the tree and stable across calls.
    pub id: String,

    /// Position of the node in the hierarchy.
    pub kind: NodeKind,

    /// Primary display string.
    pub title: String,

    /// Secondary display string (genre for stations, tagline for folders).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Advisory layout for this node's children, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_hint: Option<LayoutHint>,

    /// Opaque artwork reference. Carried through to surfaces but not
    /// consumed by anything in this repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl BrowseNode {
    /// Create the root node of a browse tree.
    pub fn root(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Root,
            title: title.into(),
            subtitle: None,
            layout_hint: None,
            icon: None,
        }
    }

    /// Create a browsable folder node.
    pub fn folder(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Folder,
            title: title.into(),
            subtitle: Some(subtitle.into()),
            layout_hint: None,
            icon: None,
        }
    }

    /// Create a playable station node.
    pub fn station(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Station,
            title: title.into(),
            subtitle: Some(subtitle.into()),
            layout_hint: None,
            icon: None,
        }
    }

    /// Attach a layout hint for this node's children.
    pub fn with_layout_hint(mut self, hint: LayoutHint) -> Self {
        self.layout_hint = Some(hint);
        self
    }

    /// Attach an artwork reference.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether the node can be browsed into (root or folder).
    pub fn is_browsable(&self) -> bool {
        matches!(self.kind, NodeKind::Root | NodeKind::Folder)
    }

    /// Whether the node is a playable leaf.
    pub fn is_playable(&self) -> bool {
        matches!(self.kind, NodeKind::Station)
    }
}

/// Identity of the surface requesting the browse root.
///
/// Carried for logging only: every caller, trusted or not, receives the same
/// root. No access control is performed anywhere in a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// Package or bundle name reported by the host framework.
    pub package_name: String,
    /// Numeric caller id reported by the host framework.
    pub uid: u32,
}

impl ClientIdentity {
    pub fn new(package_name: impl Into<String>, uid: u32) -> Self {
        Self {
            package_name: package_name.into(),
            uid,
        }
    }
}

impl std::fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (uid {})", self.package_name, self.uid)
    }
}

/// Main trait for browse-tree providers.
///
/// A provider answers hierarchical "list children of node X" queries from an
/// immutable in-memory catalog. Result delivery is asynchronous from the
/// caller's perspective, but implementations are expected to synthesize the
/// whole answer in memory without suspension points.
///
/// # Failure semantics
///
/// A provider never fails. Unknown node identifiers resolve to an empty
/// child sequence rather than an error; the miss is at most logged.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use behind async adapter
/// shims.
#[async_trait::async_trait]
pub trait BrowseTreeSource: Debug + Send + Sync {
    /// Human-readable name of the provider.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(source.name(), "PXFM Stations");
    /// ```
    fn name(&self) -> &str;

    /// Unique identifier of the provider, suitable for logs and registries.
    fn id(&self) -> &str;

    /// Return the fixed root node for the given caller.
    ///
    /// The identity is accepted from any caller and used for logging only.
    /// Whether the returned root carries layout hints is a provider
    /// configuration, not a per-caller decision.
    async fn resolve_root(&self, client: &ClientIdentity) -> BrowseNode;

    /// Return the ordered children of `node_id`.
    ///
    /// Order is significant and must be stable across calls. Unknown ids —
    /// including ids of playable leaves, which have no children — yield an
    /// empty vector.
    async fn list_children(&self, node_id: &str) -> Vec<BrowseNode>;
}

// Re-export for implementors, mirroring the async-trait attribute they need.
pub use async_trait::async_trait;
