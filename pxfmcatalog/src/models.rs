//! Data models for the built-in station table
//!
//! This module contains the structures the embedded `stations.yaml`
//! document deserializes into.

use pxfmsource::BrowseNode;
use serde::{Deserialize, Serialize};

/// One streamable radio station from the built-in table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    /// Unique identifier within the catalog (e.g., "1")
    pub id: String,
    /// Human-readable name (e.g., "Kral FM")
    pub name: String,
    /// Genre shown as the station's subtitle (e.g., "Arabesk")
    pub genre: String,
    /// Artwork URL, carried through to surfaces but not fetched here
    pub icon_url: String,
}

impl Station {
    /// Create a new station record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        genre: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            genre: genre.into(),
            icon_url: icon_url.into(),
        }
    }

    /// Convert the record into the playable node handed to browsing surfaces
    pub fn to_browse_node(&self) -> BrowseNode {
        BrowseNode::station(&self.id, &self.name, &self.genre).with_icon(&self.icon_url)
    }
}
