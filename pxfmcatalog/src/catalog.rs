//! The immutable station catalog
//!
//! The catalog is a fixed table parsed once from an embedded YAML document
//! and validated at load time. Browse queries synthesize fresh nodes from it
//! on every call; nothing is created, mutated, or destroyed at runtime.

use crate::error::{Error, Result};
use crate::models::Station;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Identifier of the single root node handed to connecting surfaces
pub const ROOT_ID: &str = "media_root_id";

/// Identifier of the "All Stations" folder
pub const FOLDER_ALL_STATIONS: &str = "folder_all_stations";

/// Identifier of the "Favorites" folder
pub const FOLDER_FAVORITES: &str = "folder_favorites";

/// Title of the root node
pub const ROOT_TITLE: &str = "PXFM";

// Table de stations intégrée au binaire
const BUILTIN_STATIONS: &str = include_str!("stations.yaml");

lazy_static! {
    static ref CATALOG: Arc<Catalog> = Arc::new(
        Catalog::from_yaml(BUILTIN_STATIONS).expect("Failed to parse built-in station table")
    );
}

/// Document shape of `stations.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    stations: Vec<Station>,
    #[serde(default)]
    favorites: Vec<String>,
}

/// Immutable station table: ordered stations plus a favorites id list
///
/// A `Catalog` is validated on construction and never changes afterwards.
/// Station order is the order of the underlying table and is preserved by
/// every accessor.
#[derive(Debug, Clone)]
pub struct Catalog {
    stations: Vec<Station>,
    favorites: Vec<String>,
}

impl Catalog {
    /// Parse and validate a catalog from a YAML document
    ///
    /// # Example
    ///
    /// ```
    /// use pxfmcatalog::Catalog;
    ///
    /// let catalog = Catalog::from_yaml(
    ///     "stations:\n  - {id: \"1\", name: \"Kral FM\", genre: \"Arabesk\", icon_url: \"\"}\n",
    /// )?;
    /// assert_eq!(catalog.station_count(), 1);
    /// # Ok::<(), pxfmcatalog::Error>(())
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_yaml::from_str(yaml)?;
        Self::from_parts(doc.stations, doc.favorites)
    }

    /// Build and validate a catalog from its parts
    ///
    /// Validation rules: at least one station, station ids unique, every
    /// favorite referencing an existing station.
    pub fn from_parts(stations: Vec<Station>, favorites: Vec<String>) -> Result<Self> {
        if stations.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station.id.as_str()) {
                return Err(Error::DuplicateStation(station.id.clone()));
            }
        }

        for favorite in &favorites {
            if !seen.contains(favorite.as_str()) {
                return Err(Error::UnknownFavorite(favorite.clone()));
            }
        }

        Ok(Self { stations, favorites })
    }

    /// All stations, in table order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The stations marked as favorites, in favorites order
    pub fn favorites(&self) -> Vec<&Station> {
        self.favorites
            .iter()
            .filter_map(|id| self.station(id))
            .collect()
    }

    /// Look up a station by id
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Number of stations in the table
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

/// Returns the built-in catalog instance
///
/// The embedded station table is parsed and validated on first access.
///
/// # Panics
///
/// Panics if the embedded table fails validation, which is a build defect
/// rather than a runtime condition.
///
/// # Examples
///
/// ```
/// let catalog = pxfmcatalog::get_catalog();
/// assert_eq!(catalog.station_count(), 6);
/// ```
pub fn get_catalog() -> Arc<Catalog> {
    CATALOG.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = get_catalog();

        assert_eq!(catalog.station_count(), 6);

        let stations = catalog.stations();
        assert_eq!(stations[0].id, "1");
        assert_eq!(stations[0].name, "Kral FM");
        assert_eq!(stations[0].genre, "Arabesk");
        assert_eq!(stations[5].id, "6");
        assert_eq!(stations[5].name, "Number 1");
        assert_eq!(stations[5].genre, "Hit");

        let ids: Vec<&str> = stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_builtin_favorites() {
        let catalog = get_catalog();
        let favorites = catalog.favorites();

        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "1");
        assert_eq!(favorites[0].name, "Kral FM");
    }

    #[test]
    fn test_station_lookup() {
        let catalog = get_catalog();

        assert!(catalog.station("3").is_some());
        assert_eq!(catalog.station("3").unwrap().name, "Joy FM");
        assert!(catalog.station("99").is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::from_parts(vec![], vec![]);
        assert!(matches!(result, Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_duplicate_station_rejected() {
        let stations = vec![
            Station::new("1", "A", "Pop", ""),
            Station::new("1", "B", "Rock", ""),
        ];
        let result = Catalog::from_parts(stations, vec![]);
        assert!(matches!(result, Err(Error::DuplicateStation(id)) if id == "1"));
    }

    #[test]
    fn test_dangling_favorite_rejected() {
        let stations = vec![Station::new("1", "A", "Pop", "")];
        let result = Catalog::from_parts(stations, vec!["7".to_string()]);
        assert!(matches!(result, Err(Error::UnknownFavorite(id)) if id == "7"));
    }

    #[test]
    fn test_from_yaml_roundtrip() {
        let yaml = r#"
stations:
  - id: "a"
    name: "Alpha"
    genre: "Jazz"
    icon_url: "https://example.com/a.jpg"
favorites:
  - "a"
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.station_count(), 1);
        assert_eq!(catalog.favorites()[0].name, "Alpha");
    }
}
