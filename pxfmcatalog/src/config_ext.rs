//! Extension pour intégrer le catalogue dans pxfmconfig
//!
//! Ce module fournit le trait `CatalogConfigExt` qui permet d'ajouter
//! des méthodes de gestion de la politique de présentation à
//! pxfmconfig::Config.
//!
//! # Fonctionnalités
//!
//! - Activation des hints de rendu sur le nœud racine
//! - Hints par dossier (All Stations / Favorites)
//! - Variante dégénérée sans enfants de dossier
//!
//! # Exemple
//!
//! ```no_run
//! use pxfmcatalog::{CatalogConfigExt, StaticCatalogSource};
//! use pxfmconfig::get_config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//! let policy = config.get_browse_policy()?;
//! let source = StaticCatalogSource::with_policy(policy);
//! # Ok(())
//! # }
//! ```

use crate::source::BrowsePolicy;
use anyhow::Result;
use pxfmconfig::Config;
use pxfmsource::LayoutHint;
use serde_yaml::Value;

/// Default for attaching a List hint to the root node
pub const DEFAULT_ATTACH_ROOT_HINTS: bool = true;

/// Default for serving folder children
pub const DEFAULT_SERVE_FOLDER_CHILDREN: bool = true;

/// Default hint on the "All Stations" folder
pub const DEFAULT_ALL_STATIONS_HINT: Option<LayoutHint> = Some(LayoutHint::Grid);

/// Default hint on the "Favorites" folder
pub const DEFAULT_FAVORITES_HINT: Option<LayoutHint> = None;

/// Trait d'extension pour gérer la politique de présentation dans pxfmconfig
///
/// Ce trait étend `pxfmconfig::Config` avec des méthodes spécifiques à la
/// présentation de l'arbre de navigation.
///
/// # Auto-persist des valeurs par défaut
///
/// Les getters persistent automatiquement les valeurs par défaut dans la
/// configuration si elles n'existent pas encore.
pub trait CatalogConfigExt {
    /// Vérifie si le nœud racine porte un hint de rendu
    fn get_browse_attach_root_hints(&self) -> Result<bool>;

    /// Active ou désactive le hint de rendu sur la racine
    fn set_browse_attach_root_hints(&self, attach: bool) -> Result<()>;

    /// Vérifie si les enfants de dossier sont servis
    ///
    /// # Returns
    ///
    /// `true` (default) pour la variante complète, `false` pour la variante
    /// dégénérée où chaque id non racine résout en liste vide.
    fn get_browse_serve_folder_children(&self) -> Result<bool>;

    /// Active ou désactive les enfants de dossier
    fn set_browse_serve_folder_children(&self, serve: bool) -> Result<()>;

    /// Récupère le hint du dossier "All Stations" (default: grid)
    fn get_browse_all_stations_hint(&self) -> Result<Option<LayoutHint>>;

    /// Définit le hint du dossier "All Stations"
    fn set_browse_all_stations_hint(&self, hint: Option<LayoutHint>) -> Result<()>;

    /// Récupère le hint du dossier "Favorites" (default: aucun)
    fn get_browse_favorites_hint(&self) -> Result<Option<LayoutHint>>;

    /// Définit le hint du dossier "Favorites"
    fn set_browse_favorites_hint(&self, hint: Option<LayoutHint>) -> Result<()>;

    /// Assemble la politique de présentation complète
    fn get_browse_policy(&self) -> Result<BrowsePolicy>;

    /// Persiste une politique de présentation complète
    fn set_browse_policy(&self, policy: &BrowsePolicy) -> Result<()>;
}

fn hint_to_value(hint: Option<LayoutHint>) -> Result<Value> {
    Ok(serde_yaml::to_value(hint)?)
}

impl CatalogConfigExt for Config {
    fn get_browse_attach_root_hints(&self) -> Result<bool> {
        match self.get_value(&["browse", "attach_root_hints"]) {
            Ok(Value::Bool(b)) => Ok(b),
            _ => {
                self.set_browse_attach_root_hints(DEFAULT_ATTACH_ROOT_HINTS)?;
                Ok(DEFAULT_ATTACH_ROOT_HINTS)
            }
        }
    }

    fn set_browse_attach_root_hints(&self, attach: bool) -> Result<()> {
        self.set_value(&["browse", "attach_root_hints"], Value::Bool(attach))
    }

    fn get_browse_serve_folder_children(&self) -> Result<bool> {
        match self.get_value(&["browse", "serve_folder_children"]) {
            Ok(Value::Bool(b)) => Ok(b),
            _ => {
                self.set_browse_serve_folder_children(DEFAULT_SERVE_FOLDER_CHILDREN)?;
                Ok(DEFAULT_SERVE_FOLDER_CHILDREN)
            }
        }
    }

    fn set_browse_serve_folder_children(&self, serve: bool) -> Result<()> {
        self.set_value(&["browse", "serve_folder_children"], Value::Bool(serve))
    }

    fn get_browse_all_stations_hint(&self) -> Result<Option<LayoutHint>> {
        match self.get_value(&["browse", "hints", "all_stations"]) {
            Ok(value) => match serde_yaml::from_value(value) {
                Ok(hint) => Ok(hint),
                // Valeur invalide, on retombe sur le défaut
                Err(_) => Ok(DEFAULT_ALL_STATIONS_HINT),
            },
            Err(_) => {
                self.set_browse_all_stations_hint(DEFAULT_ALL_STATIONS_HINT)?;
                Ok(DEFAULT_ALL_STATIONS_HINT)
            }
        }
    }

    fn set_browse_all_stations_hint(&self, hint: Option<LayoutHint>) -> Result<()> {
        self.set_value(&["browse", "hints", "all_stations"], hint_to_value(hint)?)
    }

    fn get_browse_favorites_hint(&self) -> Result<Option<LayoutHint>> {
        match self.get_value(&["browse", "hints", "favorites"]) {
            Ok(value) => match serde_yaml::from_value(value) {
                Ok(hint) => Ok(hint),
                Err(_) => Ok(DEFAULT_FAVORITES_HINT),
            },
            Err(_) => {
                self.set_browse_favorites_hint(DEFAULT_FAVORITES_HINT)?;
                Ok(DEFAULT_FAVORITES_HINT)
            }
        }
    }

    fn set_browse_favorites_hint(&self, hint: Option<LayoutHint>) -> Result<()> {
        self.set_value(&["browse", "hints", "favorites"], hint_to_value(hint)?)
    }

    fn get_browse_policy(&self) -> Result<BrowsePolicy> {
        Ok(BrowsePolicy {
            attach_root_hints: self.get_browse_attach_root_hints()?,
            all_stations_hint: self.get_browse_all_stations_hint()?,
            favorites_hint: self.get_browse_favorites_hint()?,
            serve_folder_children: self.get_browse_serve_folder_children()?,
        })
    }

    fn set_browse_policy(&self, policy: &BrowsePolicy) -> Result<()> {
        self.set_browse_attach_root_hints(policy.attach_root_hints)?;
        self.set_browse_all_stations_hint(policy.all_stations_hint)?;
        self.set_browse_favorites_hint(policy.favorites_hint)?;
        self.set_browse_serve_folder_children(policy.serve_folder_children)
    }
}
