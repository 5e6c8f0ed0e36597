//! Extension pour intégrer le lecteur dans pxfmconfig
//!
//! Ce module fournit le trait `PlayerConfigExt` qui permet d'ajouter des
//! méthodes de gestion du flux audio à pxfmconfig::Config.
//!
//! # Exemple
//!
//! ```no_run
//! use pxfmconfig::get_config;
//! use pxfmplayer::PlayerConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//! let url = config.get_stream_url()?;
//! println!("Streaming {url}");
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use pxfmconfig::Config;
use serde_yaml::Value;

/// URL de flux par défaut
pub const DEFAULT_STREAM_URL: &str = "https://stream.zeno.fm/g4n2811262zuv";

/// Trait d'extension pour gérer le flux du lecteur dans pxfmconfig
///
/// # Auto-persist des valeurs par défaut
///
/// Le getter persiste automatiquement l'URL par défaut dans la
/// configuration si elle n'existe pas encore.
pub trait PlayerConfigExt {
    /// Récupère l'URL du flux audio (default: flux PXFM)
    fn get_stream_url(&self) -> Result<String>;

    /// Définit l'URL du flux audio
    fn set_stream_url(&self, url: &str) -> Result<()>;
}

impl PlayerConfigExt for Config {
    fn get_stream_url(&self) -> Result<String> {
        match self.get_value(&["player", "stream_url"]) {
            Ok(Value::String(url)) => Ok(url),
            _ => {
                self.set_stream_url(DEFAULT_STREAM_URL)?;
                Ok(DEFAULT_STREAM_URL.to_string())
            }
        }
    }

    fn set_stream_url(&self, url: &str) -> Result<()> {
        self.set_value(&["player", "stream_url"], Value::String(url.to_string()))
    }
}
