//! Playback toggle controller for PXFM
//!
//! This crate drives one fixed radio stream through a host audio backend
//! with a single toggle control, the way the wearable remote does.
//!
//! # Features
//!
//! - **Five-State Machine**: idle, buffering, playing, paused and error,
//!   serialized behind one mutex
//! - **Backend Seam**: the host player is reached only through the
//!   `AudioBackend` / `AudioBackendFactory` traits, one instance per
//!   playback attempt
//! - **Stale-Completion Guard**: a generation token makes completions of
//!   replaced or released instances harmless
//! - **Display Updates**: one `DisplayUpdate` per transition on a
//!   crossbeam bus, labels ready to render
//! - **Configuration Extension**: persist the stream URL via `pxfmconfig`
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pxfmplayer::{
//!     AudioAttributes, AudioBackend, AudioBackendFactory, BackendCallbacks, BackendError,
//!     PlaybackController, PlayerStatus,
//! };
//!
//! struct NullBackend;
//!
//! impl AudioBackend for NullBackend {
//!     fn set_source(&self, _url: &str) -> Result<(), BackendError> {
//!         Ok(())
//!     }
//!     fn prepare_async(&self) -> Result<(), BackendError> {
//!         Ok(())
//!     }
//!     fn start(&self) -> Result<(), BackendError> {
//!         Ok(())
//!     }
//!     fn pause(&self) -> Result<(), BackendError> {
//!         Ok(())
//!     }
//!     fn release(&self) {}
//! }
//!
//! struct NullFactory;
//!
//! impl AudioBackendFactory for NullFactory {
//!     fn create(
//!         &self,
//!         _attributes: &AudioAttributes,
//!         _callbacks: BackendCallbacks,
//!     ) -> Result<Arc<dyn AudioBackend>, BackendError> {
//!         Ok(Arc::new(NullBackend))
//!     }
//! }
//!
//! let controller =
//!     PlaybackController::new(Arc::new(NullFactory), "https://stream.zeno.fm/g4n2811262zuv");
//! let updates = controller.subscribe();
//!
//! controller.toggle();
//! assert_eq!(controller.status(), PlayerStatus::Buffering);
//! assert_eq!(updates.recv().unwrap().status_label, "Buffering...");
//!
//! controller.teardown();
//! assert_eq!(controller.status(), PlayerStatus::Idle);
//! ```
//!
//! # Configuration Extension
//!
//! When the `pxfmconfig` feature is enabled, the stream URL can be read
//! from and persisted to the PXFM configuration:
//!
//! ```no_run
//! use pxfmconfig::get_config;
//! use pxfmplayer::PlayerConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let url = get_config().get_stream_url()?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod controller;
pub mod events;

#[cfg(feature = "pxfmconfig")]
pub mod config_ext;

// Re-exports
pub use backend::{
    AudioAttributes, AudioBackend, AudioBackendFactory, BackendError, ContentType, StreamKind,
    StreamUsage,
};
pub use controller::{
    BackendCallbacks, DisplayUpdate, PlaybackController, PlayerStatus, STATUS_BUFFERING,
    STATUS_ERROR_LOADING, STATUS_ERROR_PLAYING, STATUS_PAUSED, STATUS_PLAYING, STATUS_READY,
    TOGGLE_PLAY, TOGGLE_STOP,
};
pub use events::DisplayEventBus;

#[cfg(feature = "pxfmconfig")]
pub use config_ext::{DEFAULT_STREAM_URL, PlayerConfigExt};
