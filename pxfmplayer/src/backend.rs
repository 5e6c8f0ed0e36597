//! Host audio-backend contracts
//!
//! The playback controller drives one stream through this narrow surface.
//! Platform shims (a system media-player wrapper, a desktop pipeline, a
//! scripted test double) implement [`AudioBackend`] and
//! [`AudioBackendFactory`]; preparation outcomes travel back through the
//! [`BackendCallbacks`](crate::controller::BackendCallbacks) handle issued
//! at creation, possibly from a different thread.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::controller::BackendCallbacks;

/// Errors surfaced by host audio backends
///
/// The controller never propagates these to its callers; every failure
/// collapses into the `Error` state and its display labels.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend rejected the stream source
    #[error("Source rejected: {0}")]
    SourceRejected(String),

    /// The backend or its factory is not available
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// An operation was issued in a state the backend cannot serve
    #[error("Illegal backend state: {0}")]
    IllegalState(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Content classification carried to the host audio stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Unknown,
    Speech,
    Music,
    Movie,
}

/// Intended output routing carried to the host audio stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamUsage {
    #[default]
    Unknown,
    Media,
    Alarm,
}

/// Audio-usage metadata handed to the backend factory at creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAttributes {
    pub content_type: ContentType,
    pub usage: StreamUsage,
}

impl AudioAttributes {
    /// Attributes for music playback over the media output, the only
    /// combination the controller uses
    pub fn media_playback() -> Self {
        Self {
            content_type: ContentType::Music,
            usage: StreamUsage::Media,
        }
    }
}

/// Rough pipeline classification of a stream URL
///
/// Used to log which pipeline a host shim is expected to pick; carries no
/// adaptive-bitrate logic of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Hls,
    Direct,
}

impl StreamKind {
    /// Classify a URL as HLS (`.m3u8` or an `/hls/` path segment) or direct.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxfmplayer::StreamKind;
    ///
    /// assert_eq!(StreamKind::classify("https://a.example/live/index.m3u8"), StreamKind::Hls);
    /// assert_eq!(StreamKind::classify("https://stream.zeno.fm/g4n2811262zuv"), StreamKind::Direct);
    /// ```
    pub fn classify(url: &str) -> Self {
        if url.contains(".m3u8") || url.contains("/hls/") {
            StreamKind::Hls
        } else {
            StreamKind::Direct
        }
    }
}

/// Transport surface of one host player instance
///
/// One backend instance serves at most one playback attempt. All methods
/// are issued under the controller lock and must not block on I/O;
/// `prepare_async` in particular only *starts* preparation, whose outcome
/// is delivered later through the callbacks handle.
pub trait AudioBackend: Send + Sync {
    /// Bind the stream URL to this instance
    fn set_source(&self, url: &str) -> Result<(), BackendError>;

    /// Start asynchronous preparation; completion arrives via
    /// `on_prepared` / `on_error` on an arbitrary thread
    fn prepare_async(&self) -> Result<(), BackendError>;

    /// Start or resume audio output on a prepared instance
    fn start(&self) -> Result<(), BackendError>;

    /// Pause audio output, keeping the instance prepared
    fn pause(&self) -> Result<(), BackendError>;

    /// Release the underlying resources
    ///
    /// Infallible and idempotent; after release the instance is dead and
    /// any callback it still delivers is ignored by the controller.
    fn release(&self);
}

/// Factory creating one fresh backend instance per playback attempt
pub trait AudioBackendFactory: Send + Sync {
    /// Create a backend bound to the given callbacks handle
    ///
    /// The handle carries the generation of the instance it was issued
    /// for; backends must deliver completions only through it.
    fn create(
        &self,
        attributes: &AudioAttributes,
        callbacks: BackendCallbacks,
    ) -> Result<Arc<dyn AudioBackend>, BackendError>;
}
