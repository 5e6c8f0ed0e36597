//! Playback toggle state machine
//!
//! One controller owns at most one backend instance and drives it with a
//! single `toggle` control, the way a one-button remote does. All state
//! lives behind a mutex so that toggle calls and backend completions,
//! which may arrive on different threads, are serialized. Every transition
//! is published once on the [`DisplayEventBus`] carried by the controller,
//! before the mutex is released, so subscribers receive updates in the
//! order the transitions were applied.

use std::fmt;
use std::sync::{Arc, Mutex, Weak};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::backend::{AudioAttributes, AudioBackend, AudioBackendFactory, StreamKind};
use crate::events::DisplayEventBus;

/// Status label shown before the first playback attempt
pub const STATUS_READY: &str = "Ready to Play";
/// Status label while a stream is being prepared
pub const STATUS_BUFFERING: &str = "Buffering...";
/// Status label while audio is playing
pub const STATUS_PLAYING: &str = "Playing";
/// Status label while playback is paused
pub const STATUS_PAUSED: &str = "Paused";
/// Status label after a backend-reported playback failure
pub const STATUS_ERROR_PLAYING: &str = "Error playing";
/// Status label when the stream source could not be set up
pub const STATUS_ERROR_LOADING: &str = "Error loading";
/// Toggle label when pressing it starts or resumes playback
pub const TOGGLE_PLAY: &str = "Play";
/// Toggle label when pressing it pauses playback
pub const TOGGLE_STOP: &str = "Stop";

/// Lifecycle state of the playback controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Idle,
    Buffering,
    Playing,
    Paused,
    Error,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Idle => "IDLE",
            PlayerStatus::Buffering => "BUFFERING",
            PlayerStatus::Playing => "PLAYING",
            PlayerStatus::Paused => "PAUSED",
            PlayerStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display strings published after each state transition
///
/// The UI surface renders these verbatim; the controller never renders
/// anything itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUpdate {
    pub status: PlayerStatus,
    pub status_label: String,
    pub toggle_label: String,
}

struct ControllerInner {
    status: PlayerStatus,
    status_label: String,
    toggle_label: String,
    backend: Option<Arc<dyn AudioBackend>>,
    generation: u64,
}

impl ControllerInner {
    fn new() -> Self {
        Self {
            status: PlayerStatus::Idle,
            status_label: STATUS_READY.to_string(),
            toggle_label: TOGGLE_PLAY.to_string(),
            backend: None,
            generation: 0,
        }
    }

    fn snapshot(&self) -> DisplayUpdate {
        DisplayUpdate {
            status: self.status,
            status_label: self.status_label.clone(),
            toggle_label: self.toggle_label.clone(),
        }
    }
}

/// Completion handle issued to one backend instance at creation
///
/// The handle remembers the generation of the instance it was issued for.
/// A completion delivered after that instance has been replaced or
/// released no longer matches the controller state and is dropped without
/// touching the current backend.
#[derive(Clone)]
pub struct BackendCallbacks {
    generation: u64,
    inner: Weak<Mutex<ControllerInner>>,
    bus: DisplayEventBus,
}

impl BackendCallbacks {
    /// Generation of the backend instance this handle belongs to
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Preparation finished, start audio output
    pub fn on_prepared(&self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let mut state = inner.lock().unwrap();
        let backend = match state.backend.clone() {
            Some(backend) if state.generation == self.generation => backend,
            _ => {
                debug!(generation = self.generation, "Stale prepare completion ignored");
                return;
            }
        };
        match backend.start() {
            Ok(()) => {
                debug!("Stream prepared, audio started");
                state.status = PlayerStatus::Playing;
                state.status_label = STATUS_PLAYING.to_string();
                state.toggle_label = TOGGLE_STOP.to_string();
            }
            Err(e) => {
                warn!(error = %e, "Start after prepare failed, releasing player");
                backend.release();
                state.backend = None;
                state.status = PlayerStatus::Error;
                state.status_label = STATUS_ERROR_PLAYING.to_string();
            }
        }
        self.bus.broadcast(state.snapshot());
    }

    /// The backend reported a failure, release it and surface the error
    pub fn on_error(&self, detail: &str) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let mut state = inner.lock().unwrap();
        if state.generation != self.generation || state.backend.is_none() {
            debug!(
                generation = self.generation,
                error = detail,
                "Stale error callback ignored"
            );
            return;
        }
        warn!(error = detail, "Player reported an error");
        if let Some(backend) = state.backend.take() {
            backend.release();
        }
        state.status = PlayerStatus::Error;
        state.status_label = STATUS_ERROR_PLAYING.to_string();
        self.bus.broadcast(state.snapshot());
    }
}

/// Single-button playback controller for one fixed stream URL
///
/// Clones share the same state, the same backend instance and the same
/// event bus, so a clone can be handed to a UI shim while another drives
/// teardown from a lifecycle hook.
#[derive(Clone)]
pub struct PlaybackController {
    inner: Arc<Mutex<ControllerInner>>,
    factory: Arc<dyn AudioBackendFactory>,
    stream_url: String,
    attributes: AudioAttributes,
    bus: DisplayEventBus,
}

impl PlaybackController {
    /// Create an idle controller bound to the given stream URL
    ///
    /// No backend is created until the first toggle. Audio attributes
    /// default to [`AudioAttributes::media_playback`].
    pub fn new(factory: Arc<dyn AudioBackendFactory>, stream_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ControllerInner::new())),
            factory,
            stream_url: stream_url.into(),
            attributes: AudioAttributes::media_playback(),
            bus: DisplayEventBus::new(),
        }
    }

    /// Override the audio attributes handed to the backend factory
    pub fn with_attributes(mut self, attributes: AudioAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// The fixed stream URL this controller plays
    pub fn stream_url(&self) -> &str {
        &self.stream_url
    }

    /// Audio attributes handed to the backend factory
    pub fn attributes(&self) -> AudioAttributes {
        self.attributes
    }

    /// Subscribe to display updates, one per state transition
    pub fn subscribe(&self) -> crossbeam_channel::Receiver<DisplayUpdate> {
        self.bus.subscribe()
    }

    /// Current status
    pub fn status(&self) -> PlayerStatus {
        self.inner.lock().unwrap().status
    }

    /// Current status label
    pub fn status_label(&self) -> String {
        self.inner.lock().unwrap().status_label.clone()
    }

    /// Current toggle label
    pub fn toggle_label(&self) -> String {
        self.inner.lock().unwrap().toggle_label.clone()
    }

    /// Current display strings without waiting for the next transition
    pub fn snapshot(&self) -> DisplayUpdate {
        self.inner.lock().unwrap().snapshot()
    }

    /// Single button press
    ///
    /// Playing pauses, Paused resumes the already prepared backend without
    /// re-buffering, and every other state starts a fresh playback
    /// attempt. Returns immediately; the outcome of a started attempt
    /// arrives later through the backend callbacks.
    pub fn toggle(&self) {
        let mut state = self.inner.lock().unwrap();
        match (state.status, state.backend.clone()) {
            (PlayerStatus::Playing, Some(backend)) => {
                match backend.pause() {
                    Ok(()) => {
                        debug!("Playback paused");
                        state.status = PlayerStatus::Paused;
                        state.status_label = STATUS_PAUSED.to_string();
                        state.toggle_label = TOGGLE_PLAY.to_string();
                    }
                    Err(e) => {
                        warn!(error = %e, "Pause failed, releasing player");
                        backend.release();
                        state.backend = None;
                        state.status = PlayerStatus::Error;
                        state.status_label = STATUS_ERROR_PLAYING.to_string();
                    }
                }
            }
            (PlayerStatus::Paused, Some(backend)) => {
                match backend.start() {
                    Ok(()) => {
                        debug!("Playback resumed");
                        state.status = PlayerStatus::Playing;
                        state.status_label = STATUS_PLAYING.to_string();
                        state.toggle_label = TOGGLE_STOP.to_string();
                    }
                    Err(e) => {
                        warn!(error = %e, "Resume failed, releasing player");
                        backend.release();
                        state.backend = None;
                        state.status = PlayerStatus::Error;
                        state.status_label = STATUS_ERROR_PLAYING.to_string();
                    }
                }
            }
            // Idle, Error et Buffering repartent sur une instance neuve
            _ => self.begin_buffering(&mut state),
        }
        self.bus.broadcast(state.snapshot());
    }

    /// Release the backend and return to the initial idle state
    ///
    /// Safe to call at any time and any number of times. Calls after the
    /// controller is already idle with no backend do nothing and publish
    /// nothing.
    pub fn teardown(&self) {
        let mut state = self.inner.lock().unwrap();
        if state.status == PlayerStatus::Idle && state.backend.is_none() {
            debug!("Teardown on idle controller, nothing to release");
            return;
        }
        debug!(status = %state.status, "Tearing down controller");
        if let Some(backend) = state.backend.take() {
            backend.release();
        }
        state.status = PlayerStatus::Idle;
        state.status_label = STATUS_READY.to_string();
        state.toggle_label = TOGGLE_PLAY.to_string();
        self.bus.broadcast(state.snapshot());
    }

    /// Replace any current backend with a freshly prepared one
    ///
    /// Bumping the generation first makes completions of the replaced
    /// instance stale before its release is even observable.
    fn begin_buffering(&self, state: &mut ControllerInner) {
        if let Some(old) = state.backend.take() {
            debug!(generation = state.generation, "Releasing superseded player instance");
            old.release();
        }
        state.generation += 1;
        let callbacks = BackendCallbacks {
            generation: state.generation,
            inner: Arc::downgrade(&self.inner),
            bus: self.bus.clone(),
        };
        debug!(
            url = %self.stream_url,
            kind = ?StreamKind::classify(&self.stream_url),
            generation = state.generation,
            "Preparing stream"
        );
        let backend = match self.factory.create(&self.attributes, callbacks) {
            Ok(backend) => backend,
            Err(e) => {
                warn!(error = %e, "Player creation failed");
                state.status = PlayerStatus::Error;
                state.status_label = STATUS_ERROR_LOADING.to_string();
                return;
            }
        };
        if let Err(e) = self.prepare_backend(&backend) {
            warn!(error = %e, "Stream setup failed");
            backend.release();
            state.status = PlayerStatus::Error;
            state.status_label = STATUS_ERROR_LOADING.to_string();
            return;
        }
        state.backend = Some(backend);
        state.status = PlayerStatus::Buffering;
        state.status_label = STATUS_BUFFERING.to_string();
    }

    fn prepare_backend(
        &self,
        backend: &Arc<dyn AudioBackend>,
    ) -> Result<(), crate::backend::BackendError> {
        backend.set_source(&self.stream_url)?;
        backend.prepare_async()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;

    #[derive(Debug)]
    struct RejectingFactory;

    impl AudioBackendFactory for RejectingFactory {
        fn create(
            &self,
            _attributes: &AudioAttributes,
            _callbacks: BackendCallbacks,
        ) -> Result<Arc<dyn AudioBackend>, BackendError> {
            Err(BackendError::Unavailable("no audio output".to_string()))
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(PlayerStatus::Idle.as_str(), "IDLE");
        assert_eq!(PlayerStatus::Buffering.as_str(), "BUFFERING");
        assert_eq!(PlayerStatus::Playing.as_str(), "PLAYING");
        assert_eq!(PlayerStatus::Paused.as_str(), "PAUSED");
        assert_eq!(PlayerStatus::Error.as_str(), "ERROR");
        assert_eq!(PlayerStatus::Paused.to_string(), "PAUSED");
    }

    #[test]
    fn test_initial_snapshot() {
        let controller = PlaybackController::new(
            Arc::new(RejectingFactory),
            "https://stream.zeno.fm/g4n2811262zuv",
        );
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, PlayerStatus::Idle);
        assert_eq!(snapshot.status_label, STATUS_READY);
        assert_eq!(snapshot.toggle_label, TOGGLE_PLAY);
        assert_eq!(controller.status_label(), STATUS_READY);
        assert_eq!(controller.toggle_label(), TOGGLE_PLAY);
        assert_eq!(controller.stream_url(), "https://stream.zeno.fm/g4n2811262zuv");
        assert_eq!(controller.attributes(), AudioAttributes::media_playback());
    }

    #[test]
    fn test_factory_failure_surfaces_loading_error() {
        let controller = PlaybackController::new(Arc::new(RejectingFactory), "http://radio.test/a");
        let updates = controller.subscribe();

        controller.toggle();

        assert_eq!(controller.status(), PlayerStatus::Error);
        let update = updates.try_recv().unwrap();
        assert_eq!(update.status, PlayerStatus::Error);
        assert_eq!(update.status_label, STATUS_ERROR_LOADING);
        // The toggle label is left as it was
        assert_eq!(update.toggle_label, TOGGLE_PLAY);
        assert!(updates.try_recv().is_err());
    }

    #[test]
    fn test_display_update_serialization() {
        let update = DisplayUpdate {
            status: PlayerStatus::Playing,
            status_label: STATUS_PLAYING.to_string(),
            toggle_label: TOGGLE_STOP.to_string(),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["status"], "playing");
        assert_eq!(value["status_label"], "Playing");
        assert_eq!(value["toggle_label"], "Stop");

        let back: DisplayUpdate = serde_json::from_value(value).unwrap();
        assert_eq!(back, update);
    }
}
