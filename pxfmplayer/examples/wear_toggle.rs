//! Simulated one-button remote session
//!
//! Drives the playback controller with a demo backend whose preparation
//! completes on a timer thread, printing the labels a watch face would
//! render after each press.
//!
//! Run with: `cargo run --example wear_toggle`

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::Receiver;
use pxfmplayer::{
    AudioAttributes, AudioBackend, AudioBackendFactory, BackendCallbacks, BackendError,
    DEFAULT_STREAM_URL, DisplayUpdate, PlaybackController,
};

struct DemoBackend {
    callbacks: BackendCallbacks,
}

impl AudioBackend for DemoBackend {
    fn set_source(&self, url: &str) -> Result<(), BackendError> {
        println!("  [backend {}] source {url}", self.callbacks.generation());
        Ok(())
    }

    fn prepare_async(&self) -> Result<(), BackendError> {
        let callbacks = self.callbacks.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(150));
            callbacks.on_prepared();
        });
        Ok(())
    }

    fn start(&self) -> Result<(), BackendError> {
        Ok(())
    }

    fn pause(&self) -> Result<(), BackendError> {
        Ok(())
    }

    fn release(&self) {
        println!("  [backend {}] released", self.callbacks.generation());
    }
}

struct DemoFactory;

impl AudioBackendFactory for DemoFactory {
    fn create(
        &self,
        attributes: &AudioAttributes,
        callbacks: BackendCallbacks,
    ) -> Result<Arc<dyn AudioBackend>, BackendError> {
        println!(
            "  [factory] backend generation {} for {:?}/{:?}",
            callbacks.generation(),
            attributes.content_type,
            attributes.usage
        );
        Ok(Arc::new(DemoBackend { callbacks }))
    }
}

fn press(
    controller: &PlaybackController,
    updates: &Receiver<DisplayUpdate>,
    label: &str,
) -> anyhow::Result<DisplayUpdate> {
    println!("{label}");
    controller.toggle();
    let update = updates.recv_timeout(Duration::from_secs(2))?;
    println!("  -> [{}] [{}]", update.status_label, update.toggle_label);
    Ok(update)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let controller = PlaybackController::new(Arc::new(DemoFactory), DEFAULT_STREAM_URL);
    let updates = controller.subscribe();

    let initial = controller.snapshot();
    println!("Initial: [{}] [{}]", initial.status_label, initial.toggle_label);

    press(&controller, &updates, "Press (start playback)")?;

    // La préparation aboutit sur le thread du timer
    let prepared = updates.recv_timeout(Duration::from_secs(2))?;
    println!("  prepared -> [{}] [{}]", prepared.status_label, prepared.toggle_label);

    press(&controller, &updates, "Press (pause)")?;
    press(&controller, &updates, "Press (resume, no re-buffering)")?;

    println!("Teardown");
    controller.teardown();
    let finished = updates.recv_timeout(Duration::from_secs(2))?;
    println!("  -> [{}] [{}]", finished.status_label, finished.toggle_label);

    Ok(())
}
