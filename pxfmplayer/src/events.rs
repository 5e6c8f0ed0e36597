use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::controller::DisplayUpdate;

/// Fan-out bus for display updates
///
/// Every state transition of the controller is broadcast once to all
/// live subscribers. Dead receivers are dropped on the next broadcast.
/// Channels are unbounded, so broadcasting never blocks and is safe
/// while the controller state lock is held.
#[derive(Clone, Default)]
pub struct DisplayEventBus {
    subscribers: Arc<Mutex<Vec<Sender<DisplayUpdate>>>>,
}

impl DisplayEventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn subscribe(&self) -> Receiver<DisplayUpdate> {
        let (tx, rx) = unbounded::<DisplayUpdate>();
        {
            let mut subscribers = self.subscribers.lock().unwrap();
            subscribers.push(tx);
        }
        rx
    }

    pub(crate) fn broadcast(&self, event: DisplayUpdate) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
