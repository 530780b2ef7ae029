use crate::domain::ports::{Notifier, Severity};
use std::sync::{Arc, Mutex};

/// Buffers notifications in memory behind a shared handle.
///
/// Clones share one buffer, so a test (or an embedding UI) can hold a
/// handle, hand a clone to the machine, and inspect what the engine
/// reported afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    messages: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything notified so far, oldest first.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().expect("notifier lock").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .expect("notifier lock")
            .push((severity, message.to_owned()));
    }
}
