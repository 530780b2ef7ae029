use crate::domain::ports::{Notifier, Severity};

/// Writes notifications to stdout, one per line, prefixed with the
/// severity ("Info: " / "Error: ").
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        println!("{severity}: {message}");
    }
}
