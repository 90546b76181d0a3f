use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::timer::DebounceTimer;
use crate::validate::ScanPurpose;

/// Quiet window after the last character before a buffer is classified.
pub const SCAN_QUIET_WINDOW: Duration = Duration::from_millis(100);

/// Minimum buffer length for the quiet-window path to classify a scan.
///
/// A barcode scanner delivers at least this many characters in one burst;
/// shorter buffers are a human still typing.
pub const SCAN_MIN_LENGTH: usize = 8;

/// A completed scan. Transient: consumed immediately, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEvent {
    pub raw: String,
    pub purpose: ScanPurpose,
    pub at: DateTime<Utc>,
}

/// One scan-capable input field.
///
/// Owns the field's buffer and its single pending timer. Every appended
/// character re-arms the timer, cancelling the previous one, so at most one
/// classification is ever pending per field. Dropping the field cancels the
/// timer, so nothing fires after teardown.
pub struct ScanField {
    purpose: ScanPurpose,
    buffer: Arc<Mutex<String>>,
    timer: DebounceTimer,
    tx: mpsc::UnboundedSender<ScanEvent>,
}

impl ScanField {
    /// Create a field plus the channel its completed scans arrive on.
    pub fn new(purpose: ScanPurpose) -> (Self, mpsc::UnboundedReceiver<ScanEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                purpose,
                buffer: Arc::new(Mutex::new(String::new())),
                timer: DebounceTimer::new(),
                tx,
            },
            rx,
        )
    }

    /// Append one character and re-arm the quiet-window timer.
    pub fn push_char(&mut self, ch: char) {
        self.buffer.lock().unwrap().push(ch);

        let buffer = Arc::clone(&self.buffer);
        let tx = self.tx.clone();
        let purpose = self.purpose;
        self.timer.arm(SCAN_QUIET_WINDOW, async move {
            let mut buf = buffer.lock().unwrap();
            if buf.len() < SCAN_MIN_LENGTH {
                // Too short for a scanner burst: keep waiting for more input.
                return;
            }
            let raw = std::mem::take(&mut *buf);
            drop(buf);
            let _ = tx.send(ScanEvent {
                raw,
                purpose,
                at: Utc::now(),
            });
        });
    }

    /// Append a whole string, one character at a time.
    pub fn push_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.push_char(ch);
        }
    }

    /// Terminator key: submit whatever is buffered, regardless of length.
    pub fn submit(&mut self) {
        self.timer.cancel();
        let raw = std::mem::take(&mut *self.buffer.lock().unwrap());
        if raw.is_empty() {
            return;
        }
        let _ = self.tx.send(ScanEvent {
            raw,
            purpose: self.purpose,
            at: Utc::now(),
        });
    }

    /// Discard the buffer and cancel any pending classification.
    pub fn clear(&mut self) {
        self.timer.cancel();
        self.buffer.lock().unwrap().clear();
    }

    /// Snapshot of the current buffer contents.
    pub fn buffer(&self) -> String {
        self.buffer.lock().unwrap().clone()
    }
}
