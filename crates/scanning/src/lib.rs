//! Operator scanning layer.
//!
//! Tells a deliberate keystroke apart from a barcode-scanner burst,
//! validates scanned payloads against per-purpose format rules, and runs the
//! shelf-move confirmation protocol. All scheduled state lives in owned,
//! single-flight [`timer::DebounceTimer`] handles that die with their owner.

pub mod classifier;
pub mod location;
pub mod shelf_move;
pub mod timer;
pub mod validate;

pub use classifier::{SCAN_MIN_LENGTH, SCAN_QUIET_WINDOW, ScanEvent, ScanField};
pub use location::{ShelfCode, compare_locations};
pub use shelf_move::{AUTO_CONFIRM_WINDOW, MovePhase, MoveRequest, MoveSignal, MoveWorkflow};
pub use timer::DebounceTimer;
pub use validate::{ScanPurpose, matches_move_capture, validate_scan};
