use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use tradewind_core::{ItemId, WorkflowError, WorkflowResult};

use crate::timer::DebounceTimer;
use crate::validate;

/// Stable-match window before a captured destination auto-advances.
///
/// Guards against a mid-scan partial code that happens to match the move
/// pattern: the buffer must look complete *and* stop changing first.
pub const AUTO_CONFIRM_WINDOW: Duration = Duration::from_millis(500);

/// Command recorded when the operator confirms a physical move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub item_id: ItemId,
    pub current_location: String,
    pub new_location: String,
    pub reason: String,
}

/// Phases of the shelf-move workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePhase {
    /// Collecting the destination code.
    Capture,
    /// Waiting for the operator's explicit decision.
    Confirm,
    /// Move emitted; workflow closed.
    Done,
    /// Workflow closed without a move.
    Aborted,
}

/// Notifications from the workflow to the screen driving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSignal {
    /// Capture advanced to Confirm (explicit request or stable auto-match).
    AwaitingConfirmation { current: String, destination: String },
    /// Operator confirmed; exactly one per workflow.
    Emitted(MoveRequest),
    /// Back to Capture; input focus should be restored.
    RecaptureRequested,
    /// Workflow closed without a move.
    Closed,
}

struct MoveState {
    phase: MovePhase,
    buffer: String,
    // Bumped on every buffer change. The debounced auto-advance carries the
    // generation it was armed with and only lands if the buffer has not
    // changed since.
    generation: u64,
}

/// Shelf-move confirmation state machine for a single item.
///
/// Capture collects a destination; Confirm holds until the operator decides.
/// Only an explicit [`confirm`](MoveWorkflow::confirm) ever emits the move;
/// reaching Confirm automatically is never enough to change recorded state.
pub struct MoveWorkflow {
    item_id: ItemId,
    current_location: String,
    state: Arc<Mutex<MoveState>>,
    timer: DebounceTimer,
    tx: mpsc::UnboundedSender<MoveSignal>,
}

impl MoveWorkflow {
    pub fn new(
        item_id: ItemId,
        current_location: impl Into<String>,
    ) -> (Self, mpsc::UnboundedReceiver<MoveSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                item_id,
                current_location: current_location.into(),
                state: Arc::new(Mutex::new(MoveState {
                    phase: MovePhase::Capture,
                    buffer: String::new(),
                    generation: 0,
                })),
                timer: DebounceTimer::new(),
                tx,
            },
            rx,
        )
    }

    pub fn phase(&self) -> MovePhase {
        self.state.lock().unwrap().phase
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    /// Replace the capture buffer with the input field's current contents.
    ///
    /// A buffer that is a complete move code, differs from the current
    /// location, and then stays unchanged for [`AUTO_CONFIRM_WINDOW`]
    /// advances to Confirm on its own; anything still changing keeps
    /// resetting the window.
    pub fn buffer_changed(&mut self, value: impl Into<String>) {
        let value = value.into();
        let mut state = self.state.lock().unwrap();
        if state.phase != MovePhase::Capture {
            return;
        }
        state.buffer = value.clone();
        state.generation += 1;
        let armed_generation = state.generation;
        drop(state);

        if !validate::matches_move_capture(&value) || value == self.current_location {
            self.timer.cancel();
            return;
        }

        let state = Arc::clone(&self.state);
        let tx = self.tx.clone();
        let current = self.current_location.clone();
        self.timer.arm(AUTO_CONFIRM_WINDOW, async move {
            let mut st = state.lock().unwrap();
            if st.phase != MovePhase::Capture || st.generation != armed_generation {
                return;
            }
            st.phase = MovePhase::Confirm;
            let destination = st.buffer.clone();
            drop(st);
            let _ = tx.send(MoveSignal::AwaitingConfirmation {
                current,
                destination,
            });
        });
    }

    /// Explicit operator request to advance to confirmation.
    pub fn request_confirmation(&mut self) -> WorkflowResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.phase != MovePhase::Capture {
            return Err(WorkflowError::validation("not capturing a destination"));
        }
        if state.buffer.is_empty() {
            return Err(WorkflowError::validation("destination is empty"));
        }
        if state.buffer == self.current_location {
            return Err(WorkflowError::validation(
                "destination equals the current location",
            ));
        }
        state.phase = MovePhase::Confirm;
        let destination = state.buffer.clone();
        drop(state);

        self.timer.cancel();
        let _ = self.tx.send(MoveSignal::AwaitingConfirmation {
            current: self.current_location.clone(),
            destination,
        });
        Ok(())
    }

    /// The operator confirmed the physical move. Emits the move command and
    /// closes the workflow.
    pub fn confirm(&mut self) -> WorkflowResult<MoveRequest> {
        let mut state = self.state.lock().unwrap();
        if state.phase != MovePhase::Confirm {
            return Err(WorkflowError::validation("nothing awaiting confirmation"));
        }
        state.phase = MovePhase::Done;
        let new_location = std::mem::take(&mut state.buffer);
        drop(state);

        let request = MoveRequest {
            item_id: self.item_id.clone(),
            current_location: self.current_location.clone(),
            new_location: new_location.clone(),
            reason: format!("shelf move: {} → {}", self.current_location, new_location),
        };
        let _ = self.tx.send(MoveSignal::Emitted(request.clone()));
        let _ = self.tx.send(MoveSignal::Closed);
        Ok(request)
    }

    /// Discard the captured destination and return to Capture.
    pub fn redo(&mut self) -> WorkflowResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.phase != MovePhase::Confirm {
            return Err(WorkflowError::validation("nothing awaiting confirmation"));
        }
        state.phase = MovePhase::Capture;
        state.buffer.clear();
        state.generation += 1;
        drop(state);

        let _ = self.tx.send(MoveSignal::RecaptureRequested);
        Ok(())
    }

    /// Close the workflow without recording anything.
    pub fn abort(&mut self) {
        let mut state = self.state.lock().unwrap();
        if matches!(state.phase, MovePhase::Done | MovePhase::Aborted) {
            return;
        }
        state.phase = MovePhase::Aborted;
        state.buffer.clear();
        drop(state);

        self.timer.cancel();
        let _ = self.tx.send(MoveSignal::Closed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workflow(current: &str) -> (MoveWorkflow, mpsc::UnboundedReceiver<MoveSignal>) {
        MoveWorkflow::new(ItemId::new("itm-1"), current)
    }

    #[tokio::test(start_paused = true)]
    async fn stable_move_code_auto_advances_to_confirm() {
        let (mut wf, mut rx) = workflow("A-1-1");
        wf.buffer_changed("A-1-5");

        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(wf.phase(), MovePhase::Confirm);
        assert_eq!(
            rx.try_recv().unwrap(),
            MoveSignal::AwaitingConfirmation {
                current: "A-1-1".to_string(),
                destination: "A-1-5".to_string(),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn changing_buffer_keeps_resetting_the_window() {
        let (mut wf, mut rx) = workflow("A-1-1");
        for value in ["A-1-2", "A-1-3", "A-1-4"] {
            wf.buffer_changed(value);
            tokio::time::sleep(Duration::from_millis(300)).await;
            assert_eq!(wf.phase(), MovePhase::Capture);
        }

        tokio::time::sleep(Duration::from_millis(300)).await;
        // The last value finally sat still long enough.
        assert_eq!(wf.phase(), MovePhase::Confirm);
        assert!(matches!(
            rx.try_recv().unwrap(),
            MoveSignal::AwaitingConfirmation { .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn partial_codes_never_auto_advance() {
        let (mut wf, _rx) = workflow("A-1-1");
        wf.buffer_changed("A-1-");

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(wf.phase(), MovePhase::Capture);
    }

    #[tokio::test(start_paused = true)]
    async fn same_location_never_auto_advances() {
        let (mut wf, _rx) = workflow("A-1-5");
        wf.buffer_changed("A-1-5");

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(wf.phase(), MovePhase::Capture);
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_request_rejects_empty_and_unchanged_destinations() {
        let (mut wf, _rx) = workflow("A-1-1");

        let err = wf.request_confirmation().unwrap_err();
        assert!(matches!(err, WorkflowError::Validation(_)));

        wf.buffer_changed("A-1-1");
        let err = wf.request_confirmation().unwrap_err();
        match err {
            WorkflowError::Validation(msg) => {
                assert!(msg.contains("current location"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(wf.phase(), MovePhase::Capture);
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_emits_exactly_one_move_request() {
        let (mut wf, mut rx) = workflow("A-1-1");
        wf.buffer_changed("B-2-3");
        wf.request_confirmation().unwrap();
        assert!(matches!(
            rx.try_recv().unwrap(),
            MoveSignal::AwaitingConfirmation { .. }
        ));

        let request = wf.confirm().unwrap();
        assert_eq!(request.item_id, ItemId::new("itm-1"));
        assert_eq!(request.current_location, "A-1-1");
        assert_eq!(request.new_location, "B-2-3");
        assert_eq!(request.reason, "shelf move: A-1-1 → B-2-3");

        assert_eq!(rx.try_recv().unwrap(), MoveSignal::Emitted(request));
        assert_eq!(rx.try_recv().unwrap(), MoveSignal::Closed);
        assert_eq!(wf.phase(), MovePhase::Done);

        // The workflow is closed; a second confirm is rejected.
        assert!(wf.confirm().is_err());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_alone_emits_nothing() {
        let (mut wf, mut rx) = workflow("A-1-1");
        wf.buffer_changed("A-1-5");
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(wf.phase(), MovePhase::Confirm);
        assert!(matches!(
            rx.try_recv().unwrap(),
            MoveSignal::AwaitingConfirmation { .. }
        ));
        // No Emitted signal until the operator explicitly confirms.
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn redo_returns_to_capture_and_emits_nothing() {
        let (mut wf, mut rx) = workflow("A-1-1");
        wf.buffer_changed("B-2-3");
        wf.request_confirmation().unwrap();
        rx.try_recv().unwrap();

        wf.redo().unwrap();
        assert_eq!(wf.phase(), MovePhase::Capture);
        assert_eq!(rx.try_recv().unwrap(), MoveSignal::RecaptureRequested);

        // Buffer was discarded; confirming again requires a fresh capture.
        let err = wf.request_confirmation().unwrap_err();
        assert!(matches!(err, WorkflowError::Validation(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn abort_closes_without_emitting() {
        let (mut wf, mut rx) = workflow("A-1-1");
        wf.buffer_changed("B-2-3");
        wf.request_confirmation().unwrap();
        rx.try_recv().unwrap();

        wf.abort();
        assert_eq!(wf.phase(), MovePhase::Aborted);
        assert_eq!(rx.try_recv().unwrap(), MoveSignal::Closed);
        assert!(rx.try_recv().is_err());

        // Aborted workflows accept nothing further.
        assert!(wf.confirm().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn abort_during_capture_cancels_the_pending_auto_advance() {
        let (mut wf, mut rx) = workflow("A-1-1");
        wf.buffer_changed("A-1-5");
        wf.abort();

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(wf.phase(), MovePhase::Aborted);
        assert_eq!(rx.try_recv().unwrap(), MoveSignal::Closed);
        assert!(rx.try_recv().is_err());
    }
}
