use crate::types::StudyLogInput;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that needs the remote store. Executed one at a time by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    /// First load after startup
    Activate,
    Refresh,
    Create(StudyLogInput),
    Update { id: i64, input: StudyLogInput },
    Delete(i64),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
