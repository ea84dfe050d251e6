use tracing::error;

use crate::api::RemoteError;
use crate::app::Store;
use crate::notify::{Notification, NotificationKind, Notifier};

use super::action_queue::Action;

/// Run one queued action against the store and report the outcome.
///
/// Store errors stop here: the user gets a generic toast and the detail goes
/// to the log.
pub(super) async fn run_action(action: Action, store: &mut Store, notifier: &mut dyn Notifier) {
    match action {
        Action::Activate => {
            let result = store.activate().await;
            report_failure(result, "Failed to load study logs", notifier);
        }
        Action::Refresh => {
            let result = store.refresh().await;
            report(
                result,
                NotificationKind::Info,
                "Study logs refreshed",
                "Failed to load study logs",
                notifier,
            );
        }
        Action::Create(input) => {
            let result = store.create(&input).await;
            report(
                result,
                NotificationKind::Success,
                "Study log created successfully",
                "Failed to add study log",
                notifier,
            );
        }
        Action::Update { id, input } => {
            let result = store.edit(id, &input).await;
            report(
                result,
                NotificationKind::Success,
                "Study log updated successfully",
                "Failed to update study log",
                notifier,
            );
        }
        Action::Delete(id) => {
            let result = store.remove(id).await;
            report(
                result,
                NotificationKind::Success,
                "Study log deleted successfully",
                "Failed to delete study log",
                notifier,
            );
        }
    }
}

fn report(
    result: Result<(), RemoteError>,
    success_kind: NotificationKind,
    success: &str,
    failure: &str,
    notifier: &mut dyn Notifier,
) {
    if result.is_ok() {
        notifier.notify(Notification::new(success, success_kind));
    } else {
        report_failure(result, failure, notifier);
    }
}

fn report_failure(result: Result<(), RemoteError>, failure: &str, notifier: &mut dyn Notifier) {
    if let Err(e) = result {
        error!(error = %e, "{failure}");
        notifier.notify(Notification::new(failure, NotificationKind::Error));
    }
}
