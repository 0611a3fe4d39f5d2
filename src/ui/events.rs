//! Background task event handling.

use crate::aggregator::Settlement;
use crate::app::{App, AppEvent};
use crate::content::FetchError;

/// Fold a background event into the application state.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CategorySettled(settlement) => {
            app.apply_settlement(settlement);
        }
        AppEvent::TaskPanicked { task, error } => {
            tracing::error!(task, error = %error, "Background task panicked");
            // Nothing else will settle these; fail them so the page degrades.
            for category in app.content.pending() {
                app.apply_settlement(Settlement::failed(
                    category,
                    FetchError::Aborted(format!("{} panicked", task)),
                ));
            }
            app.set_status(format!("Internal error in {}: {}", task, error));
        }
    }
    app.needs_redraw = true;
}
