//! Helper functions shared across the UI layer: background content fetching
//! and opening links outside the terminal.

use crate::aggregator::fetch_all;
use crate::app::{App, AppEvent};
use crate::content::ContentClient;
use crate::locale::Language;
use crate::util::validate_url_for_open;
use futures::{FutureExt, StreamExt};
use std::panic::AssertUnwindSafe;
use tokio::sync::mpsc;

/// Wraps a future to catch panics and convert them to errors.
///
/// A panicking background task would otherwise vanish inside the runtime;
/// this turns the panic payload into `Err(String)` so it can be reported.
pub(crate) async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else if let Some(e) = panic.downcast_ref::<Box<dyn std::error::Error + Send>>() {
                e.to_string()
            } else {
                format!("Unknown panic: {:?}", (*panic).type_id())
            }
        })
}

/// Spawn the three category fetches. Each outcome is sent as
/// `AppEvent::CategorySettled` as soon as it is final.
pub fn spawn_content_fetch(
    client: ContentClient,
    package_id: String,
    language: Language,
    tx: mpsc::Sender<AppEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let tx_panic = tx.clone();
        let outcome = catch_task_panic(async {
            let mut settlements = fetch_all(&client, &package_id, language);
            while let Some(settlement) = settlements.next().await {
                let category = settlement.category();
                if let Err(e) = tx.send(AppEvent::CategorySettled(settlement)).await {
                    tracing::warn!(
                        category = category.name(),
                        error = %e,
                        "Channel send failed (receiver dropped)"
                    );
                    return;
                }
            }
            tracing::debug!(package = %package_id, "All content categories settled");
        })
        .await;

        if let Err(panic_msg) = outcome {
            tracing::error!(task = "content_fetch", error = %panic_msg, "Background task panicked");
            let _ = tx_panic
                .send(AppEvent::TaskPanicked {
                    task: "content_fetch",
                    error: panic_msg,
                })
                .await;
        }
    })
}

/// Open `url` in the system browser, reporting the outcome in the status bar.
pub(super) fn open_link(app: &mut App, url: &str) {
    let strings = app.language.strings();
    // Only http(s) reaches open::that
    match validate_url_for_open(url) {
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Refusing to open link");
            app.set_status(e.to_string());
        }
        Ok(parsed) => match open::that(parsed.as_str()) {
            Ok(()) => app.set_status(strings.opened_in_browser),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to open browser");
                app.set_status(format!("{}: {}", strings.open_failed, e));
            }
        },
    }
}
