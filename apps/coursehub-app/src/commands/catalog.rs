//! # Catalog Commands
//!
//! Loading the home screen's course lists.

use tracing::debug;

use coursehub_catalog::CatalogClient;

use crate::state::{HomeState, LoadState};

/// Fetches the catalog and records the outcome on the home screen.
///
/// A failed fetch is not an error here: it becomes
/// [`LoadState::Failed`] and the screen offers a retry.
pub async fn load_home(client: &CatalogClient, home: &mut HomeState) -> LoadState {
    debug!("load_home command");

    let result = client.fetch_courses().await;
    home.finish_loading(result, client.settings().in_progress_count);
    home.load_state().clone()
}

/// The "Retry" button.
pub async fn retry_home(client: &CatalogClient, home: &mut HomeState) -> LoadState {
    debug!("retry_home command");

    home.retry();
    load_home(client, home).await
}
