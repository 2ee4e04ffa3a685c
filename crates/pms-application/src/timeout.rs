//! Time budgets for blocking port calls

use pms_domain::error::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Run `future`, failing with [`Error::Timeout`] once `budget` elapses
///
/// Dropping the returned future drops `future` with it, so a cancelled
/// search stops at whichever port call it was waiting on.
pub(crate) async fn bounded<T, F>(operation: &'static str, budget: Duration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(budget, future).await {
        Ok(result) => result,
        Err(_) => {
            warn!(operation, ?budget, "Operation exceeded its time budget");
            Err(Error::timeout(operation, budget))
        }
    }
}
