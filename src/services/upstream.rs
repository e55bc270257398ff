use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

use crate::error::{utils::ErrorUtils, Result};

/// Await one upstream query under the per-query timeout
pub async fn timed<T, F>(query: &str, limit: Duration, request: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout(limit, request).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Upstream query {} timed out after {:?}", query, limit);
            Err(ErrorUtils::upstream_timeout(query, limit.as_secs()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_timed_passes_result_through() {
        let value = timed("cat_count", Duration::from_secs(1), async { Ok(7u32) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_timed_reports_timeout() {
        let result: Result<()> = timed("cat_shards", Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        assert!(matches!(
            result,
            Err(AppError::UpstreamTimeout { ref query, .. }) if query == "cat_shards"
        ));
    }
}
