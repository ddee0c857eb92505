use crate::error::ApiError;
use requisite_graph::RequisiteCatalog;
use std::{sync::Arc, time::Duration};

/// State shared by every route
#[derive(Debug, Clone)]
pub struct AppState {
    /// Snapshot of the stored expressions, read-only while serving
    pub catalog: Arc<RequisiteCatalog>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(catalog: RequisiteCatalog, request_timeout: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            request_timeout,
        }
    }

    /// Runs a graph query on the blocking pool under the request deadline
    ///
    /// # Returns
    /// The query result, or [`ApiError::Timeout`] once the deadline passes.
    /// The query itself keeps running to completion in the background.
    pub async fn query<F, T>(&self, work: F) -> Result<T, ApiError>
    where
        F: FnOnce(&RequisiteCatalog) -> T + Send + 'static,
        T: Send + 'static,
    {
        let catalog = Arc::clone(&self.catalog);
        let task = tokio::task::spawn_blocking(move || work(&catalog));

        match tokio::time::timeout(self.request_timeout, task).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(ApiError::Internal(e.to_string())),
            Err(_) => Err(ApiError::Timeout),
        }
    }
}
