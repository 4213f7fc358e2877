pub mod pages;
pub mod summary;

use std::path::Path;

use crate::data::DataError;
use crate::error::AppError;

/// Runs a blocking file loader on tokio's blocking pool.
pub(crate) async fn load_blocking<T, F>(path: &Path, load: F) -> Result<T, AppError>
where
    F: FnOnce(&Path) -> Result<T, DataError> + Send + 'static,
    T: Send + 'static,
{
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || load(&path))
        .await
        .map_err(|e| AppError::internal(format!("data loading task failed: {e}")))?
        .map_err(AppError::from)
}
