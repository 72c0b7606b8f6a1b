use std::sync::Arc;

use thiserror::Error;

/// Cache error.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum CacheError {
    /// Cache storage lock was poisoned by a panicking holder.
    #[error("Cache storage lock is poisoned")]
    LockPoisoned,

    /// Implementation-specific error
    #[error(transparent)]
    ImplementationError {
        source: Arc<dyn std::error::Error + Send + Sync + 'static>,
    },
}
