//! Tree cache interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;

pub use errors::CacheError;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockTreeCacheService;
pub use interface::TreeCacheService;
