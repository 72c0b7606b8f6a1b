pub(crate) mod get_repository_stats;

pub use get_repository_stats::GetRepositoryStatsInterface;

#[cfg(any(test, feature = "testkit"))]
pub use get_repository_stats::MockGetRepositoryStatsInterface;
