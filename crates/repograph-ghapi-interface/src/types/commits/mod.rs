mod commit;

pub use commit::{GhCommit, GhCommitDetails, GhCommitParent, GhCommitSignature};
