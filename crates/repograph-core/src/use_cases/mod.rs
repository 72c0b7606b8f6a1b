pub mod stats;
pub mod tree;
