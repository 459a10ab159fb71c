//! File system abstractions for Megatron.
//!
//! The only filesystem access in the core is the one-time walk performed by
//! [`tree::FileTree::build`], which produces the immutable snapshot the
//! navigator works on.

pub mod tree;

pub use tree::{ensure_directory, BuildOptions, FileTree, NodeId, TreeNode, MAX_TREE_DEPTH};
