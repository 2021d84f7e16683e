//! Graph labs and the shared graph representations.

pub mod model;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
