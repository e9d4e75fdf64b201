// src/model/mod.rs

pub mod tree; // arena-backed tag forest + full-path index

pub use tree::{NodeId, TagNode, TagTree};
