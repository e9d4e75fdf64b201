// src/model/tree.rs
//! Arena-backed tag forest.
//!
//! - One node per distinct path segment at its depth; `a/b` and `x/b` are
//!   different nodes even though the segment name repeats.
//! - The arena is the sole owner of nodes. Parent and child links are plain
//!   arena indices, so there is no ownership cycle to break.
//! - `index` maps every full path to its arena slot and stays in lock-step
//!   with the arena: one entry per node, no orphans either way.

use std::collections::HashMap;

/// Path separator for hierarchical tags (`project/work/urgent`).
pub const SEPARATOR: char = '/';

/// Handle to a node in a [`TagTree`] arena.
///
/// Handles are only meaningful for the tree that produced them and are
/// invalidated by [`TagTree::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One segment of the tag hierarchy with its aggregate occurrence count.
#[derive(Debug)]
pub struct TagNode {
    /// Segment name at this depth (`urgent` for `project/work/urgent`).
    pub name: String,
    /// Full path from the root, the canonical tag identifier.
    pub path: String,
    /// Occurrences of this tag plus every more-specific descendant tag.
    pub count: u64,
    /// Owning node, `None` for roots. Set at creation, never reassigned.
    pub parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl TagNode {
    /// Direct children in insertion order. Display layers re-sort.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Counted forest of tag paths with an O(1) full-path index.
#[derive(Debug, Default)]
pub struct TagTree {
    arena: Vec<TagNode>,
    roots: Vec<NodeId>,
    index: HashMap<String, NodeId>,
}

impl TagTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every node. Callers see either the old forest or an empty one,
    /// never a partial state.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.roots.clear();
        self.index.clear();
    }

    /// Merge one tag path into the forest.
    ///
    /// Splits `tag_path` on [`SEPARATOR`] and walks root-to-leaf, creating
    /// missing segment nodes as it goes. `count` is added to every node on
    /// the walk, not just the leaf: inserting `a/b/c` with 5 adds 5 to `a`,
    /// `a/b`, and `a/b/c`. That keeps each node's count equal to "this tag
    /// or anything more specific" without a separate rollup pass.
    ///
    /// A path that is empty or contains an empty segment (leading, trailing,
    /// or doubled separator) is invalid input: the whole path is skipped with
    /// a warning and no node is created. A census aggregates many independent
    /// notes, so one bad entry must not abort the rest.
    pub fn insert(&mut self, tag_path: &str, count: u64) {
        let segments: Vec<&str> = tag_path.split(SEPARATOR).collect();
        if segments.iter().any(|s| s.is_empty()) {
            tracing::warn!(tag = tag_path, "skipping malformed tag path");
            return;
        }

        let mut parent: Option<NodeId> = None;
        let mut path = String::with_capacity(tag_path.len());
        for segment in segments {
            if !path.is_empty() {
                path.push(SEPARATOR);
            }
            path.push_str(segment);

            let id = match self.index.get(path.as_str()) {
                Some(&id) => id,
                None => self.create_node(segment, &path, parent),
            };
            self.arena[id.0].count += count;
            parent = Some(id);
        }
    }

    /// Full-path lookup, O(1) via the index.
    pub fn get(&self, path: &str) -> Option<&TagNode> {
        self.index.get(path).map(|&id| &self.arena[id.0])
    }

    /// Arena slot for a full path, for callers that walk links themselves.
    pub fn node_id(&self, path: &str) -> Option<NodeId> {
        self.index.get(path).copied()
    }

    /// Resolve a handle previously returned by this tree.
    ///
    /// Panics if `id` came from another tree or predates a [`clear`].
    ///
    /// [`clear`]: TagTree::clear
    pub fn node(&self, id: NodeId) -> &TagNode {
        &self.arena[id.0]
    }

    /// Top-level forest in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Flattened enumeration, one entry per indexed path, unordered.
    pub fn iter(&self) -> impl Iterator<Item = &TagNode> {
        self.arena.iter()
    }

    /// Number of distinct tag nodes in the forest.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    fn create_node(&mut self, name: &str, path: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.arena.len());
        self.arena.push(TagNode {
            name: name.to_string(),
            path: path.to_string(),
            count: 0,
            parent,
            children: Vec::new(),
        });
        self.index.insert(path.to_string(), id);
        match parent {
            Some(p) => self.arena[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }
}
