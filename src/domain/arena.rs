//! Arena-backed BK-tree keyed by edit distance.

use std::collections::BTreeMap;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::distance::EditDistance;
use crate::domain::entities::Term;

/// Tree node in the arena-based BK-tree.
#[derive(Debug)]
pub struct BkNode {
    /// Term stored at this node
    pub term: Term,
    /// Edit distance to the parent term, 0 for the root
    pub distance_from_parent: usize,
    /// Insertion position, used as the stable tie-break
    pub order: usize,
    /// Children keyed by their distance to this node, at most one per key
    pub children: BTreeMap<usize, Index>,
}

impl BkNode {
    fn new(term: Term, distance_from_parent: usize, order: usize) -> Self {
        Self {
            term,
            distance_from_parent,
            order,
            children: BTreeMap::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A search hit: the node's term and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub distance: usize,
    pub order: usize,
    pub term: &'a Term,
}

/// Shape summary of a built tree.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    /// Number of levels, the root alone counts as 1
    pub depth: usize,
    pub max_children: usize,
    /// Mean child count over internal (non-leaf) nodes
    pub average_children: f64,
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} leaves={} depth={} max_children={} avg_children={:.2}",
            self.nodes, self.leaves, self.depth, self.max_children, self.average_children
        )
    }
}

/// BK-tree over Levenshtein distance.
///
/// Invariant: for every node `n` with child `c`,
/// `distance(n.term, c.term) == c.distance_from_parent`. Search pruning is
/// only sound because of it, so nodes are never moved or removed once inserted.
#[derive(Debug, Default)]
pub struct BkTree {
    arena: Arena<BkNode>,
    root: Option<Index>,
}

impl BkTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            arena: Arena::with_capacity(n),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&BkNode> {
        self.arena.get(idx)
    }

    /// Insert `term`, walking from the root along matching distance keys.
    ///
    /// The first term becomes the root. A later term equal (after case folding)
    /// to an existing one is stored under a distance-0 edge, so duplicates stay
    /// visible to radius-0 search.
    #[instrument(level = "trace", skip(self, term, metric), fields(term = %term.value))]
    pub fn insert(&mut self, term: Term, metric: &mut EditDistance) -> Index {
        let order = self.arena.len();
        let Some(mut current) = self.root else {
            let idx = self.arena.insert(BkNode::new(term, 0, order));
            self.root = Some(idx);
            return idx;
        };

        loop {
            let node = &self.arena[current];
            let d = metric.distance(&node.term.value, &term.value);
            match node.children.get(&d).copied() {
                Some(child) => current = child,
                None => {
                    let idx = self.arena.insert(BkNode::new(term, d, order));
                    self.arena[current].children.insert(d, idx);
                    return idx;
                }
            }
        }
    }

    /// Collect every term within `radius` of `query`.
    ///
    /// Only children keyed in `[d - radius, d + radius]` are visited, where `d`
    /// is the current node's distance to the query. Result order is unspecified.
    #[instrument(level = "trace", skip(self, metric))]
    pub fn search_within_radius<'a>(
        &'a self,
        query: &str,
        radius: usize,
        metric: &mut EditDistance,
    ) -> Vec<Candidate<'a>> {
        let mut found = Vec::new();
        let mut stack: Vec<Index> = self.root.into_iter().collect();

        while let Some(idx) = stack.pop() {
            let Some(node) = self.arena.get(idx) else {
                continue;
            };
            let d = metric.distance(&node.term.value, query);
            if d <= radius {
                found.push(Candidate {
                    distance: d,
                    order: node.order,
                    term: &node.term,
                });
            }
            let lower = d.saturating_sub(radius);
            let upper = d.saturating_add(radius);
            stack.extend(node.children.range(lower..=upper).map(|(_, &child)| child));
        }

        found
    }

    /// Pre-order traversal, children in ascending distance order.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.stats().depth
    }

    #[instrument(level = "debug", skip(self))]
    pub fn stats(&self) -> TreeStats {
        let Some(root) = self.root else {
            return TreeStats::default();
        };

        let mut stats = TreeStats::default();
        let mut child_links = 0usize;
        let mut stack = vec![(root, 1usize)];
        while let Some((idx, level)) = stack.pop() {
            let Some(node) = self.arena.get(idx) else {
                continue;
            };
            stats.nodes += 1;
            stats.depth = stats.depth.max(level);
            stats.max_children = stats.max_children.max(node.children.len());
            if node.is_leaf() {
                stats.leaves += 1;
            }
            child_links += node.children.len();
            stack.extend(node.children.values().map(|&child| (child, level + 1)));
        }

        let internal = stats.nodes - stats.leaves;
        if internal > 0 {
            stats.average_children = child_links as f64 / internal as f64;
        }
        stats
    }
}

pub struct TreeIterator<'a> {
    tree: &'a BkTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a BkTree) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a BkNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // reversed so the smallest distance key is visited first
                self.stack.extend(node.children.values().rev().copied());
                return Some((current_idx, node));
            }
        }
        None
    }
}
