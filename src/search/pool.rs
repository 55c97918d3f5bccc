//! Episode-scoped storage for search-tree nodes.
//!
//! Nodes are bump-allocated into one `Vec` and never freed one by one; the
//! whole tree is discarded by [`NodePool::reset`] once the driver has read
//! out its move. A node's children are allocated back to back while it is
//! expanded, so they are stored as an index range on the parent.

use std::ops::{Index, IndexMut};

use crate::board::{Board, Side};
use crate::movegen::{self, Move};
use crate::search::Score;

/// Handle to a node, valid only within the episode that allocated it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId {
    index: u32,
    episode: u32,
}

/// Children of a node in discovery order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Children {
    first: u32,
    len: u32,
    episode: u32,
}

impl Children {
    pub fn len(&self) -> usize { self.len as usize }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn first(&self) -> Option<NodeId> { self.get(0) }

    pub fn get(&self, i: usize) -> Option<NodeId> {
        (i < self.len as usize).then(|| NodeId { index: self.first + i as u32, episode: self.episode })
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> {
        let episode = self.episode;
        (self.first..self.first + self.len).map(move |index| NodeId { index, episode })
    }
}

#[derive(Clone, Debug)]
pub struct SearchNode {
    pub board: Board,
    pub score: Score,
    /// `None` for the root.
    pub mv: Option<Move>,
    children: Children,
    expanded: bool,
}

impl SearchNode {
    fn new(board: Board, mv: Option<Move>, episode: u32) -> Self {
        Self {
            board,
            score: 0,
            mv,
            children: Children { first: 0, len: 0, episode },
            expanded: false,
        }
    }

    pub fn children(&self) -> Children { self.children }

    pub fn is_expanded(&self) -> bool { self.expanded }

    /// Text label of the move that produced this node; empty for the root.
    pub fn label(&self) -> String {
        self.mv.map(|m| m.to_string()).unwrap_or_default()
    }
}

pub struct NodePool {
    nodes: Vec<SearchNode>,
    episode: u32,
    peak: usize,
}

const DEFAULT_CAPACITY: usize = 1 << 16;

impl NodePool {
    pub fn new() -> Self { Self::with_capacity(DEFAULT_CAPACITY) }

    pub fn with_capacity(cap: usize) -> Self {
        Self { nodes: Vec::with_capacity(cap), episode: 0, peak: 0 }
    }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn episode(&self) -> u32 { self.episode }

    /// Largest node count reached by any episode so far.
    pub fn peak(&self) -> usize { self.peak.max(self.nodes.len()) }

    pub fn alloc_root(&mut self, board: Board) -> NodeId {
        self.alloc(SearchNode::new(board, None, self.episode))
    }

    fn alloc(&mut self, node: SearchNode) -> NodeId {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeId { index, episode: self.episode }
    }

    /// Append a child to `parent`. Children of one parent must be pushed
    /// without any other allocation in between.
    pub fn push_child(&mut self, parent: NodeId, board: Board, mv: Move) -> NodeId {
        let child = self.alloc(SearchNode::new(board, Some(mv), self.episode));
        let kids = &mut self[parent].children;
        if kids.len == 0 {
            kids.first = child.index;
        }
        debug_assert_eq!(kids.first + kids.len, child.index, "children must be contiguous");
        kids.len += 1;
        child
    }

    /// Generate `side`'s moves from `id` as children. Expanding a node a
    /// second time returns the existing children.
    pub fn expand(&mut self, id: NodeId, side: Side) -> Children {
        if self[id].expanded {
            return self[id].children;
        }
        let board = self[id].board;
        movegen::for_each_move(board, side, |mv, child| {
            self.push_child(id, child, mv);
        });
        let node = &mut self[id];
        node.expanded = true;
        node.children
    }

    /// True if `id` was allocated in the current episode.
    pub fn contains(&self, id: NodeId) -> bool {
        id.episode == self.episode && (id.index as usize) < self.nodes.len()
    }

    /// End the episode: every node and every outstanding `NodeId` is dropped.
    pub fn reset(&mut self) {
        self.peak = self.peak.max(self.nodes.len());
        self.nodes.clear();
        self.episode = self.episode.wrapping_add(1);
    }
}

impl Default for NodePool {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for NodePool {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        debug_assert_eq!(id.episode, self.episode, "stale node id");
        &self.nodes[id.index as usize]
    }
}

impl IndexMut<NodeId> for NodePool {
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        debug_assert_eq!(id.episode, self.episode, "stale node id");
        &mut self.nodes[id.index as usize]
    }
}
