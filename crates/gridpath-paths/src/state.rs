use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::{Cell, Range};

/// Sentinel `g` for cells no route has reached yet.
pub(crate) const UNSCORED: i32 = i32::MAX;

/// Sentinel parent index for the start cell.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell search record
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNSCORED,
            parent: NO_PARENT,
            closed: false,
        }
    }
}

/// Frontier entry, ordered for use in a max-`BinaryHeap` so that the
/// smallest `f` pops first.
///
/// Ties on `f` go to the larger `g` (the cell closer to the goal), then to
/// the lower row-major cell. Both keys are total, so the pop order is fully
/// deterministic.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cell: Cell,
    pub(crate) g: i32,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then(self.g.cmp(&other.g))
            .then(other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Everything one A* query owns: the open heap, the node table standing in
/// for `closed`/`gScore`/`cameFrom`, and a neighbor scratch buffer.
///
/// Built fresh per query and dropped with it.
pub(crate) struct SearchState {
    pub(crate) rng: Range,
    pub(crate) nodes: Vec<Node>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) nbuf: Vec<Cell>,
    pub(crate) expanded: usize,
}

impl SearchState {
    pub(crate) fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![Node::default(); rng.len()],
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(4),
            expanded: 0,
        }
    }

    /// Record `g` and `parent` for `idx` and push it on the frontier.
    pub(crate) fn push(&mut self, idx: usize, g: i32, h: i32, parent: usize) {
        let node = &mut self.nodes[idx];
        node.g = g;
        node.parent = parent;
        self.open.push(NodeRef {
            idx,
            cell: self.rng.cell(idx),
            g,
            f: g + h,
        });
    }

    /// Pop the best live frontier entry, skipping stale ones left behind by
    /// later improvements or by closing.
    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        while let Some(r) = self.open.pop() {
            let node = &self.nodes[r.idx];
            if node.closed || node.g != r.g {
                continue;
            }
            return Some(r);
        }
        None
    }

    /// Follow parent links back from `goal` and return `[start, ..., goal]`.
    pub(crate) fn path_to(&self, goal: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.rng.cell(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
