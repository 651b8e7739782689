//! Instrumented top-down merge sort.
//!
//! Every recursive call becomes a [`Node`] covering a half-open interval
//! `[l, r)` of the input. The tracer emits a frame when a node is created,
//! when a leaf is marked sorted, when two children are merged into their
//! parent, and once more after the root completes.
//!
//! The left subtree is always fully traced before the right one begins, so
//! node ids follow pre-order and the frame sequence is deterministic.
//!
//! # Example
//!
//! ```
//! use mergetrace::trace::Frame;
//! use mergetrace::trace::merge_sort;
//!
//! let trace = merge_sort::trace(&[3, 1, 2]);
//! let last = trace.last().unwrap();
//! assert_eq!(last.caption(), "final sorted result");
//! assert_eq!(last.root().unwrap().arr, vec![1, 2, 3]);
//! ```

use std::fmt;

use tracing::debug;

use super::Frame;
use super::Trace;

/// Identifier of a node, unique within one run and assigned in pre-order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        return self.0 as usize;
    }
}

/// Visualization state of a node.
///
/// `PendingLeft` and `PendingRight` only record which side of its parent a
/// node sits on; both become `Resolved` once the node's contents are sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Color {
    PendingLeft,
    PendingRight,
    Resolved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Root,
    Left,
    Right,
}

/// The event that produced a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(tag = "event", rename_all = "snake_case"))]
pub enum SortEvent {
    Create { l: usize, r: usize },
    Leaf { l: usize, r: usize },
    Merge { l: usize, mid: usize, r: usize },
    Final,
}

impl fmt::Display for SortEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match *self {
            SortEvent::Create { l, r } => write!(f, "create node [{}:{})", l, r),
            SortEvent::Leaf { l, r } => write!(f, "sorted leaf [{}:{})", l, r),
            SortEvent::Merge { l, mid, r } => {
                write!(f, "merge [{}:{}) and [{}:{}) -> [{}:{})", l, mid, mid, r, l, r)
            }
            SortEvent::Final => write!(f, "final sorted result"),
        };
    }
}

/// State of one recursive call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node<T> {
    pub id: NodeId,
    /// Inclusive start of the interval.
    pub l: usize,
    /// Exclusive end of the interval.
    pub r: usize,
    /// Recursion depth; the root is 0.
    pub level: usize,
    /// Horizontal position, fixed at creation.
    pub x: f64,
    /// Interval contents: the input slice until this node's merge, sorted after.
    pub arr: Vec<T>,
    pub color: Color,
    pub parent: Option<NodeId>,
}

impl<T> Node<T> {
    /// Width of the interval.
    pub fn len(&self) -> usize {
        return self.r - self.l;
    }

    pub fn is_empty(&self) -> bool {
        return self.l == self.r;
    }

    pub fn is_leaf(&self) -> bool {
        return self.len() <= 1;
    }
}

/// Full snapshot of the merge sort tree after one event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortFrame<T> {
    /// Every node created so far, ordered by (level, x).
    pub nodes: Vec<Node<T>>,
    /// `(parent, child)` pairs in creation order.
    pub edges: Vec<(NodeId, NodeId)>,
    pub caption: SortEvent,
    /// Length of the traced input.
    pub n: usize,
    /// Deepest level among the nodes so far.
    pub max_level: usize,
}

impl<T> SortFrame<T> {
    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        return self.nodes.iter().find(|node| node.id == id);
    }

    /// The root node, absent only for empty input.
    pub fn root(&self) -> Option<&Node<T>> {
        return self.nodes.iter().find(|node| node.parent.is_none());
    }
}

impl<T> Frame for SortFrame<T> {
    fn caption(&self) -> String {
        return self.caption.to_string();
    }
}

/// Number of nodes the recursion creates for an input of length `n`.
pub fn node_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    if n == 1 {
        return 1;
    }
    let mid = n / 2;
    return 1 + node_count(mid) + node_count(n - mid);
}

/// Number of frames [`trace`] emits for an input of length `n`.
///
/// Each node contributes a create frame plus either a leaf or a merge frame,
/// and the run ends with one final frame.
pub fn frame_count(n: usize) -> usize {
    return 2 * node_count(n) + 1;
}

/// Stable two-pointer merge; on equal keys the left element comes first.
pub fn merge_sorted<T: Clone + PartialOrd>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    return merged;
}

/// Per-run state. The arena index of a node is its id.
struct Builder<'a, T> {
    input: &'a [T],
    nodes: Vec<Node<T>>,
    edges: Vec<(NodeId, NodeId)>,
    frames: Vec<SortFrame<T>>,
}

impl<'a, T: Clone + PartialOrd> Builder<'a, T> {
    fn new(input: &'a [T]) -> Builder<'a, T> {
        return Builder {
            input,
            nodes: Vec::with_capacity(node_count(input.len())),
            edges: Vec::new(),
            frames: Vec::with_capacity(frame_count(input.len())),
        };
    }

    fn snapshot(&mut self, caption: SortEvent) {
        let mut nodes = self.nodes.clone();
        nodes.sort_by(|a, b| a.level.cmp(&b.level).then(a.x.total_cmp(&b.x)));
        let max_level = self.nodes.iter().map(|node| node.level).max().unwrap_or(0);

        tracing::trace!(step = self.frames.len(), %caption, "frame");
        self.frames.push(SortFrame {
            nodes,
            edges: self.edges.clone(),
            caption,
            n: self.input.len(),
            max_level,
        });
    }

    fn visit(&mut self, l: usize, r: usize, level: usize, parent: Option<NodeId>, side: Side) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let color = match side {
            Side::Root | Side::Left => Color::PendingLeft,
            Side::Right => Color::PendingRight,
        };
        self.nodes.push(Node {
            id,
            l,
            r,
            level,
            // midpoint of the covered cells, so [i, i+1) sits at i
            x: (l + r) as f64 / 2.0 - 0.5,
            arr: self.input[l..r].to_vec(),
            color,
            parent,
        });
        if let Some(parent) = parent {
            self.edges.push((parent, id));
        }
        self.snapshot(SortEvent::Create { l, r });

        if r - l <= 1 {
            self.nodes[id.index()].color = Color::Resolved;
            self.snapshot(SortEvent::Leaf { l, r });
            return id;
        }

        let mid = (l + r) / 2;
        let left = self.visit(l, mid, level + 1, Some(id), Side::Left);
        let right = self.visit(mid, r, level + 1, Some(id), Side::Right);

        let merged = merge_sorted(&self.nodes[left.index()].arr, &self.nodes[right.index()].arr);
        let node = &mut self.nodes[id.index()];
        node.arr = merged;
        node.color = Color::Resolved;
        self.snapshot(SortEvent::Merge { l, mid, r });
        return id;
    }
}

/// Sort `array` while recording a frame for every step of the recursion.
///
/// Empty input yields a single final frame with no nodes.
pub fn trace<T: Clone + PartialOrd>(array: &[T]) -> Trace<SortFrame<T>> {
    debug!(len = array.len(), "tracing merge sort");

    let mut builder = Builder::new(array);
    if !array.is_empty() {
        builder.visit(0, array.len(), 0, None, Side::Root);
    }
    builder.snapshot(SortEvent::Final);

    debug!(frames = builder.frames.len(), nodes = builder.nodes.len(), "merge sort traced");
    return Trace::from_frames(builder.frames);
}
