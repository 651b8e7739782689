//! Step-by-step merge of two sorted arrays.
//!
//! Three cursors walk the run: `i` over `a`, `j` over `b`, and `k` over the
//! output `c`. Each comparison gets its own frame before the winning element
//! is moved, so a renderer can highlight `a[i]` against `b[j]` first and then
//! show where the element landed.
//!
//! # Example
//!
//! ```
//! use mergetrace::trace::two_way::{self, Action};
//!
//! let trace = two_way::trace_merge(&[1, 4, 7], &[2, 3, 8, 9]);
//! let done = trace.last().unwrap();
//! assert_eq!(done.action, Action::Done);
//! assert_eq!(done.merged(), Some(vec![1, 2, 3, 4, 7, 8, 9]));
//! ```

use std::fmt;

use tracing::debug;

use super::Frame;
use super::Trace;

/// What happened to produce a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Action {
    Start,
    /// `a[i]` and `b[j]` are about to be compared; no cursor has moved.
    Compare,
    TakeA,
    TakeB,
    /// Copy of a leftover element of `a` after `b` ran out.
    DrainA,
    /// Copy of a leftover element of `b` after `a` ran out.
    DrainB,
    Done,
}

impl Action {
    /// Whether this action wrote one element into the output.
    pub fn fills_slot(self) -> bool {
        return matches!(self, Action::TakeA | Action::TakeB | Action::DrainA | Action::DrainB);
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::Start => "start",
            Action::Compare => "compare A[i] and B[j]",
            Action::TakeA => "take A[i] -> C[k]; i++, k++",
            Action::TakeB => "take B[j] -> C[k]; j++, k++",
            Action::DrainA => "copy rest of A -> C",
            Action::DrainB => "copy rest of B -> C",
            Action::Done => "done",
        };
        return f.write_str(text);
    }
}

/// Snapshot of an in-progress merge.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MergeFrame<T> {
    pub a: Vec<T>,
    pub b: Vec<T>,
    /// Output slots; `None` until written.
    pub c: Vec<Option<T>>,
    pub i: usize,
    pub j: usize,
    pub k: usize,
    pub action: Action,
}

impl<T: Clone> MergeFrame<T> {
    /// The output, once every slot has been filled.
    pub fn merged(&self) -> Option<Vec<T>> {
        return self.c.iter().cloned().collect();
    }
}

impl<T> MergeFrame<T> {
    /// Number of output slots written so far.
    pub fn filled(&self) -> usize {
        return self.c.iter().filter(|slot| slot.is_some()).count();
    }
}

impl<T> Frame for MergeFrame<T> {
    fn caption(&self) -> String {
        return self.action.to_string();
    }
}

struct Merger<'a, T> {
    a: &'a [T],
    b: &'a [T],
    c: Vec<Option<T>>,
    i: usize,
    j: usize,
    k: usize,
    frames: Vec<MergeFrame<T>>,
}

impl<'a, T: Clone + PartialOrd> Merger<'a, T> {
    fn push(&mut self, action: Action) {
        tracing::trace!(step = self.frames.len(), %action, i = self.i, j = self.j, k = self.k, "frame");
        self.frames.push(MergeFrame {
            a: self.a.to_vec(),
            b: self.b.to_vec(),
            c: self.c.clone(),
            i: self.i,
            j: self.j,
            k: self.k,
            action,
        });
    }

    fn take_a(&mut self, action: Action) {
        self.c[self.k] = Some(self.a[self.i].clone());
        self.i += 1;
        self.k += 1;
        self.push(action);
    }

    fn take_b(&mut self, action: Action) {
        self.c[self.k] = Some(self.b[self.j].clone());
        self.j += 1;
        self.k += 1;
        self.push(action);
    }

    fn run(mut self) -> Vec<MergeFrame<T>> {
        self.push(Action::Start);

        while self.i < self.a.len() && self.j < self.b.len() {
            self.push(Action::Compare);
            if self.a[self.i] <= self.b[self.j] {
                self.take_a(Action::TakeA);
            } else {
                self.take_b(Action::TakeB);
            }
        }

        while self.i < self.a.len() {
            self.take_a(Action::DrainA);
        }
        while self.j < self.b.len() {
            self.take_b(Action::DrainB);
        }

        self.push(Action::Done);
        return self.frames;
    }
}

/// Number of frames [`trace_merge`] emits, given how many elements were
/// consumed while both inputs were non-empty.
pub fn frame_count(a_len: usize, b_len: usize, interleaved: usize) -> usize {
    let drained = a_len + b_len - interleaved;
    return 2 + 2 * interleaved + drained;
}

/// Merge `a` and `b`, recording a frame at every pointer step.
///
/// Both inputs are expected to be sorted ascending. That is not checked:
/// unsorted input still produces a fully populated output, just not a
/// sorted one. On equal elements `a` is taken first.
pub fn trace_merge<T: Clone + PartialOrd>(a: &[T], b: &[T]) -> Trace<MergeFrame<T>> {
    debug!(a_len = a.len(), b_len = b.len(), "tracing two-way merge");

    let merger = Merger {
        a,
        b,
        c: vec![None; a.len() + b.len()],
        i: 0,
        j: 0,
        k: 0,
        frames: Vec::new(),
    };
    let frames = merger.run();

    debug!(frames = frames.len(), "two-way merge traced");
    return Trace::from_frames(frames);
}
