//! Frame-recording tracers for merge sort and two-way merge.
//!
//! Each tracer runs its algorithm to completion and returns a [`Trace`]: the
//! full, ordered list of frames describing the run. Frames are complete
//! snapshots, never diffs, so a consumer can jump to any index.

pub mod merge_sort;
pub mod two_way;

/// A single snapshot of algorithm state.
pub trait Frame {
    /// Human-readable description of the event that produced this frame.
    fn caption(&self) -> String;
}

/// The ordered frames produced by one tracer run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace<F> {
    frames: Vec<F>,
}

impl<F> Trace<F> {
    pub(crate) fn from_frames(frames: Vec<F>) -> Trace<F> {
        return Trace { frames };
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        return self.frames.len();
    }

    /// Check if the trace has no frames.
    pub fn is_empty(&self) -> bool {
        return self.frames.is_empty();
    }

    /// Get the frame at `index`.
    pub fn get(&self, index: usize) -> Option<&F> {
        return self.frames.get(index);
    }

    /// The terminal frame.
    pub fn last(&self) -> Option<&F> {
        return self.frames.last();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        return self.frames.iter();
    }

    pub fn frames(&self) -> &[F] {
        return &self.frames;
    }

    pub fn into_frames(self) -> Vec<F> {
        return self.frames;
    }
}

impl<F: Frame> Trace<F> {
    /// Captions of every frame, in order.
    pub fn captions(&self) -> Vec<String> {
        return self.frames.iter().map(Frame::caption).collect();
    }
}

impl<'a, F> IntoIterator for &'a Trace<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        return self.frames.iter();
    }
}
