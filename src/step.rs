//! Forward/backward navigation over a finished trace.
//!
//! A stepper is only an index into the trace. Moving it never generates
//! frames, and every move clamps at both ends.

use crate::trace::Frame;
use crate::trace::Trace;

/// A cursor over the frames of a [`Trace`].
#[derive(Clone, Debug)]
pub struct Stepper<'a, F> {
    trace: &'a Trace<F>,
    position: usize,
}

impl<'a, F> Stepper<'a, F> {
    /// Create a stepper positioned at the first frame.
    pub fn new(trace: &'a Trace<F>) -> Stepper<'a, F> {
        return Stepper { trace, position: 0 };
    }

    /// Index of the current frame.
    pub fn position(&self) -> usize {
        return self.position;
    }

    /// Total number of frames.
    pub fn len(&self) -> usize {
        return self.trace.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.trace.is_empty();
    }

    /// The frame under the cursor; `None` only for an empty trace.
    pub fn current(&self) -> Option<&'a F> {
        return self.trace.get(self.position);
    }

    pub fn is_at_start(&self) -> bool {
        return self.position == 0;
    }

    pub fn is_at_end(&self) -> bool {
        return self.position + 1 >= self.trace.len();
    }

    /// Advance one frame. Returns whether the position changed.
    pub fn next(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        return true;
    }

    /// Go back one frame. Returns whether the position changed.
    pub fn prev(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.position -= 1;
        return true;
    }

    /// Jump to `index`, clamped to the last frame.
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.trace.len().saturating_sub(1));
    }
}

impl<'a, F: Frame> Stepper<'a, F> {
    /// `"step {n}/{total}: {caption}"`, counting from 1.
    pub fn label(&self) -> Option<String> {
        let frame = self.current()?;
        return Some(format!("step {}/{}: {}", self.position + 1, self.trace.len(), frame.caption()));
    }
}
