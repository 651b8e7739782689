//! Mergetrace - step-by-step traces of merge sort for classroom visualization.
//!
//! The tracers run an algorithm to completion and return every intermediate
//! state as a [`trace::Trace`] of frames. Drawing the frames is left to the
//! caller; the crate only produces plain data.
//!
//! - [`trace::merge_sort`]: recursive merge sort, one tree node per call.
//! - [`trace::two_way`]: linear merge of two sorted arrays with cursors `i`, `j`, `k`.
//! - [`step::Stepper`]: walk a finished trace forward and backward.
//! - [`input`]: parse comma-separated arrays or draw random ones.
//!
//! # Quick Start
//!
//! ```
//! use mergetrace::step::Stepper;
//! use mergetrace::trace::merge_sort;
//!
//! let trace = merge_sort::trace(&[3, 1, 2]);
//! assert_eq!(trace.len(), merge_sort::frame_count(3));
//!
//! let mut stepper = Stepper::new(&trace);
//! assert_eq!(stepper.label().unwrap(), "step 1/11: create node [0:3)");
//! stepper.seek(usize::MAX);
//! assert_eq!(stepper.label().unwrap(), "step 11/11: final sorted result");
//! ```

pub mod input;
pub mod step;
pub mod trace;
