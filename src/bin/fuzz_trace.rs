//! AFL fuzz harness for the tracers.
//!
//! The first input byte picks where to split the rest of the input into two
//! arrays. The harness checks:
//! 1. Merge sort: frame count, id order, tree shape, sorted root.
//! 2. Two-way merge: cursor bookkeeping and a fully populated output, both
//!    for sorted inputs and for the raw (possibly unsorted) bytes.

use afl::fuzz;
use mergetrace::trace::merge_sort;
use mergetrace::trace::two_way::{self, Action};

fn check_merge_sort(values: &[u8]) {
    let trace = merge_sort::trace(values);
    assert_eq!(trace.len(), merge_sort::frame_count(values.len()), "frame count mismatch");

    let last = trace.last().expect("trace is never empty");
    assert_eq!(last.nodes.len(), merge_sort::node_count(values.len()));
    if values.is_empty() {
        assert!(last.nodes.is_empty() && last.edges.is_empty());
        return;
    }
    assert_eq!(last.edges.len(), last.nodes.len() - 1, "not a tree");

    let mut sorted = values.to_vec();
    sorted.sort();
    assert_eq!(last.root().expect("root exists").arr, sorted, "root is not sorted");

    // ids appear in creation order, one new node per create frame
    let mut seen = 0;
    for frame in &trace {
        assert!(frame.nodes.len() >= seen, "nodes disappeared");
        seen = frame.nodes.len();
        for node in &frame.nodes {
            assert_eq!(node.arr.len(), node.len(), "contents do not match interval");
        }
    }
}

fn check_two_way(a: &[u8], b: &[u8]) {
    let trace = two_way::trace_merge(a, b);
    let mut interleaved = 0;
    for frame in &trace {
        assert_eq!(frame.i + frame.j, frame.k, "cursor drift");
        assert_eq!(frame.filled(), frame.k, "k does not count filled slots");
        if frame.action == Action::Compare {
            interleaved += 1;
        }
    }
    assert_eq!(trace.len(), two_way::frame_count(a.len(), b.len(), interleaved));

    let done = trace.last().expect("trace is never empty");
    assert_eq!(done.action, Action::Done);
    assert_eq!(done.filled(), a.len() + b.len(), "output not fully populated");
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((&split, rest)) = data.split_first() else {
            return;
        };
        // keep the recursion and per-frame copies small
        let rest = &rest[..rest.len().min(64)];
        let split = (split as usize) % (rest.len() + 1);
        let (a, b) = rest.split_at(split);

        check_merge_sort(rest);

        let mut sorted_a = a.to_vec();
        let mut sorted_b = b.to_vec();
        sorted_a.sort();
        sorted_b.sort();
        check_two_way(&sorted_a, &sorted_b);
        check_two_way(a, b);
    });
}
