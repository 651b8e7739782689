//! Integration tests for the two-way merge tracer.

use mergetrace::trace::Frame;
use mergetrace::trace::two_way::{self, Action, MergeFrame};

fn actions<T>(frames: &[MergeFrame<T>]) -> Vec<Action> {
    return frames.iter().map(|frame| frame.action).collect();
}

#[test]
fn classroom_example() {
    let trace = two_way::trace_merge(&[1, 4, 7], &[2, 3, 8, 9]);
    assert_eq!(
        actions(trace.frames()),
        vec![
            Action::Start,
            Action::Compare,
            Action::TakeA,
            Action::Compare,
            Action::TakeB,
            Action::Compare,
            Action::TakeB,
            Action::Compare,
            Action::TakeA,
            Action::Compare,
            Action::TakeA,
            Action::DrainB,
            Action::DrainB,
            Action::Done,
        ]
    );
    assert_eq!(trace.len(), two_way::frame_count(3, 4, 5));

    let done = trace.last().unwrap();
    assert_eq!(done.merged(), Some(vec![1, 2, 3, 4, 7, 8, 9]));
    assert_eq!((done.i, done.j, done.k), (3, 4, 7));
}

#[test]
fn start_frame_copies_inputs() {
    let trace = two_way::trace_merge(&[1, 4, 7], &[2, 3, 8, 9]);
    let start = trace.get(0).unwrap();
    assert_eq!(start.action, Action::Start);
    assert_eq!(start.a, vec![1, 4, 7]);
    assert_eq!(start.b, vec![2, 3, 8, 9]);
    assert_eq!(start.c, vec![None; 7]);
    assert_eq!((start.i, start.j, start.k), (0, 0, 0));
}

#[test]
fn inputs_never_change() {
    let trace = two_way::trace_merge(&[5, 6], &[1, 7]);
    for frame in &trace {
        assert_eq!(frame.a, vec![5, 6]);
        assert_eq!(frame.b, vec![1, 7]);
        assert_eq!(frame.c.len(), 4);
    }
}

#[test]
fn cursors_track_filled_slots() {
    let trace = two_way::trace_merge(&[1, 3, 5, 7], &[2, 2, 6]);
    let mut takes = 0;
    for frame in &trace {
        if frame.action.fills_slot() {
            takes += 1;
        }
        assert_eq!(frame.k, takes);
        assert_eq!(frame.filled(), frame.k);
        assert_eq!(frame.i + frame.j, frame.k);
    }
}

#[test]
fn each_take_advances_one_cursor() {
    let trace = two_way::trace_merge(&[1, 3, 5], &[2, 4]);
    for pair in trace.frames().windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let advanced = (next.i + next.j) - (prev.i + prev.j);
        let expected = if next.action.fills_slot() { 1 } else { 0 };
        assert_eq!(advanced, expected, "{} -> {}", prev.caption(), next.caption());
    }
}

#[test]
fn ties_prefer_a() {
    #[derive(Clone, Debug, PartialEq)]
    struct Tagged(i32, char);

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            return self.0.partial_cmp(&other.0);
        }
    }

    let a = [Tagged(1, 'a'), Tagged(2, 'a')];
    let b = [Tagged(1, 'b'), Tagged(2, 'b')];
    let trace = two_way::trace_merge(&a, &b);
    let tags: Vec<char> = trace.last().unwrap().merged().unwrap().iter().map(|t| t.1).collect();
    assert_eq!(tags, vec!['a', 'b', 'a', 'b']);
}

#[test]
fn drains_a_when_b_runs_out() {
    let trace = two_way::trace_merge(&[5, 6, 7], &[1]);
    assert_eq!(
        actions(trace.frames()),
        vec![Action::Start, Action::Compare, Action::TakeB, Action::DrainA, Action::DrainA, Action::DrainA, Action::Done]
    );
}

#[test]
fn unsorted_input_does_not_fail() {
    let trace = two_way::trace_merge(&[3, 1, 2], &[0, 9, 4]);
    let done = trace.last().unwrap();
    assert_eq!(done.action, Action::Done);
    let merged = done.merged().unwrap();
    assert_eq!(merged.len(), 6);

    let mut sorted_merged = merged.clone();
    sorted_merged.sort();
    assert_eq!(sorted_merged, vec![0, 1, 2, 3, 4, 9]);
}

#[test]
fn captions_describe_actions() {
    let trace = two_way::trace_merge(&[1], &[]);
    assert_eq!(trace.captions(), vec!["start", "copy rest of A -> C", "done"]);
}
