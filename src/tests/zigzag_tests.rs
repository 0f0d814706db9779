// src/tests/zigzag_tests.rs

use crate::animation::{frame, run, Zigzag, MARKER};
use std::sync::atomic::AtomicBool;
use std::time::Duration;

#[test]
fn indent_bounces_between_bounds() {
    let seq: Vec<usize> = Zigzag::default().take(19).collect();
    assert_eq!(
        seq,
        vec![0, 1, 2, 3, 4, 3, 2, 1, 0, 1, 2, 3, 4, 3, 2, 1, 0, 1, 2]
    );
}

#[test]
fn indent_never_leaves_range() {
    assert!(Zigzag::default().take(1_000).all(|i| i < 5));
}

#[test]
fn degenerate_bound_stays_at_zero() {
    assert!(Zigzag::new(1).take(10).all(|i| i == 0));
}

#[test]
fn frame_is_indent_then_marker() {
    assert_eq!(frame(0, MARKER), "********");
    assert_eq!(frame(3, MARKER), "   ********");
}

#[test]
fn run_draws_limited_frames() {
    let stop = AtomicBool::new(false);
    let mut out = Vec::new();

    let drawn = run(&mut out, Duration::ZERO, Some(6), &stop).unwrap();
    assert_eq!(drawn, 6);

    let text = String::from_utf8(out).unwrap();
    let indents: Vec<usize> = text
        .lines()
        .map(|l| l.len() - l.trim_start().len())
        .collect();
    assert_eq!(indents, vec![0, 1, 2, 3, 4, 3]);
    assert!(text.lines().all(|l| l.trim_start() == MARKER));
}

#[test]
fn run_stops_when_flag_is_set() {
    let stop = AtomicBool::new(true);
    let mut out = Vec::new();

    let drawn = run(&mut out, Duration::ZERO, None, &stop).unwrap();
    assert_eq!(drawn, 0);
    assert!(out.is_empty());
}

#[test]
fn run_returns_right_after_last_frame() {
    let stop = AtomicBool::new(false);
    let mut out = Vec::new();

    let start = std::time::Instant::now();
    let drawn = run(&mut out, Duration::from_millis(500), Some(1), &stop).unwrap();

    assert_eq!(drawn, 1);
    assert!(start.elapsed() < Duration::from_millis(400));
}
