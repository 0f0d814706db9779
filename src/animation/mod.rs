mod zigzag;

pub use zigzag::{frame, run, Zigzag, BOUND, MARKER};
