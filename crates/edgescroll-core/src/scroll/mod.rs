//! Edge scrolling primitives
//!
//! - `predicate` - whether a surface can scroll further in a direction
//! - `continuous` - the self-rescheduling per-frame scroll loop

pub mod continuous;
pub mod predicate;

pub use continuous::{continuous_scroll, ContinuousScrollOptions, ScrollLoop};
pub use predicate::scrollable;
