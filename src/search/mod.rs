//! Search module for the Magnetic Cave engine
//!
//! Contains:
//! - Clocks and deadlines for time-bounded search
//! - Depth-limited minimax over in-place board mutations

pub mod clock;
pub mod minimax;

pub use clock::{Clock, Deadline, ManualClock, StepClock, SystemClock};
pub use minimax::{Minimax, SearchStats};
