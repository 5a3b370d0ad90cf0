//! Controller layer: terminal input events, demo state transitions, and signal output.

pub mod commands;
pub mod session;
