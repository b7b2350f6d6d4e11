//! Spin resolution and animation engine for the prize wheel.
//!
//! Nothing in this crate touches a browser API. The web front-end drives a
//! [`Wheel`] from its `requestAnimationFrame` loop and renders through a
//! [`WheelObserver`]; tests drive the same engine with synthetic timestamps.

pub mod animator;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod planner;
pub mod segment;
pub mod selector;
pub mod wheel;

pub use animator::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use loader::*;
pub use planner::*;
pub use segment::*;
pub use selector::*;
pub use wheel::*;
