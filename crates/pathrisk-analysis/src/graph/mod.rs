//! Transition graph between situations and breadth-first threat-level extraction.

pub mod levels;
pub mod types;

pub use levels::path_profile;
pub use types::{PathProfile, TransitionGraph, TransitionKind};
