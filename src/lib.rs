#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod graph;
pub mod util;
