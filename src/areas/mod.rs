//! Shared front-end state
//!
//! - `toolbox`: owns the output writer and the failure status of a run

pub mod toolbox;
