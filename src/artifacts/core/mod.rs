//! Shared utilities
//!
//! - `error`: the [`ToolError`](error::ToolError) reported by every tool
//! - `pager`: paged output for long results on interactive terminals

pub mod error;
pub mod pager;
