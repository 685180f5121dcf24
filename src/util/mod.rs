//! Shared utilities.

pub mod retry;
pub mod text;
pub mod timeout;
