//! Utility modules: auth provider seam, display formatting, map provider seam.

pub mod auth;
pub mod format;
pub mod map;
