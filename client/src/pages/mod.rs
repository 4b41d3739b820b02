//! Route-level pages.

pub mod catalog;
pub mod map;
pub mod property_detail;
