//! Application state containers.
//!
//! DESIGN
//! ======
//! Plain structs with pure transition methods. Components hold them inside
//! `RwSignal`s (the root provides `SessionState` and `ModalState` as
//! context), so every transition is testable without a reactive runtime.

pub mod filters;
pub mod gallery;
pub mod map;
pub mod modal;
pub mod session;
