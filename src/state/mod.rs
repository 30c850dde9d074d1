//! Client-side state owned by the hosting UI.
//!
//! DESIGN
//! ======
//! Plain data structs with small mutation helpers, kept separate from the
//! pass-through services so presentation state can evolve independently of
//! backend contracts. Hosts wrap these in whatever reactivity layer they
//! render with.

pub mod auth;
pub mod chat;
pub mod ui;
