//! Domain types for the wrestling roster: reference tables, wrestlers,
//! championships and the match narrator.
//!
//! Storage lives behind [`store::RosterStore`]; nothing here touches a
//! database or a transport.

pub mod championship;
pub mod error;
pub mod narrator;
pub mod reference;
pub mod store;
pub mod wrestler;

pub use error::{Error, Result};
