//! Core state machine types.
//!
//! This module contains the domain traits and value types the engine is
//! generic over:
//! - State definitions via the `State` trait
//! - Event definitions via the `Event` trait
//! - Immutable history tracking of dispatched transitions
//!
//! Everything here is a plain value or a pure trait method; the mutable
//! engine lives in [`crate::machine`].

mod event;
mod history;
mod state;

pub use event::Event;
pub use history::{TransitionHistory, TransitionRecord};
pub use state::State;
