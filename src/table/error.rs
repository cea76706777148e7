//! Registration errors for the transition table.

use crate::core::{Event, State};
use thiserror::Error;

/// A transition is already registered for this (state, event) pair.
///
/// Returned from registration when the key is occupied. The table is left
/// exactly as it was before the failing call; callers may treat the
/// collision as fatal or skip it and continue.
///
/// Carries the offending pair for diagnostics and programmatic handling.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error(
    "duplicate transition from state '{}' on event '{}'",
    .from.name(),
    .event.name()
)]
pub struct DuplicateTransition<S: State, E: Event> {
    /// Origin state of the rejected registration
    pub from: S,
    /// Triggering event of the rejected registration
    pub event: E,
}
