//! Build errors for the state machine builder.

use crate::core::{Event, State};
use crate::table::DuplicateTransition;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError<S: State, E: Event> {
    #[error("initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(
        "duplicate transition from state '{}' on event '{}'",
        .from.name(),
        .event.name()
    )]
    DuplicateTransition { from: S, event: E },
}

impl<S: State, E: Event> From<DuplicateTransition<S, E>> for BuildError<S, E> {
    fn from(err: DuplicateTransition<S, E>) -> Self {
        Self::DuplicateTransition {
            from: err.from,
            event: err.event,
        }
    }
}
