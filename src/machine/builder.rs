//! Builder for constructing state machines with a fluent API.

use crate::core::{Event, State};
use crate::machine::error::BuildError;
use crate::machine::StateMachine;
use crate::table::Action;
use std::sync::Arc;

struct PendingTransition<S, E> {
    from: S,
    to: S,
    event: E,
    action: Option<Action>,
}

/// Fluent builder for a [`StateMachine`].
///
/// Transitions accumulate as they are declared; duplicates are detected
/// when [`build`](Self::build) registers them, so a conflicting pair
/// surfaces as a [`BuildError::DuplicateTransition`] rather than a panic.
///
/// # Example
///
/// ```rust
/// use switchyard::machine::StateMachineBuilder;
/// use switchyard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Job { Queued, Running, Finished }
/// }
/// event_enum! {
///     enum JobEvent { Start, Complete }
/// }
///
/// let mut machine = StateMachineBuilder::new()
///     .initial(Job::Queued)
///     .transition(Job::Queued, Job::Running, JobEvent::Start)
///     .transition(Job::Running, Job::Finished, JobEvent::Complete)
///     .build()
///     .unwrap();
///
/// machine.send_event(JobEvent::Start);
/// assert_eq!(machine.state(), &Job::Running);
/// ```
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    transitions: Vec<PendingTransition<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a transition with no action.
    pub fn transition(mut self, from: S, to: S, event: E) -> Self {
        self.transitions.push(PendingTransition {
            from,
            to,
            event,
            action: None,
        });
        self
    }

    /// Declare a transition whose action runs before the state update.
    pub fn transition_with<F>(mut self, from: S, to: S, event: E, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.transitions.push(PendingTransition {
            from,
            to,
            event,
            action: Some(Arc::new(action)),
        });
        self
    }

    /// Declare a self-loop with no action.
    pub fn self_transition(self, from: S, event: E) -> Self {
        let to = from.clone();
        self.transition(from, to, event)
    }

    /// Declare a self-loop with an action.
    pub fn self_transition_with<F>(self, from: S, event: E, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let to = from.clone();
        self.transition_with(from, to, event, action)
    }

    /// Build the state machine.
    ///
    /// Fails if no initial state was set, or if two declared transitions
    /// share a (state, event) pair.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError<S, E>> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::new(initial);
        for pending in self.transitions {
            machine.register(pending.from, pending.to, pending.event, pending.action)?;
        }

        Ok(machine)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
