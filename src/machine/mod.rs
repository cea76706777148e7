//! The state machine engine: current state, transition table, dispatch.
//!
//! A [`StateMachine`] owns exactly one transition table and one mutable
//! current-state field. Registration populates the table (usually once, up
//! front, though interleaving with dispatch is allowed); `send_event` drives
//! state changes one event at a time. Every operation is synchronous and
//! runs to completion on the calling thread.

use crate::checkpoint::{Checkpoint, CHECKPOINT_VERSION};
use crate::core::{Event, State, TransitionHistory, TransitionRecord};
use crate::table::{Action, DuplicateTransition, TransitionTable};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub mod builder;
pub mod error;

pub use builder::StateMachineBuilder;
pub use error::BuildError;

/// A deterministic transition-table state machine.
///
/// # Example
///
/// ```rust
/// use switchyard::machine::StateMachine;
/// use switchyard::{event_enum, state_enum};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// state_enum! {
///     enum Lamp { Off, On }
/// }
/// event_enum! {
///     enum LampEvent { Toggle }
/// }
///
/// let flips = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&flips);
///
/// let mut machine = StateMachine::new(Lamp::Off);
/// machine
///     .add_transition_with(Lamp::Off, Lamp::On, LampEvent::Toggle, move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     })
///     .unwrap();
/// machine
///     .add_transition(Lamp::On, Lamp::Off, LampEvent::Toggle)
///     .unwrap();
///
/// machine.send_event(LampEvent::Toggle);
/// machine.send_event(LampEvent::Toggle);
/// assert_eq!(machine.state(), &Lamp::Off);
/// assert_eq!(flips.load(Ordering::SeqCst), 1);
/// ```
pub struct StateMachine<S: State, E: Event> {
    current: S,
    table: TransitionTable<S, E>,
    history: TransitionHistory<S, E>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a new machine in the given initial state, with an empty
    /// transition table.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            table: TransitionTable::new(),
            history: TransitionHistory::new(),
        }
    }

    /// Get the current state.
    ///
    /// Reflects the most recent successful dispatch, or the initial state
    /// if none have occurred.
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in a final state.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get the history of transitions this machine has taken.
    pub fn history(&self) -> &TransitionHistory<S, E> {
        &self.history
    }

    /// Register a transition, with an optional action.
    ///
    /// This is the general form; the `add_*` methods below are sugar over
    /// it. Fails with [`DuplicateTransition`] if the `(from, event)` pair is
    /// already taken, leaving the table unchanged.
    pub fn register(
        &mut self,
        from: S,
        to: S,
        event: E,
        action: Option<Action>,
    ) -> Result<(), DuplicateTransition<S, E>> {
        self.table.register(from, to, event, action)
    }

    /// Register a transition with no action.
    pub fn add_transition(
        &mut self,
        from: S,
        to: S,
        event: E,
    ) -> Result<(), DuplicateTransition<S, E>> {
        self.table.register(from, to, event, None)
    }

    /// Register a transition whose action runs before the state update.
    pub fn add_transition_with<F>(
        &mut self,
        from: S,
        to: S,
        event: E,
        action: F,
    ) -> Result<(), DuplicateTransition<S, E>>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.table.register(from, to, event, Some(Arc::new(action)))
    }

    /// Register a self-loop with no action.
    pub fn add_self_transition(
        &mut self,
        from: S,
        event: E,
    ) -> Result<(), DuplicateTransition<S, E>> {
        self.table.register_self(from, event, None)
    }

    /// Register a self-loop whose action runs on every matched dispatch.
    pub fn add_self_transition_with<F>(
        &mut self,
        from: S,
        event: E,
        action: F,
    ) -> Result<(), DuplicateTransition<S, E>>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.table.register_self(from, event, Some(Arc::new(action)))
    }

    /// Feed one event to the machine.
    ///
    /// If no transition is registered for the (current state, event) pair
    /// the event is silently ignored: this models "this event is irrelevant
    /// in this state" and is not an error.
    ///
    /// If a transition matches, its action (if any) is invoked first, then
    /// the new state is committed and recorded in the history. A panicking
    /// action propagates to the caller and the current state is left
    /// unchanged, since the update only happens after the action returns.
    pub fn send_event(&mut self, event: E) {
        let Some(entry) = self.table.lookup(&self.current, &event) else {
            tracing::trace!(
                state = self.current.name(),
                event = event.name(),
                "no transition registered; event ignored"
            );
            return;
        };

        let to = entry.to.clone();
        let action = entry.action.clone();

        // Action first, state update second. The action has no access to
        // the engine; if it fails, the machine stays where it was.
        if let Some(action) = action {
            action();
        }

        tracing::debug!(
            from = self.current.name(),
            to = to.name(),
            event = event.name(),
            "state transition"
        );

        let record = TransitionRecord {
            from: self.current.clone(),
            to: to.clone(),
            event,
            timestamp: Utc::now(),
        };
        self.history = self.history.record(record);
        self.current = to;
    }

    /// Snapshot the machine's current state and history.
    ///
    /// The transition table is deliberately not part of the snapshot:
    /// actions are not serializable, and the table is re-registered by the
    /// caller on [`resume`](Self::resume).
    pub fn checkpoint(&self) -> Checkpoint<S, E> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            current_state: self.current.clone(),
            history: self.history.clone(),
        }
    }

    /// Restore a machine from a checkpoint.
    ///
    /// The restored machine carries the checkpoint's state and history and
    /// an empty transition table; re-register transitions before dispatching
    /// events.
    pub fn resume(checkpoint: Checkpoint<S, E>) -> Self {
        Self {
            current: checkpoint.current_state,
            table: TransitionTable::new(),
            history: checkpoint.history,
        }
    }
}
