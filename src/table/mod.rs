//! Transition table: the mapping from (state, event) to a transition.
//!
//! The table is an associative store keyed by the (state, event) pair. It
//! enforces at most one transition per key, which is what makes dispatch
//! deterministic: an ambiguous transition function is rejected at
//! registration time instead of being resolved arbitrarily later.

use crate::core::{Event, State};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub mod error;

pub use error::DuplicateTransition;

/// A transition action: a zero-argument, side-effecting closure.
///
/// Actions may capture whatever caller context they need (through `Arc`,
/// atomics, channels, and so on) but have no access to engine internals.
/// They run synchronously during dispatch, before the state update commits.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// The value a (state, event) key maps to: a destination state and an
/// optional action to run on the way there.
#[derive(Clone)]
pub struct TransitionEntry<S: State> {
    /// Destination state of the transition
    pub to: S,
    /// Action invoked before the state update, if any
    pub action: Option<Action>,
}

impl<S: State> fmt::Debug for TransitionEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionEntry")
            .field("to", &self.to)
            .field("action", &self.action.as_ref().map(|_| "<action>"))
            .finish()
    }
}

/// The full set of registered transitions for one machine instance.
///
/// # Example
///
/// ```rust
/// use switchyard::table::TransitionTable;
/// use switchyard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Valve { Closed, Open }
/// }
/// event_enum! {
///     enum ValveEvent { Turn }
/// }
///
/// let mut table = TransitionTable::new();
/// table
///     .register(Valve::Closed, Valve::Open, ValveEvent::Turn, None)
///     .unwrap();
///
/// assert!(table.lookup(&Valve::Closed, &ValveEvent::Turn).is_some());
/// assert!(table.lookup(&Valve::Open, &ValveEvent::Turn).is_none());
///
/// // The key is now taken, regardless of destination or action.
/// let err = table
///     .register(Valve::Closed, Valve::Closed, ValveEvent::Turn, None)
///     .unwrap_err();
/// assert_eq!(err.from, Valve::Closed);
/// assert_eq!(err.event, ValveEvent::Turn);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event> {
    entries: HashMap<(S, E), TransitionEntry<S>>,
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a transition from `from` to `to`, triggered by `event`.
    ///
    /// Fails with [`DuplicateTransition`] if a transition is already
    /// registered for the `(from, event)` pair. On failure the table is
    /// unchanged; on success the new mapping is immediately visible to
    /// [`lookup`](Self::lookup).
    pub fn register(
        &mut self,
        from: S,
        to: S,
        event: E,
        action: Option<Action>,
    ) -> Result<(), DuplicateTransition<S, E>> {
        let key = (from, event);
        if self.entries.contains_key(&key) {
            let (from, event) = key;
            return Err(DuplicateTransition { from, event });
        }

        tracing::debug!(
            from = key.0.name(),
            to = to.name(),
            event = key.1.name(),
            "transition registered"
        );
        self.entries.insert(key, TransitionEntry { to, action });
        Ok(())
    }

    /// Register a self-loop: a transition whose destination equals its
    /// origin.
    ///
    /// Shares the key space and uniqueness check with
    /// [`register`](Self::register) - a self-loop and a general transition
    /// for the same (state, event) pair conflict with each other.
    pub fn register_self(
        &mut self,
        from: S,
        event: E,
        action: Option<Action>,
    ) -> Result<(), DuplicateTransition<S, E>> {
        let to = from.clone();
        self.register(from, to, event, action)
    }

    /// Look up the transition for a (state, event) pair.
    ///
    /// Pure read; absence is a normal outcome, not an error.
    pub fn lookup(&self, state: &S, event: &E) -> Option<&TransitionEntry<S>> {
        self.entries.get(&(state.clone(), event.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        A,
        B,
        C,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::A => "A",
                Self::B => "B",
                Self::C => "C",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Go,
        Stop,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Go => "Go",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn registered_transition_is_visible_to_lookup() {
        let mut table = TransitionTable::new();
        table
            .register(TestState::A, TestState::B, TestEvent::Go, None)
            .unwrap();

        let entry = table.lookup(&TestState::A, &TestEvent::Go).unwrap();
        assert_eq!(entry.to, TestState::B);
        assert!(entry.action.is_none());
    }

    #[test]
    fn lookup_miss_returns_none() {
        let table: TransitionTable<TestState, TestEvent> = TransitionTable::new();
        assert!(table.lookup(&TestState::A, &TestEvent::Go).is_none());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut table = TransitionTable::new();
        table
            .register(TestState::A, TestState::B, TestEvent::Go, None)
            .unwrap();

        // Destination and action are irrelevant to the collision.
        let err = table
            .register(TestState::A, TestState::C, TestEvent::Go, None)
            .unwrap_err();

        assert_eq!(err.from, TestState::A);
        assert_eq!(err.event, TestEvent::Go);
    }

    #[test]
    fn failed_registration_leaves_table_unchanged() {
        let mut table = TransitionTable::new();
        table
            .register(TestState::A, TestState::B, TestEvent::Go, None)
            .unwrap();

        let result = table.register(TestState::A, TestState::C, TestEvent::Go, None);
        assert!(result.is_err());

        // The original mapping survives untouched.
        let entry = table.lookup(&TestState::A, &TestEvent::Go).unwrap();
        assert_eq!(entry.to, TestState::B);
    }

    #[test]
    fn self_loop_targets_its_own_origin() {
        let mut table = TransitionTable::new();
        table
            .register_self(TestState::B, TestEvent::Stop, None)
            .unwrap();

        let entry = table.lookup(&TestState::B, &TestEvent::Stop).unwrap();
        assert_eq!(entry.to, TestState::B);
    }

    #[test]
    fn self_loop_conflicts_with_general_transition() {
        let mut table = TransitionTable::new();
        table
            .register(TestState::A, TestState::B, TestEvent::Go, None)
            .unwrap();

        let err = table
            .register_self(TestState::A, TestEvent::Go, None)
            .unwrap_err();

        assert_eq!(err.from, TestState::A);
        assert_eq!(err.event, TestEvent::Go);
    }

    #[test]
    fn same_event_in_different_states_does_not_conflict() {
        let mut table = TransitionTable::new();
        table
            .register(TestState::A, TestState::B, TestEvent::Go, None)
            .unwrap();
        table
            .register(TestState::B, TestState::C, TestEvent::Go, None)
            .unwrap();

        assert_eq!(
            table.lookup(&TestState::A, &TestEvent::Go).unwrap().to,
            TestState::B
        );
        assert_eq!(
            table.lookup(&TestState::B, &TestEvent::Go).unwrap().to,
            TestState::C
        );
    }

    #[test]
    fn entries_carry_their_action() {
        let mut table = TransitionTable::new();
        table
            .register(
                TestState::A,
                TestState::B,
                TestEvent::Go,
                Some(Arc::new(|| {})),
            )
            .unwrap();

        let entry = table.lookup(&TestState::A, &TestEvent::Go).unwrap();
        assert!(entry.action.is_some());
    }
}
