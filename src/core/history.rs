//! Transition history tracking.
//!
//! Provides immutable tracking of the transitions a machine has taken over
//! time. Only *taken* transitions are recorded; events absorbed as no-ops
//! leave no trace here.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched transition.
///
/// Records are immutable values representing a move from one state to
/// another, triggered by a specific event, at a specific point in time.
///
/// # Example
///
/// ```rust
/// use switchyard::core::TransitionRecord;
/// use switchyard::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Door { Open, Closed }
/// }
/// event_enum! {
///     enum DoorEvent { Push }
/// }
///
/// let record = TransitionRecord {
///     from: Door::Open,
///     to: Door::Closed,
///     event: DoorEvent::Push,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that triggered the transition
    pub event: E,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of dispatched transitions.
///
/// History is immutable - the `record` method returns a new history with
/// the record added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{TransitionHistory, TransitionRecord};
/// use switchyard::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Phase { One, Two, Three }
/// }
/// event_enum! {
///     enum Step { Next }
/// }
///
/// let history = TransitionHistory::new();
///
/// let history = history.record(TransitionRecord {
///     from: Phase::One,
///     to: Phase::Two,
///     event: Step::Next,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(TransitionRecord {
///     from: Phase::Two,
///     to: Phase::Three,
///     event: Step::Next,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 3); // One -> Two -> Three
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionHistory<S: State, E: Event> {
    records: Vec<TransitionRecord<S, E>>,
}

impl<S: State, E: Event> Default for TransitionHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record appended.
    pub fn record(&self, record: TransitionRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the origin of the first
    /// record, then the destination of each record.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last recorded transition.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in dispatch order.
    pub fn records(&self) -> &[TransitionRecord<S, E>] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Done => "Done",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Done)
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Finish,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
            }
        }
    }

    fn record(from: TestState, to: TestState, event: TestEvent) -> TransitionRecord<TestState, TestEvent> {
        TransitionRecord {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: TransitionHistory<TestState, TestEvent> = TransitionHistory::new();
        assert_eq!(history.records().len(), 0);
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_adds_transition() {
        let history = TransitionHistory::new();
        let history = history.record(record(TestState::Idle, TestState::Running, TestEvent::Start));
        assert_eq!(history.records().len(), 1);
    }

    #[test]
    fn record_is_immutable() {
        let history = TransitionHistory::new();
        let new_history =
            history.record(record(TestState::Idle, TestState::Running, TestEvent::Start));

        assert_eq!(history.records().len(), 0);
        assert_eq!(new_history.records().len(), 1);
    }

    #[test]
    fn path_returns_state_sequence() {
        let history = TransitionHistory::new()
            .record(record(TestState::Idle, TestState::Running, TestEvent::Start))
            .record(record(TestState::Running, TestState::Done, TestEvent::Finish));

        let path = history.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Idle);
        assert_eq!(path[1], &TestState::Running);
        assert_eq!(path[2], &TestState::Done);
    }

    #[test]
    fn records_keep_the_triggering_event() {
        let history = TransitionHistory::new()
            .record(record(TestState::Idle, TestState::Running, TestEvent::Start));

        assert_eq!(history.records()[0].event, TestEvent::Start);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = TransitionHistory::new().record(TransitionRecord {
            from: TestState::Idle,
            to: TestState::Running,
            event: TestEvent::Start,
            timestamp: start,
        });

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(record(TestState::Running, TestState::Done, TestEvent::Finish));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_record_has_duration_zero() {
        let timestamp = Utc::now();
        let history = TransitionHistory::new().record(TransitionRecord {
            from: TestState::Idle,
            to: TestState::Running,
            event: TestEvent::Start,
            timestamp,
        });

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = TransitionHistory::new()
            .record(record(TestState::Idle, TestState::Running, TestEvent::Start));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TransitionHistory<TestState, TestEvent> =
            serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
