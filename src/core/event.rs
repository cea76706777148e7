//! Core Event trait for state machine events.
//!
//! Events are the alphabet of the machine: external stimuli fed to the
//! engine one at a time. Their domain is independent from the state domain.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine events.
///
/// An event is a value from a finite, caller-defined discrete domain,
/// typically a plain enum.
///
/// # Required Traits
///
/// - `Clone`: events are cloned into history records and error values
/// - `Eq` + `Hash`: events are half of the (state, event) transition key
/// - `Debug`: events must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: events must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use switchyard::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum SessionEvent {
///     Connect,
///     AuthOk,
///     Disconnect,
/// }
///
/// impl Event for SessionEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Connect => "Connect",
///             Self::AuthOk => "AuthOk",
///             Self::Disconnect => "Disconnect",
///         }
///     }
/// }
/// ```
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Open,
        Close,
        Tick,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Close => "Close",
                Self::Tick => "Tick",
            }
        }
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::Open.name(), "Open");
        assert_eq!(TestEvent::Close.name(), "Close");
        assert_eq!(TestEvent::Tick.name(), "Tick");
    }

    #[test]
    fn event_is_usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(TestEvent::Open, "opened");
        assert_eq!(map.get(&TestEvent::Open), Some(&"opened"));
        assert_eq!(map.get(&TestEvent::Close), None);
    }

    #[test]
    fn event_serializes_correctly() {
        let event = TestEvent::Tick;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TestEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
