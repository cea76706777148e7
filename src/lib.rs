//! Switchyard: a deterministic transition-table state machine engine.
//!
//! Switchyard drives event-driven control logic: you declare a finite set of
//! states, a finite set of events, and a table of transitions mapping
//! (state, event) pairs to a destination state plus an optional side-effecting
//! action. Feeding the machine one event at a time then either applies the
//! single registered transition for that pair or, if none is registered,
//! silently ignores the event. Duplicate registrations for the same
//! (state, event) pair are rejected at registration time, which keeps the
//! transition function provably deterministic.
//!
//! The engine is synchronous and single-owner: every call runs to completion
//! on the calling thread, and a machine instance is driven by one logical
//! owner. It is built for embedding inside protocol handlers, session
//! managers, and similar dispatch loops.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: caller-defined enum domains via the [`State`] and
//!   [`Event`] traits (or the [`state_enum!`](crate::state_enum) /
//!   [`event_enum!`](crate::event_enum) macros)
//! - **Transition Table**: at most one transition per (state, event) key
//! - **Actions**: zero-argument closures run synchronously before the state
//!   update commits
//! - **History**: immutable record of the transitions a machine has taken
//! - **Checkpoints**: serializable snapshots of current state and history
//!
//! # Example
//!
//! ```rust
//! use switchyard::machine::StateMachine;
//! use switchyard::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Link {
//!         Down,
//!         Negotiating,
//!         Up,
//!     }
//! }
//!
//! event_enum! {
//!     enum LinkEvent {
//!         CarrierDetected,
//!         NegotiationDone,
//!         CarrierLost,
//!     }
//! }
//!
//! let mut machine = StateMachine::new(Link::Down);
//! machine
//!     .add_transition(Link::Down, Link::Negotiating, LinkEvent::CarrierDetected)
//!     .unwrap();
//! machine
//!     .add_transition(Link::Negotiating, Link::Up, LinkEvent::NegotiationDone)
//!     .unwrap();
//! machine
//!     .add_transition(Link::Up, Link::Down, LinkEvent::CarrierLost)
//!     .unwrap();
//!
//! machine.send_event(LinkEvent::CarrierDetected);
//! machine.send_event(LinkEvent::NegotiationDone);
//! machine.send_event(LinkEvent::NegotiationDone); // no transition: ignored
//! assert_eq!(machine.state(), &Link::Up);
//! ```

pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod macros;
pub mod table;

// Re-export commonly used types
pub use crate::core::{Event, State, TransitionHistory, TransitionRecord};
pub use crate::machine::{StateMachine, StateMachineBuilder};
pub use crate::table::{Action, DuplicateTransition, TransitionTable};
