//! Handshake Protocol State Machine
//!
//! This example demonstrates embedding the engine in a toy client
//! handshake: send HELLO, authenticate, and recover from timeouts by
//! resending HELLO.
//!
//! Key concepts:
//! - Transition actions that perform protocol side effects
//! - Self-loop transitions (timeout resends)
//! - Silent absorption of events that are irrelevant in the current state
//!
//! Run with: cargo run --example handshake

use switchyard::core::State;
use switchyard::machine::StateMachine;
use switchyard::{event_enum, state_enum};

state_enum! {
    enum Handshake {
        Init,
        SentHello,
        SentAuth,
        Ready,
    }
    final: [Ready]
}

event_enum! {
    enum HandshakeEvent {
        Epsilon,
        Timeout,
        RecvOk,
    }
}

fn main() {
    let mut machine = StateMachine::new(Handshake::Init);

    // Epsilon kicks off the handshake by sending HELLO.
    machine
        .add_transition_with(
            Handshake::Init,
            Handshake::SentHello,
            HandshakeEvent::Epsilon,
            || println!("Sending hello..."),
        )
        .unwrap();

    // OK for our HELLO: send AUTH and move on.
    machine
        .add_transition_with(
            Handshake::SentHello,
            Handshake::SentAuth,
            HandshakeEvent::RecvOk,
            || println!("Sending auth..."),
        )
        .unwrap();

    // OK for our AUTH: ready, no side effect.
    machine
        .add_transition(Handshake::SentAuth, Handshake::Ready, HandshakeEvent::RecvOk)
        .unwrap();

    // Timeout waiting for the HELLO ack: self-loop and resend.
    machine
        .add_self_transition_with(Handshake::SentHello, HandshakeEvent::Timeout, || {
            println!("Sending hello...")
        })
        .unwrap();

    // Timeout waiting for the AUTH ack: fall back to SentHello and resend.
    machine
        .add_transition_with(
            Handshake::SentAuth,
            Handshake::SentHello,
            HandshakeEvent::Timeout,
            || println!("Sending hello..."),
        )
        .unwrap();

    machine.send_event(HandshakeEvent::Epsilon); // trigger sending HELLO
    machine.send_event(HandshakeEvent::RecvOk); // OK for the HELLO message
    machine.send_event(HandshakeEvent::Epsilon); // does nothing in SentAuth
    machine.send_event(HandshakeEvent::Timeout); // timeout waiting for AUTH ack
    machine.send_event(HandshakeEvent::Timeout); // timeout waiting for HELLO ack
    machine.send_event(HandshakeEvent::RecvOk); // OK, back to SentAuth
    machine.send_event(HandshakeEvent::RecvOk); // OK, ready

    println!("Current state: {}", machine.state().name());
}
