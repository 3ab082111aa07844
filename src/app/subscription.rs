// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed only when no widget captured the event, so
//! typing a name with digits in it never answers a question. Session timers
//! are not subscriptions: they are one-shot tasks owned by the scheduler.

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Roughly 60 frames per second.
const CONFETTI_FRAME: Duration = Duration::from_millis(16);

/// Keyboard shortcuts: Enter and the digits `1..=9`.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                map_key(&key, modifiers)
            }
            _ => None,
        }
    })
}

/// Translates a key press into a quiz message.
#[must_use]
pub fn map_key(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    match key {
        Key::Named(Named::Enter) => Some(Message::EnterPressed),
        Key::Character(c) => {
            let digit = c.as_str().parse::<usize>().ok()?;
            (1..=9)
                .contains(&digit)
                .then(|| Message::DigitPressed(digit - 1))
        }
        _ => None,
    }
}

/// Frame clock for the confetti overlay, active only while particles live.
pub fn create_confetti_subscription(alive: bool) -> Subscription<Message> {
    if alive {
        time::every(CONFETTI_FRAME).map(Message::ConfettiFrame)
    } else {
        Subscription::none()
    }
}
