// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input arrives through the page's `mouse_area`; only modifier
//! changes need a global listener. A periodic tick runs while a timed input
//! (wheel gesture or long press) is pending.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Tick period while a timed input is pending.
const TICK_INTERVAL_MS: u64 = 50;

/// Forwards keyboard modifier changes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for wheel gesture ends and long presses.
pub fn create_tick_subscription(pending: bool) -> Subscription<Message> {
    if pending {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
