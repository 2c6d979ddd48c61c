use std::time::Duration;

use crate::game::Direction;

use crossterm::event::{poll, read, Event, KeyCode};

const UP_KEY: char = 'w';
const LEFT_KEY: char = 'a';
const DOWN_KEY: char = 's';
const RIGHT_KEY: char = 'd';

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputEvent {
    Turn(Direction),
    /// Any key outside the four bindings is a deliberate quit, not an
    /// error.
    Quit,
}

/// Drains every key press queued since the previous tick. The engine
/// applies them in order, so rapid presses collapse to the most recent
/// direction.
pub fn drain_events() -> Vec<InputEvent> {
    let mut events = vec![];

    while poll(Duration::from_millis(1)).expect("Error polling input.") {
        if let Event::Key(ev) = read().expect("Error reading input.") {
            events.push(map_key(ev.code));
        }
    }

    events
}

/// Blocks until the next key press. Used on the result screen, where
/// tick pacing no longer matters.
pub fn next_event() -> InputEvent {
    loop {
        if let Event::Key(ev) = read().expect("Error reading input.") {
            return map_key(ev.code);
        }
    }
}

fn map_key(code: KeyCode) -> InputEvent {
    match code {
        KeyCode::Char(UP_KEY) => InputEvent::Turn(Direction::Up),
        KeyCode::Char(LEFT_KEY) => InputEvent::Turn(Direction::Left),
        KeyCode::Char(DOWN_KEY) => InputEvent::Turn(Direction::Down),
        KeyCode::Char(RIGHT_KEY) => InputEvent::Turn(Direction::Right),
        _ => InputEvent::Quit,
    }
}
