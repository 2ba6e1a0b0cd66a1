use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::{HashMap, HashSet};
use std::io;
use std::time::{Duration, Instant};

use super::physics::PaddleInput;
use super::state::Command;
use crate::config::KeyBindings;

/// Platform-neutral key identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Letters are stored lowercase so bindings ignore shift/caps lock
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Space,
    Tab,
    Backspace,
}

impl Key {
    /// Parse a key name as written in the config file ("W", "Up", "Enter", ...)
    pub fn parse(name: &str) -> Option<Key> {
        let trimmed = name.trim();
        let key = match trimmed.to_ascii_lowercase().as_str() {
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "enter" | "return" => Key::Enter,
            "esc" | "escape" => Key::Esc,
            "space" => Key::Space,
            "tab" => Key::Tab,
            "backspace" => Key::Backspace,
            _ => {
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    fn from_code(code: KeyCode) -> Option<Key> {
        let key = match code {
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            _ => return None,
        };
        Some(key)
    }
}

/// Discrete input events, in the order they arrived
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}

/// Everything the match loop needs from input for one tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub held: HashSet<Key>,
    pub events: Vec<InputEvent>,
}

impl InputSnapshot {
    pub fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Source of per-tick input snapshots. Polling never blocks.
pub trait InputSource {
    fn poll(&mut self) -> Result<InputSnapshot, io::Error>;
}

/// Keyboard input from the terminal via crossterm
///
/// Terminals that speak the keyboard enhancement protocol report key
/// releases, so held keys are tracked exactly. Everywhere else a key stays
/// held for `hold_window` after its last press or auto-repeat.
pub struct TerminalInput {
    held: HashMap<Key, Option<Instant>>,
    reports_release: bool,
    hold_window: Duration,
}

impl TerminalInput {
    pub fn new(reports_release: bool, hold_window: Duration) -> Self {
        Self {
            held: HashMap::new(),
            reports_release,
            hold_window,
        }
    }

    /// Fold one terminal event into the held set and the event list
    fn handle_event(&mut self, event: Event, now: Instant, events: &mut Vec<InputEvent>) {
        let Event::Key(key_event) = event else {
            return;
        };

        if is_interrupt(&key_event) {
            if key_event.kind == KeyEventKind::Press {
                events.push(InputEvent::Quit);
            }
            return;
        }

        let Some(key) = Key::from_code(key_event.code) else {
            return;
        };

        match key_event.kind {
            KeyEventKind::Press => {
                // Without release reporting, auto-repeat also arrives as Press
                if self.reports_release || !self.held.contains_key(&key) {
                    events.push(InputEvent::KeyDown(key));
                }
                self.hold(key, now);
            }
            KeyEventKind::Repeat => self.hold(key, now),
            KeyEventKind::Release => {
                self.held.remove(&key);
            }
        }
    }

    fn hold(&mut self, key: Key, now: Instant) {
        let deadline = if self.reports_release {
            None
        } else {
            Some(now + self.hold_window)
        };
        self.held.insert(key, deadline);
    }

    fn expire(&mut self, now: Instant) {
        self.held
            .retain(|_, deadline| deadline.map_or(true, |deadline| deadline > now));
    }

    fn snapshot(&self, events: Vec<InputEvent>) -> InputSnapshot {
        InputSnapshot {
            held: self.held.keys().copied().collect(),
            events,
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputSnapshot, io::Error> {
        let mut events = Vec::new();

        // Process all pending events without waiting
        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            self.handle_event(event, Instant::now(), &mut events);
        }

        self.expire(Instant::now());
        Ok(self.snapshot(events))
    }
}

fn is_interrupt(key_event: &KeyEvent) -> bool {
    key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Key bindings resolved from the config file
#[derive(Clone, Debug)]
pub struct Bindings {
    paddle_up: Vec<Key>,
    paddle_down: Vec<Key>,
    restart: Vec<Key>,
    decline: Vec<Key>,
    quit: Vec<Key>,
}

impl Bindings {
    pub fn from_config(config: &KeyBindings) -> anyhow::Result<Self> {
        Ok(Self {
            paddle_up: parse_keys("paddle_up", &config.paddle_up)?,
            paddle_down: parse_keys("paddle_down", &config.paddle_down)?,
            restart: parse_keys("restart", &config.restart)?,
            decline: parse_keys("decline", &config.decline)?,
            quit: parse_keys("quit", &config.quit)?,
        })
    }

    pub fn paddle_input(&self, snapshot: &InputSnapshot) -> PaddleInput {
        PaddleInput {
            up: self.paddle_up.iter().any(|&key| snapshot.is_key_held(key)),
            down: self.paddle_down.iter().any(|&key| snapshot.is_key_held(key)),
        }
    }

    /// Map a discrete event to a match command. Quit wins over the other
    /// bindings when a key is bound twice.
    pub fn command_for(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::Quit => Some(Command::Quit),
            InputEvent::KeyDown(key) if self.quit.contains(key) => Some(Command::Quit),
            InputEvent::KeyDown(key) if self.restart.contains(key) => Some(Command::Restart),
            InputEvent::KeyDown(key) if self.decline.contains(key) => Some(Command::Decline),
            InputEvent::KeyDown(_) => None,
        }
    }
}

fn parse_keys(binding: &str, names: &[String]) -> anyhow::Result<Vec<Key>> {
    names
        .iter()
        .map(|name| {
            Key::parse(name).ok_or_else(|| {
                anyhow::anyhow!("unknown key `{}` in keybindings.{}", name, binding)
            })
        })
        .collect()
}
