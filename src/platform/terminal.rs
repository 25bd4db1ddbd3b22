//! Terminal setup and input translation
//!
//! Key releases only arrive on terminals that speak the keyboard
//! enhancement protocol. Elsewhere a held key shows up as a stream of
//! repeated presses, so a steering key counts as released once its repeats
//! stop for a short window.

use std::collections::HashMap;
use std::io::{self, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
};

use crate::sim::{InputEvent, Key};

/// Silence after the first press before the OS key repeat kicks in
pub const FIRST_REPEAT_WINDOW: Duration = Duration::from_millis(550);
/// Silence between repeats that counts as a release
pub const REPEAT_WINDOW: Duration = Duration::from_millis(150);

/// Raw mode + alternate screen for as long as this value lives
///
/// Each flag records a step of the setup that succeeded, so dropping the
/// session undoes exactly those steps, even after a failed `enter`.
#[derive(Debug, Default)]
pub struct TerminalSession {
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
    keyboard_enhanced: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut session = Self {
            raw_mode: true,
            ..Self::default()
        };
        session.setup(&mut stdout())?;
        log::info!(
            "Terminal ready (keyboard enhancement: {})",
            session.keyboard_enhanced
        );

        match terminal::size() {
            Ok((cols, rows)) if cols < 50 || rows < 51 => {
                log::warn!("Terminal is {}x{}, the field needs 50x51 cells", cols, rows);
            }
            Ok(_) => {}
            Err(e) => log::warn!("Could not read terminal size: {}", e),
        }

        Ok(session)
    }

    fn setup<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        out.execute(terminal::EnterAlternateScreen)?;
        self.alternate_screen = true;
        out.execute(cursor::Hide)?;
        self.cursor_hidden = true;

        // Request key-release events; terminals without support ignore it
        self.keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        Ok(())
    }

    /// Undo every setup step that took effect. Errors are ignored.
    fn restore<W: Write>(&mut self, out: &mut W) {
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
            self.keyboard_enhanced = false;
        }
        if self.cursor_hidden {
            let _ = out.execute(cursor::Show);
            self.cursor_hidden = false;
        }
        if self.alternate_screen {
            let _ = out.execute(terminal::LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
            self.raw_mode = false;
        }
        let _ = out.flush();
    }

    fn is_active(&self) -> bool {
        self.raw_mode || self.alternate_screen || self.cursor_hidden || self.keyboard_enhanced
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.is_active() {
            self.restore(&mut stdout());
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    last_seen: Instant,
    repeating: bool,
}

/// Turns crossterm events into game input events
#[derive(Debug, Default)]
pub struct TerminalInput {
    held: HashMap<Key, HeldKey>,
    /// Set once the terminal has delivered a real release event
    reports_releases: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every pending terminal event without blocking
    pub fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.translate(&ev, Instant::now(), &mut events);
        }
        self.expire(Instant::now(), &mut events);
        Ok(events)
    }

    pub fn translate(&mut self, ev: &Event, now: Instant, out: &mut Vec<InputEvent>) {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = ev
        else {
            return;
        };

        if *kind == KeyEventKind::Press && is_quit(*code, *modifiers) {
            out.push(InputEvent::Quit);
            return;
        }
        let Some(key) = map_key(*code) else {
            return;
        };

        match kind {
            KeyEventKind::Press => {
                if !is_steering(key) {
                    out.push(InputEvent::KeyDown(key));
                    return;
                }
                match self.held.get_mut(&key) {
                    // Auto-repeat arriving as a press
                    Some(held) => {
                        held.last_seen = now;
                        held.repeating = true;
                    }
                    None => {
                        self.held.insert(
                            key,
                            HeldKey {
                                last_seen: now,
                                repeating: false,
                            },
                        );
                        out.push(InputEvent::KeyDown(key));
                    }
                }
            }
            KeyEventKind::Repeat => {
                if let Some(held) = self.held.get_mut(&key) {
                    held.last_seen = now;
                    held.repeating = true;
                }
            }
            KeyEventKind::Release => {
                self.reports_releases = true;
                if self.held.remove(&key).is_some() {
                    out.push(InputEvent::KeyUp(key));
                }
            }
        }
    }

    /// Synthesise releases for keys whose repeats stopped
    pub fn expire(&mut self, now: Instant, out: &mut Vec<InputEvent>) {
        if self.reports_releases {
            return;
        }
        let mut released: Vec<Key> = self
            .held
            .iter()
            .filter(|(_, held)| {
                let window = if held.repeating {
                    REPEAT_WINDOW
                } else {
                    FIRST_REPEAT_WINDOW
                };
                now.saturating_duration_since(held.last_seen) > window
            })
            .map(|(key, _)| *key)
            .collect();
        // Stable order regardless of hash iteration
        released.sort_by_key(|key| *key as u8);
        for key in released {
            self.held.remove(&key);
            out.push(InputEvent::KeyUp(key));
        }
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Enter => Some(Key::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        _ => None,
    }
}

fn is_steering(key: Key) -> bool {
    matches!(key, Key::Left | Key::Right)
}
