use crate::dashboard::surface::{Key, Surface, line_points};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// The process terminal, driven through crossterm.
///
/// Creating one switches to raw mode and the alternate screen; dropping it
/// restores the terminal.
pub struct TerminalSurface {
    out: Stdout,
    cursor: (u16, u16),
}

impl TerminalSurface {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self {
            out,
            cursor: (0, 0),
        })
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

impl Surface for TerminalSurface {
    fn print_at(&mut self, text: &str, x: u16, y: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y), Print(text))
    }

    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn draw(&mut self, x: u16, y: u16, ch: char) -> io::Result<()> {
        for (px, py) in line_points(self.cursor, (x, y)) {
            queue!(self.out, MoveTo(px, py), Print(ch))?;
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn get_key(&mut self) -> io::Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let key = match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Key::Interrupt
                }
                KeyCode::Char(c) => Key::Char(c),
                KeyCode::Esc => Key::Esc,
                _ => Key::Other,
            };
            return Ok(Some(key));
        }
        Ok(None)
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
