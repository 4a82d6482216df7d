use crate::dashboard::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::dashboard::surface::{Key, Surface, line_points};
use std::collections::VecDeque;
use std::io;

/// In-memory character grid with a scripted key queue.
///
/// Each `get_key` call pops one entry from the queue; `None` entries simulate
/// polls where nothing was pressed, and an empty queue never yields a key.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u16,
    height: u16,
    cells: Vec<Vec<char>>,
    cursor: (u16, u16),
    keys: VecDeque<Option<Key>>,
    refreshes: usize,
}

impl HeadlessSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width as usize]; height as usize],
            cursor: (0, 0),
            keys: VecDeque::new(),
            refreshes: 0,
        }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Option<Key>>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn push_key(&mut self, key: Option<Key>) {
        self.keys.push_back(key);
    }

    /// Row `y` with trailing blanks removed.
    pub fn row(&self, y: u16) -> String {
        self.cells
            .get(y as usize)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<char> {
        self.cells.get(y as usize)?.get(x as usize).copied()
    }

    /// The whole grid, one line per row.
    pub fn contents(&self) -> String {
        (0..self.height)
            .map(|y| self.row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    fn put(&mut self, x: u16, y: u16, ch: char) {
        if x < self.width && y < self.height {
            self.cells[y as usize][x as usize] = ch;
        }
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl Surface for HeadlessSurface {
    fn print_at(&mut self, text: &str, x: u16, y: u16) -> io::Result<()> {
        for (i, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            self.put(x.saturating_add(offset), y, ch);
        }
        Ok(())
    }

    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn draw(&mut self, x: u16, y: u16, ch: char) -> io::Result<()> {
        for (px, py) in line_points(self.cursor, (x, y)) {
            self.put(px, py, ch);
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn get_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.keys.pop_front().flatten())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.refreshes += 1;
        Ok(())
    }
}
