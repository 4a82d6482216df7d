use std::io;

/// A key press reported by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Esc,
    /// Ctrl+C while the terminal is in raw mode.
    Interrupt,
    Other,
}

impl Key {
    /// Keys that end the dashboard.
    pub fn is_stop(self) -> bool {
        matches!(
            self,
            Key::Char('q') | Key::Char('Q') | Key::Esc | Key::Interrupt
        )
    }
}

/// Character-cell drawing target for the dashboard.
///
/// Coordinates are `(column, row)` from the top-left corner. Nothing is
/// guaranteed to be visible until [`refresh`](Surface::refresh) is called.
pub trait Surface {
    fn print_at(&mut self, text: &str, x: u16, y: u16) -> io::Result<()>;

    /// Set the start point of the next [`draw`](Surface::draw).
    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()>;

    /// Draw a line of `ch` from the current position to `(x, y)`, which becomes
    /// the new current position.
    fn draw(&mut self, x: u16, y: u16, ch: char) -> io::Result<()>;

    /// Next pending key press, without blocking.
    fn get_key(&mut self) -> io::Result<Option<Key>>;

    fn refresh(&mut self) -> io::Result<()>;
}

/// Cells on the line between two points, inclusive (Bresenham).
pub(crate) fn line_points(from: (u16, u16), to: (u16, u16)) -> Vec<(u16, u16)> {
    let (mut x, mut y) = (i32::from(from.0), i32::from(from.1));
    let (x1, y1) = (i32::from(to.0), i32::from(to.1));

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        // Both coordinates stay between two u16 endpoints.
        points.push((x as u16, y as u16));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}
