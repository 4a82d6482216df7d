use crate::dashboard::constants::{LABEL_X, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::dashboard::surface::Surface;
use serde::Serialize;
use std::io;

/// One piece of text at a fixed screen position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenRow {
    pub text: String,
    pub x: u16,
    pub y: u16,
}

impl ScreenRow {
    pub fn new(text: impl Into<String>, x: u16, y: u16) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

pub const ROW_TITLE: u16 = 1;
pub const ROW_RATE: u16 = 2;
pub const ROW_REQUESTS: u16 = 3;
pub const ROW_UNIQUE_IPS: u16 = 4;
pub const ROW_RECENT_IPS: u16 = 5;
pub const ROW_BYTES_SENT: u16 = 6;
pub const ROW_LOG_SIZE: u16 = 7;
pub const ROW_STORE_SIZE: u16 = 8;
pub const ROW_CHECKED_AT: u16 = 9;

/// Labels drawn once when the dashboard starts.
///
/// The recent unique IP row only appears when a recent window is configured.
pub fn static_rows(verb: &str, show_recent: bool) -> Vec<ScreenRow> {
    let mut rows = vec![
        ScreenRow::new("Nginx Statistics", LABEL_X, ROW_TITLE),
        ScreenRow::new("Requests per second:", LABEL_X, ROW_RATE),
        ScreenRow::new(format!("Total {verb} requests:"), LABEL_X, ROW_REQUESTS),
        ScreenRow::new("Unique IP Address count:", LABEL_X, ROW_UNIQUE_IPS),
    ];
    if show_recent {
        rows.push(ScreenRow::new(
            "Recent unique IP count:",
            LABEL_X,
            ROW_RECENT_IPS,
        ));
    }
    rows.extend([
        ScreenRow::new("Total data sent:", LABEL_X, ROW_BYTES_SENT),
        ScreenRow::new("Current access log size:", LABEL_X, ROW_LOG_SIZE),
        ScreenRow::new("Current access DB size:", LABEL_X, ROW_STORE_SIZE),
        ScreenRow::new("Last checked timestamp:", LABEL_X, ROW_CHECKED_AT),
    ]);
    rows
}

/// Frame the screen with `-` and `|` bars and `+` corners.
pub fn draw_border(surface: &mut impl Surface) -> io::Result<()> {
    let right = SCREEN_WIDTH - 1;
    let bottom = SCREEN_HEIGHT - 1;

    // top
    surface.move_to(1, 0)?;
    surface.draw(right - 1, 0, '-')?;
    // left
    surface.move_to(0, 1)?;
    surface.draw(0, bottom - 1, '|')?;
    // bottom
    surface.move_to(1, bottom)?;
    surface.draw(right - 1, bottom, '-')?;
    // right
    surface.move_to(right, 1)?;
    surface.draw(right, bottom - 1, '|')?;

    for (x, y) in [(0, 0), (right, 0), (0, bottom), (right, bottom)] {
        surface.print_at("+", x, y)?;
    }
    Ok(())
}

pub fn write_rows(surface: &mut impl Surface, rows: &[ScreenRow]) -> io::Result<()> {
    for row in rows {
        surface.print_at(&row.text, row.x, row.y)?;
    }
    Ok(())
}
