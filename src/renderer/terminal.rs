//! Terminal presentation
//!
//! Each terminal cell covers a 6×12 pixel block of the frame. The cell
//! prints an upper half block whose foreground is the average colour of the
//! top 6×6 pixels and whose background is the average of the bottom 6×6.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};
use image::{Rgba, RgbaImage};

use super::TextLine;

pub const CELL_WIDTH: u32 = 6;
pub const CELL_HEIGHT: u32 = 12;

const HALF_BLOCK: char = '▀';

/// Presents frames on anything that accepts terminal escape sequences
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Wipe the screen (used once when the terminal is taken over)
    pub fn clear(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.flush()
    }

    /// Draw one complete frame plus its text
    pub fn present(&mut self, frame: &RgbaImage, lines: &[TextLine]) -> io::Result<()> {
        let cols = frame.width() / CELL_WIDTH;
        let rows = frame.height() / CELL_HEIGHT;
        let half = CELL_HEIGHT / 2;

        for row in 0..rows {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            let mut last: Option<(Color, Color)> = None;
            for col in 0..cols {
                let x = col * CELL_WIDTH;
                let y = row * CELL_HEIGHT;
                let top = average(frame, x, y, CELL_WIDTH, half);
                let bottom = average(frame, x, y + half, CELL_WIDTH, half);

                if last != Some((top, bottom)) {
                    self.out.queue(style::SetForegroundColor(top))?;
                    self.out.queue(style::SetBackgroundColor(bottom))?;
                    last = Some((top, bottom));
                }
                self.out.queue(Print(HALF_BLOCK))?;
            }
        }

        for line in lines {
            let (col, row) = text_cell(line, cols);
            if row as u32 >= rows {
                continue;
            }
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(to_color(line.color)))?;
            self.out.queue(style::SetBackgroundColor(Color::Black))?;
            self.out.queue(Print(&line.text))?;
        }

        // Park cursor below the field and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, rows as u16))?;
        self.out.flush()
    }
}

/// Terminal cell where a text line starts
pub fn text_cell(line: &TextLine, cols: u32) -> (u16, u16) {
    let row = (line.y.max(0.0) as u32 / CELL_HEIGHT) as u16;
    let len = line.text.chars().count() as u32;
    let col = if line.centered {
        cols.saturating_sub(len) / 2
    } else {
        line.x.max(0.0) as u32 / CELL_WIDTH
    };
    (col as u16, row)
}

fn to_color(c: Rgba<u8>) -> Color {
    Color::Rgb {
        r: c[0],
        g: c[1],
        b: c[2],
    }
}

/// Mean colour of a pixel block, clipped to the frame
fn average(frame: &RgbaImage, x0: u32, y0: u32, w: u32, h: u32) -> Color {
    let x1 = (x0 + w).min(frame.width());
    let y1 = (y0 + h).min(frame.height());
    let mut sum = [0u32; 3];
    let mut n = 0u32;
    for y in y0..y1 {
        for x in x0..x1 {
            let p = frame.get_pixel(x, y);
            for (acc, channel) in sum.iter_mut().zip(p.0.iter()) {
                *acc += *channel as u32;
            }
            n += 1;
        }
    }
    if n == 0 {
        return Color::Black;
    }
    Color::Rgb {
        r: (sum[0] / n) as u8,
        g: (sum[1] / n) as u8,
        b: (sum[2] / n) as u8,
    }
}
