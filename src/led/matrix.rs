//! Row/column scanned LED matrix
//!
//! Drives a `rows x cols` grid of single-color LEDs with `rows + cols` pins.
//! Rows are active-low strobes, columns carry per-LED PWM intensity. Each
//! `show()` lights the next row, so the caller must invoke it fast enough
//! for a full frame (`rows` calls) to refresh at tens of Hz or more.

use heapless::Vec;

use super::{DisplayState, Led};
use crate::color::{Rgb, average_luminance};
use crate::error::LedError;
use crate::{Level, PinId, PinIo, PinMode};

pub const MAX_MATRIX_ROWS: usize = 16;
pub const MAX_MATRIX_COLS: usize = 16;
pub const MAX_MATRIX_CELLS: usize = MAX_MATRIX_ROWS * MAX_MATRIX_COLS;

const ROW_ACTIVE: Level = Level::Low;
const ROW_INACTIVE: Level = Level::High;
const COL_INACTIVE: Level = Level::Low;

/// Scanned matrix driver
pub struct Matrix<P: PinIo> {
    io: P,
    row_pins: Vec<PinId, MAX_MATRIX_ROWS>,
    col_pins: Vec<PinId, MAX_MATRIX_COLS>,
    /// Intensity per cell, indexed `row * cols + col`
    buffer: Vec<u8, MAX_MATRIX_CELLS>,
    current_row: usize,
    brightness: u8,
    state: DisplayState,
}

impl<P: PinIo> Matrix<P> {
    /// Create a new matrix with every row and column inactive
    pub fn new(mut io: P, row_pins: &[PinId], col_pins: &[PinId]) -> Result<Self, LedError> {
        let row_pins: Vec<PinId, MAX_MATRIX_ROWS> =
            Vec::from_slice(row_pins).map_err(|()| LedError::TooManyRows {
                max: MAX_MATRIX_ROWS,
                given: row_pins.len(),
            })?;
        let col_pins: Vec<PinId, MAX_MATRIX_COLS> =
            Vec::from_slice(col_pins).map_err(|()| LedError::TooManyColumns {
                max: MAX_MATRIX_COLS,
                given: col_pins.len(),
            })?;

        let mut buffer = Vec::new();
        // Bounded by MAX_MATRIX_ROWS * MAX_MATRIX_COLS
        let _ = buffer.resize(row_pins.len() * col_pins.len(), 0);

        for &pin in &row_pins {
            io.set_pin_mode(pin, PinMode::Output);
            io.write_digital(pin, ROW_INACTIVE);
        }
        for &pin in &col_pins {
            io.set_pin_mode(pin, PinMode::Output);
            io.write_digital(pin, COL_INACTIVE);
        }

        Ok(Self {
            io,
            row_pins,
            col_pins,
            buffer,
            current_row: 0,
            brightness: 255,
            state: DisplayState::Constructed,
        })
    }

    pub fn rows(&self) -> usize {
        self.row_pins.len()
    }

    pub fn cols(&self) -> usize {
        self.col_pins.len()
    }

    /// Row that the last `show()` strobed
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    pub const fn state(&self) -> DisplayState {
        self.state
    }

    /// Intensity stored for a linear cell index
    pub fn intensity(&self, index: usize) -> Option<u8> {
        self.buffer.get(index).copied()
    }

    /// Frame buffer, row-major
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Set one cell from its column and row
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_color_at(&mut self, col: usize, row: usize, color: Rgb) {
        if row < self.rows() && col < self.cols() {
            let index = row * self.cols() + col;
            self.set_pixel_color(index, color);
        }
    }

    fn fill(&mut self, value: u8) {
        self.buffer.iter_mut().for_each(|cell| *cell = value);
        self.state = DisplayState::Idle;
    }
}

impl<P: PinIo> Led for Matrix<P> {
    /// Fills the whole buffer with the current brightness
    fn on(&mut self) {
        self.fill(self.brightness);
    }

    /// Clears the buffer and drops every row and column immediately
    fn off(&mut self) {
        self.fill(0);
        for &pin in &self.row_pins {
            self.io.write_digital(pin, ROW_INACTIVE);
        }
        for &pin in &self.col_pins {
            self.io.write_digital(pin, COL_INACTIVE);
        }
    }

    /// Uses the averaged color as the global level and fills the buffer
    fn set_color(&mut self, color: Rgb) {
        let level = average_luminance(color);
        self.set_brightness(level);
        if level > 0 {
            self.on();
        } else {
            self.off();
        }
    }

    /// Stores the level used by the next `on()`, leaves the buffer as is
    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn pixel_count(&self) -> usize {
        self.buffer.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(cell) = self.buffer.get_mut(index) {
            *cell = average_luminance(color);
            self.state = DisplayState::Idle;
        }
    }

    fn show(&mut self) {
        let rows = self.rows();
        if rows == 0 {
            return;
        }
        self.state = DisplayState::Scanning;

        if let Some(&pin) = self.row_pins.get(self.current_row) {
            self.io.write_digital(pin, ROW_INACTIVE);
        }

        self.current_row = (self.current_row + 1) % rows;

        let mut any_lit = false;
        for (col, &pin) in self.col_pins.iter().enumerate() {
            let duty = self
                .buffer
                .get(self.current_row * self.col_pins.len() + col)
                .copied()
                .unwrap_or(0);
            any_lit |= duty > 0;
            self.io.write_analog(pin, duty);
        }

        // A dark row stays inactive so an all-off frame leaves no pin driven
        if any_lit {
            if let Some(&pin) = self.row_pins.get(self.current_row) {
                self.io.write_digital(pin, ROW_ACTIVE);
            }
        }
    }
}
