//! Dense text rendering
//!
//! The grid covers rows `0..=rows()` and columns `0..=columns()`. Each cell
//! is written as `[value]` followed by the separator and each row ends with
//! the line terminator. Stored entries are merged in from a single
//! row-major pass; every other cell shows the default value.

use std::fmt::{self, Display};
use std::io;

use crate::config::RenderConfig;
use crate::matrix::SparseMatrix;

impl<T: Display> SparseMatrix<T> {
    /// Write the dense grid to a formatter sink
    pub fn render_grid<W: fmt::Write>(&self, out: &mut W, config: &RenderConfig) -> fmt::Result {
        let mut cells = self.cells().peekable();

        for row in 0..=self.rows() {
            for column in 0..=self.columns() {
                match cells.next_if(|&(r, c, _)| r == row && c == column) {
                    Some((_, _, value)) => write!(out, "[{value}]")?,
                    None => write!(out, "[{}]", self.default_value())?,
                }
                out.write_str(&config.separator)?;
            }
            out.write_str(&config.line_end)?;
        }
        Ok(())
    }

    /// Render the dense grid into a new string
    pub fn render(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        // Writing into a String never fails
        let _ = self.render_grid(&mut out, config);
        out
    }

    /// Write the dense grid to a byte sink
    pub fn render_to<W: io::Write>(&self, writer: &mut W, config: &RenderConfig) -> io::Result<()> {
        let mut adapter = IoAdapter {
            inner: writer,
            error: None,
        };
        match self.render_grid(&mut adapter, config) {
            Ok(()) => Ok(()),
            Err(_) => Err(adapter
                .error
                .unwrap_or_else(|| io::Error::other("formatting a matrix value failed"))),
        }
    }
}

/// Renders with [`RenderConfig::default`]: tab-separated cells, one row per
/// line
impl<T: Display> Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_grid(f, &RenderConfig::default())
    }
}

/// Bridges `fmt::Write` onto an `io::Write`, keeping the first I/O error
struct IoAdapter<'a, W: io::Write> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
