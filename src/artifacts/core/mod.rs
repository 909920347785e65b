//! Core utilities and shared types
//!
//! - `logging`: Tracing subscriber setup for diagnostics on stderr
//! - `PagerWriter`: `Write` adapter feeding the minus pager

pub mod logging;

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this
/// adapter lets a comparison report go to the pager exactly like it would
/// go to stdout.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let comparator = Comparator::new(Box::new(PagerWriter::new(pager.clone())), options);
/// comparator.compare_paths(a, b)?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
