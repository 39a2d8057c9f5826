//! Line sources
//!
//! The interpreter never opens or reads anything itself; it pulls lines
//! through `LineSource`. Two implementations ship here: any `BufRead`
//! (files, stdin) and an in-memory list.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::Result;

/// Supplier of one command line at a time
pub trait LineSource {
    /// Advance to the next line
    ///
    /// Returns `Ok(false)` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the underlying reader fails.
    fn fetch_next(&mut self) -> Result<bool>;

    /// Most recently fetched line with surrounding whitespace trimmed
    ///
    /// `None` before the first fetch and after exhaustion.
    fn current_line(&self) -> Option<&str>;
}

/// Line source over any buffered reader
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a garbled line
/// still reaches classification instead of failing the read.
#[derive(Debug)]
pub struct ReaderLineSource<R> {
    reader: R,
    buffer: Vec<u8>,
    current: Option<String>,
}

impl<R: BufRead> ReaderLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            current: None,
        }
    }
}

impl ReaderLineSource<BufReader<File>> {
    /// Open a file as a line source
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn fetch_next(&mut self) -> Result<bool> {
        self.buffer.clear();
        let read = self.reader.read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            self.current = None;
            return Ok(false);
        }
        self.current = Some(String::from_utf8_lossy(&self.buffer).trim().to_string());
        Ok(true)
    }

    fn current_line(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Line source over an in-memory list
#[derive(Debug, Clone, Default)]
pub struct MemoryLineSource {
    pending: VecDeque<String>,
    current: Option<String>,
}

impl MemoryLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pending: lines.into_iter().map(Into::into).collect(),
            current: None,
        }
    }

    /// Lines not yet fetched
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl LineSource for MemoryLineSource {
    fn fetch_next(&mut self) -> Result<bool> {
        self.current = self.pending.pop_front().map(|line| line.trim().to_string());
        Ok(self.current.is_some())
    }

    fn current_line(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
