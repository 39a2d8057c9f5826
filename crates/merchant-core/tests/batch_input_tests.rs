//! Batch Input Tests
//!
//! `process_input` over in-memory and file-backed line sources.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::io::{Cursor, Write as _};

use common::{REFERENCE_METALS, REFERENCE_UNITS};
use merchant_core::{
    CommandInterpreter, ExErrorKind, MemoryLineSource, ReaderLineSource, FALLBACK_MESSAGE,
};

fn reference_input() -> Vec<String> {
    let mut lines: Vec<String> = REFERENCE_UNITS
        .iter()
        .chain(REFERENCE_METALS.iter())
        .map(|l| l.to_string())
        .collect();
    lines.extend(
        [
            "how much is pish tegj glob glob ?",
            "how many Credits is glob prok Silver ?",
            "how many Credits is glob prok Gold ?",
            "how many Credits is glob prok Iron ?",
            "how much wood could a woodchuck chuck if a woodchuck could chuck wood ?",
        ]
        .map(String::from),
    );
    lines
}

const REFERENCE_OUTPUT: &str = "pish tegj glob glob is 42\n\
glob prok Silver is 68 Credits\n\
glob prok Gold is 57800 Credits\n\
glob prok Iron is 782 Credits\n\
I have no idea what you are talking about\n";

#[test]
fn test_reference_batch_from_memory() {
    let mut interp = CommandInterpreter::new();
    let mut source = MemoryLineSource::new(reference_input());
    let mut out = Vec::new();

    let summary = interp.process_input(&mut source, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), REFERENCE_OUTPUT);
    assert_eq!(summary.lines_read, 12);
    assert_eq!(summary.answers, 4);
    assert_eq!(summary.aborted_with, Some(ExErrorKind::Grammar));
}

#[test]
fn test_reference_batch_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in reference_input() {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();

    let mut interp = CommandInterpreter::new();
    let mut source = ReaderLineSource::open(file.path()).unwrap();
    let mut out = Vec::new();

    interp.process_input(&mut source, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), REFERENCE_OUTPUT);
}

#[test]
fn test_clean_batch_does_not_abort() {
    let mut interp = CommandInterpreter::new();
    let mut source = MemoryLineSource::new(["glob is I", "how much is glob glob glob?"]);
    let mut out = Vec::new();

    let summary = interp.process_input(&mut source, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "glob glob glob is 3\n");
    assert!(!summary.aborted());
}

#[test]
fn test_batch_halts_and_keeps_earlier_state() {
    let mut interp = CommandInterpreter::new();
    let mut source = MemoryLineSource::new(["glob is I", "how much is blarg?", "prok is V"]);
    let mut out = Vec::new();

    let summary = interp.process_input(&mut source, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", FALLBACK_MESSAGE));
    assert_eq!(summary.aborted_with, Some(ExErrorKind::UnknownUnit));
    assert_eq!(interp.tables().unit_count(), 1);
    assert_eq!(source.remaining(), 1);
}

#[test]
fn test_empty_source() {
    let mut interp = CommandInterpreter::new();
    let mut source = MemoryLineSource::default();
    let mut out = Vec::new();

    let summary = interp.process_input(&mut source, &mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(summary.lines_read, 0);
}

#[test]
fn test_garbled_line_gets_fallback_instead_of_io_error() {
    let bytes = b"glob is I\nhow much is glob?\n\xff\xfe glob\nhow much is glob glob?\n".to_vec();
    let mut interp = CommandInterpreter::new();
    let mut source = ReaderLineSource::new(Cursor::new(bytes));
    let mut out = Vec::new();

    let summary = interp.process_input(&mut source, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("glob is 1\n{}\n", FALLBACK_MESSAGE)
    );
    assert_eq!(summary.lines_read, 3);
    assert_eq!(summary.aborted_with, Some(ExErrorKind::Grammar));
}

#[test]
fn test_garbled_unit_name_is_still_a_unit() {
    let bytes = b"\xff is X\nhow much is \xff \xff?\n".to_vec();
    let mut interp = CommandInterpreter::new();
    let mut source = ReaderLineSource::new(Cursor::new(bytes));
    let mut out = Vec::new();

    let summary = interp.process_input(&mut source, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "\u{FFFD} \u{FFFD} is 20\n");
    assert!(!summary.aborted());
}
