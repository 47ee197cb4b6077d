use super::helpers::*;
use crate::*;
use anyhow::Result;
use std::fs;
use std::io::{self, Cursor, Read};
use tempfile::tempdir;

/// Reader that yields `data` and then fails with a non-EOF error.
struct FailingReader {
    data: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.read(buf)?;
        if n == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        }
        Ok(n)
    }
}

// --------------------- Stream loading ---------------------

#[test]
fn load_preserves_file_order() -> Result<()> {
    let body = file_body(&[
        uniform("I", 2024, 1, 2001, "003000"),
        uniform("E", 2024, 1, 1990, "004000"),
        uniform("N", 2024, 1, 2000, "002000"),
    ]);

    let mut table = BondTable::new();
    let added = table.load(body.as_bytes())?;

    assert_eq!(added, 3);
    assert_eq!(table.len(), 3);
    let series: Vec<&str> = table.iter().map(|r| r.series.as_str()).collect();
    assert_eq!(series, vec!["I", "E", "N"]);
    Ok(())
}

#[test]
fn load_empty_stream() -> Result<()> {
    let mut table = BondTable::new();
    assert_eq!(table.load(io::empty())?, 0);
    assert!(table.is_empty());
    Ok(())
}

#[test]
fn load_keeps_duplicates() -> Result<()> {
    let rec = uniform("S", 2010, 5, 1999, "002600");
    let body = file_body(&[rec.clone(), rec]);

    let mut table = BondTable::new();
    table.load(body.as_bytes())?;
    assert_eq!(table.len(), 2);
    Ok(())
}

#[test]
fn load_accepts_last_line_without_newline() -> Result<()> {
    let mut body = file_body(&[uniform("I", 2024, 1, 2001, "003000")]);
    body.push_str(&uniform("I", 2024, 2, 2001, "003100"));

    let mut table = BondTable::new();
    assert_eq!(table.load(body.as_bytes())?, 2);
    assert_eq!(table.records()[1].redemption_month, 2);
    Ok(())
}

#[test]
fn load_accepts_crlf_and_blank_lines() -> Result<()> {
    let body = format!(
        "{}\r\n\n{}\r\n\n",
        uniform("I", 2024, 1, 2001, "003000"),
        uniform("E", 2024, 1, 1990, "004000")
    );

    let mut table = BondTable::new();
    assert_eq!(table.load(body.as_bytes())?, 2);
    Ok(())
}

#[test]
fn load_appends_across_calls() -> Result<()> {
    let mut table = BondTable::new();
    table.load(file_body(&[uniform("I", 2024, 1, 2001, "003000")]).as_bytes())?;
    table.load(file_body(&[uniform("E", 2024, 1, 1990, "004000")]).as_bytes())?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].series, "I");
    assert_eq!(table.records()[1].series, "E");
    Ok(())
}

// --------------------- Decode failures ---------------------

#[test]
fn first_line_decode_failure_leaves_table_empty() {
    let body = file_body(&["garbage".to_string(), uniform("I", 2024, 1, 2001, "003000")]);

    let mut table = BondTable::new();
    let err = table.load(body.as_bytes()).unwrap_err();

    assert!(matches!(
        err,
        TableError::Decode {
            line: 1,
            source: DecodeError::TooShort { len: 7 }
        }
    ));
    assert!(table.is_empty());
}

#[test]
fn later_decode_failure_discards_whole_load() {
    let mut bad = uniform("I", 2024, 3, 2001, "003000");
    bad.replace_range(20..26, "3O0O00");
    let body = file_body(&[
        uniform("I", 2024, 1, 2001, "003000"),
        uniform("I", 2024, 2, 2001, "003000"),
        bad,
        uniform("I", 2024, 4, 2001, "003000"),
    ]);

    let mut table = BondTable::new();
    let err = table.load(body.as_bytes()).unwrap_err();

    match err {
        TableError::Decode { line, source } => {
            assert_eq!(line, 3);
            assert!(matches!(source, DecodeError::InvalidAmount { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(table.is_empty());
}

#[test]
fn failed_load_keeps_earlier_records() -> Result<()> {
    let mut table = BondTable::new();
    table.load(file_body(&[uniform("I", 2024, 1, 2001, "003000")]).as_bytes())?;

    assert!(table.load("short\n".as_bytes()).is_err());
    assert_eq!(table.len(), 1);
    Ok(())
}

// --------------------- I/O failures ---------------------

#[test]
fn read_error_is_surfaced() {
    let body = file_body(&[uniform("I", 2024, 1, 2001, "003000")]);
    let reader = FailingReader {
        data: Cursor::new(body.into_bytes()),
    };

    let mut table = BondTable::new();
    let err = table.load(reader).unwrap_err();

    assert!(matches!(err, TableError::Io(_)));
    assert!(table.is_empty());
}

#[test]
fn invalid_utf8_is_io_error() {
    let mut bytes = uniform("I", 2024, 1, 2001, "003000").into_bytes();
    bytes[0] = 0xFF;
    bytes.push(b'\n');

    let mut table = BondTable::new();
    assert!(matches!(
        table.load(bytes.as_slice()),
        Err(TableError::Io(_))
    ));
}

// --------------------- File loading ---------------------

#[test]
fn load_from_file_reads_records() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sb.txt");
    fs::write(
        &path,
        file_body(&[
            uniform("N", 2030, 1, 2000, "002500"),
            uniform("N", 2030, 2, 2000, "002510"),
        ]),
    )?;

    let mut table = BondTable::new();
    assert_eq!(table.load_from_file(&path)?, 2);
    assert_eq!(table.value("N", 2030, 2, 2000, 6, 25), 25.1);
    Ok(())
}

#[test]
fn load_from_missing_file_is_open_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let mut table = BondTable::new();
    let err = table.load_from_file(&path).unwrap_err();

    match err {
        TableError::Open { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(table.is_empty());
}

#[test]
fn load_from_file_decode_error_leaves_table_empty() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("bad.txt");
    fs::write(&path, "not a record\n")?;

    let mut table = BondTable::new();
    assert!(matches!(
        table.load_from_file(&path),
        Err(TableError::Decode { line: 1, .. })
    ));
    assert!(table.is_empty());
    Ok(())
}
