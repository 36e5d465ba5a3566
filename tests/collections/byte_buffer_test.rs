/*!
 * Byte Buffer Tests
 * Growth rules and whole-file round trips
 */

use pretty_assertions::assert_eq;
use rt_collections::{ByteBuffer, Collection, CollectionError};
use std::fs;
use tempfile::TempDir;

fn patterned(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

fn round_trip(size: usize) {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.bin");
    let copy = dir.path().join("copy.bin");
    let content = patterned(size);
    fs::write(&source, &content).unwrap();

    let mut buffer = ByteBuffer::new();
    assert_eq!(buffer.read_file(&source).unwrap(), size);
    assert_eq!(buffer.len(), size);
    assert!(buffer.capacity() >= size);

    assert_eq!(buffer.write_file(&copy).unwrap(), size);
    assert!(fs::read(&copy).unwrap() == content);
}

#[test]
fn test_round_trip_single_byte() {
    round_trip(1);
}

#[test]
fn test_round_trip_one_page() {
    round_trip(4096);
}

#[test]
fn test_round_trip_just_over_one_mebibyte() {
    round_trip(1_048_577);
}

#[test]
fn test_empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    let mut buffer = ByteBuffer::new();
    buffer.set(b"previous").unwrap();
    assert!(matches!(
        buffer.read_file(&path),
        Err(CollectionError::EmptyFile(_))
    ));
    assert_eq!(buffer.as_slice(), &b"previous"[..]);
}

#[test]
fn test_missing_file_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let mut buffer = ByteBuffer::new();
    let err = buffer.read_file(dir.path().join("absent.bin")).unwrap_err();
    assert!(matches!(err, CollectionError::Io { .. }));
}

#[test]
fn test_write_empty_buffer_fails() {
    let dir = TempDir::new().unwrap();
    let buffer = ByteBuffer::new();
    assert!(matches!(
        buffer.write_file(dir.path().join("out.bin")),
        Err(CollectionError::InvalidArgument(_))
    ));
}

#[test]
fn test_growth_doubles_from_baseline() {
    let mut buffer = ByteBuffer::with_baseline(16).unwrap();
    buffer.set(&[1u8; 10]).unwrap();
    assert_eq!(buffer.capacity(), 16);

    buffer.set(&[2u8; 40]).unwrap();
    assert_eq!(buffer.capacity(), 64);
    assert_eq!(buffer.len(), 40);
}

#[test]
fn test_set_shorter_keeps_capacity() {
    let mut buffer = ByteBuffer::with_baseline(8).unwrap();
    buffer.set(b"0123456789").unwrap();
    buffer.set(b"ab").unwrap();

    assert_eq!(buffer.as_slice(), &b"ab"[..]);
    assert_eq!(buffer.capacity(), 16);
}

#[test]
fn test_fill_and_fill_ex() {
    let mut buffer = ByteBuffer::new();
    assert_eq!(buffer.fill(0xAA), Err(CollectionError::Empty));

    buffer.fill_ex(0x11, 5).unwrap();
    assert_eq!(buffer.as_slice(), &[0x11u8; 5]);

    buffer.fill(0x22).unwrap();
    assert_eq!(buffer.as_slice(), &[0x22u8; 5]);
}

#[test]
fn test_clone_from_buffer_copies_content() {
    let mut src = ByteBuffer::new();
    src.set(b"payload").unwrap();

    let mut dst = ByteBuffer::new();
    dst.clone_from_buffer(&src).unwrap();
    assert_eq!(dst.as_slice(), src.as_slice());
    assert_eq!(dst.at(0), Some(&b'p'));
    assert_eq!(dst.at(7), None);
}
