use std::io::{self, Write};

use pagecat::copy;
use pagecat::error::PagecatError;
use pagecat::sizing::SizingPolicy;

/// Sink that keeps one byte back from every write.
struct ShortSink {
    accepted: Vec<u8>,
}

impl Write for ShortSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let take = buf.len().saturating_sub(1);
        self.accepted.extend_from_slice(&buf[..take]);
        Ok(take)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn nonexistent_path_fails_open_with_no_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does_not_exist.bin");

    let mut sink = Vec::new();
    let err = copy::run_to_writer(&path, SizingPolicy::PageOnly, &mut sink)
        .expect_err("open must fail");

    assert!(matches!(err, PagecatError::Open { .. }));
    assert!(sink.is_empty());
}

#[test]
fn short_write_terminates_the_transfer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("input.bin");
    let chunk = SizingPolicy::PageOnly.chunk_size(None);
    std::fs::write(&path, vec![0x5A; 8 * chunk]).expect("write input");

    let mut sink = ShortSink {
        accepted: Vec::new(),
    };
    let err = copy::run_to_writer(&path, SizingPolicy::PageOnly, &mut sink)
        .expect_err("short write must fail");

    match err {
        PagecatError::ShortWrite { expected, written } => {
            assert_eq!(expected, chunk);
            assert_eq!(written, chunk - 1);
        }
        other => panic!("unexpected error: {other}"),
    }
    // The loop must stop on the first failing cycle.
    assert_eq!(sink.accepted.len(), chunk - 1);
}

#[test]
fn directory_input_fails_before_any_write() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut sink = Vec::new();
    let result = copy::run_to_writer(dir.path(), SizingPolicy::PageOnly, &mut sink);

    assert!(result.is_err());
    assert!(sink.is_empty());
}
