//! Test-only byte source with a fake length and read accounting.

use std::io;

use rigdna_common::ByteSource;

/// A source that reports an arbitrary length, serves a fixed prefix, and
/// counts every read. Lets tests fake multi-hundred-megabyte files and
/// assert exactly how many bytes the gate touched.
pub struct StubSource {
    name: String,
    len: u64,
    prefix: Vec<u8>,
    fail_reads: bool,
    reads: usize,
    bytes_read: usize,
}

impl StubSource {
    pub fn new(name: &str, len: u64, prefix: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            len,
            prefix: prefix.to_vec(),
            fail_reads: false,
            reads: 0,
            bytes_read: 0,
        }
    }

    /// A source whose every read fails with an I/O error.
    pub fn failing(name: &str, len: u64) -> Self {
        let mut source = Self::new(name, len, &[]);
        source.fail_reads = true;
        source
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }
}

impl ByteSource for StubSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> u64 {
        self.len
    }

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        self.reads += 1;

        if self.fail_reads {
            return Err(io::Error::new(io::ErrorKind::Other, "stubbed read failure"));
        }

        let start = offset as usize;
        let end = start + buf.len();
        if end > self.prefix.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read beyond stub prefix",
            ));
        }

        buf.copy_from_slice(&self.prefix[start..end]);
        self.bytes_read += buf.len();
        Ok(())
    }
}
