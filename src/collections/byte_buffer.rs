/*!
 * Byte Buffer
 * Growable byte storage with explicit capacity and logical size
 *
 * Used to stage whole-file contents. Capacity grows by doubling from
 * `max(capacity, baseline)` until the request fits; logical size never
 * exceeds capacity. Content is an opaque blob: no framing, no schema.
 */

use crate::collections::traits::Collection;
use crate::collections::types::{CollectionError, CollectionResult};
use crate::core::config::CollectionConfig;
use crate::core::limits::BYTE_BUFFER_INIT_CAPACITY;
use crate::monitoring::span_operation;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct ByteBuffer {
    /// Backing storage; its length is the capacity
    data: Vec<u8>,
    size: usize,
    baseline: usize,
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteBuffer {
    /// Create an empty buffer without allocating
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            size: 0,
            baseline: BYTE_BUFFER_INIT_CAPACITY,
        }
    }

    /// Create a buffer whose first growth starts from `baseline` bytes
    pub fn with_baseline(baseline: usize) -> CollectionResult<Self> {
        if baseline == 0 {
            return Err(CollectionError::InvalidArgument(
                "ByteBuffer baseline capacity must be non-zero".into(),
            ));
        }
        Ok(Self {
            data: Vec::new(),
            size: 0,
            baseline,
        })
    }

    pub fn from_config(config: &CollectionConfig) -> CollectionResult<Self> {
        Self::with_baseline(config.byte_buffer_initial_capacity)
    }

    /// Create a buffer with at least `capacity` bytes reserved
    pub fn with_capacity(capacity: usize) -> CollectionResult<Self> {
        let mut buffer = Self::new();
        if capacity > 0 {
            buffer.reserve(capacity)?;
        }
        Ok(buffer)
    }

    /// Capacity in bytes
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Grow capacity to hold `size` bytes; logical size is unchanged
    pub fn reserve(&mut self, size: usize) -> CollectionResult<()> {
        if size == 0 {
            return Err(CollectionError::InvalidArgument(
                "reserve size must be non-zero".into(),
            ));
        }
        self.ensure_capacity(size)
    }

    /// Grow as needed and set the logical size
    ///
    /// Newly exposed bytes are not cleared and may hold earlier content.
    pub fn resize(&mut self, size: usize) -> CollectionResult<()> {
        if size == 0 {
            return Err(CollectionError::InvalidArgument(
                "resize size must be non-zero".into(),
            ));
        }
        self.ensure_capacity(size)?;
        self.size = size;
        Ok(())
    }

    /// Replace the logical content with `data`
    pub fn set(&mut self, data: &[u8]) -> CollectionResult<()> {
        if data.is_empty() {
            return Err(CollectionError::InvalidArgument(
                "source data must be non-empty".into(),
            ));
        }
        self.ensure_capacity(data.len())?;
        self.data[..data.len()].copy_from_slice(data);
        self.size = data.len();
        Ok(())
    }

    /// Replace the logical content with raw bytes
    #[inline]
    pub fn copy_from(&mut self, src: &[u8]) -> CollectionResult<()> {
        self.set(src)
    }

    /// Replace the logical content with another buffer's content
    pub fn clone_from_buffer(&mut self, src: &ByteBuffer) -> CollectionResult<()> {
        self.set(src.as_slice())
    }

    /// Read an entire file, returning the number of bytes read
    ///
    /// On failure the previous content is left untouched.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> CollectionResult<usize> {
        let span = span_operation("byte_buffer_read_file");
        let _entered = span.enter();
        let path = path.as_ref();
        let result = self.read_file_inner(path);
        match &result {
            Ok(bytes) => span.record_bytes(*bytes),
            Err(err) => span.record_error(err),
        }
        result
    }

    fn read_file_inner(&mut self, path: &Path) -> CollectionResult<usize> {
        let mut file = File::open(path).map_err(|e| CollectionError::io(path, e))?;

        let file_size = file
            .metadata()
            .map_err(|e| CollectionError::io(path, e))?
            .len();
        let file_size = usize::try_from(file_size).map_err(|_| {
            CollectionError::AllocationFailed {
                requested: usize::MAX,
            }
        })?;

        if file_size == 0 {
            return Err(CollectionError::EmptyFile(path.display().to_string()));
        }

        // Prior content must survive a failed read
        let current = self.capacity();
        let new_capacity = grow_capacity(current, file_size, self.baseline)
            .ok_or(CollectionError::AllocationFailed { requested: file_size })?;

        let mut staging = Vec::new();
        staging
            .try_reserve_exact(new_capacity)
            .map_err(|_| CollectionError::AllocationFailed {
                requested: new_capacity,
            })?;
        staging.resize(new_capacity, 0);
        file.read_exact(&mut staging[..file_size])
            .map_err(|e| CollectionError::io(path, e))?;

        self.data = staging;
        self.size = file_size;
        if new_capacity != current {
            trace!(old_capacity = current, new_capacity, "byte buffer grown");
        }
        debug!(path = %path.display(), bytes = file_size, "file read into buffer");
        Ok(file_size)
    }

    /// Write the logical content to a created/truncated file
    ///
    /// A short write is reported as failure even though some bytes may
    /// already be on disk.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> CollectionResult<usize> {
        let span = span_operation("byte_buffer_write_file");
        let _entered = span.enter();
        let path = path.as_ref();
        let result = self.write_file_inner(path);
        match &result {
            Ok(bytes) => span.record_bytes(*bytes),
            Err(err) => span.record_error(err),
        }
        result
    }

    fn write_file_inner(&self, path: &Path) -> CollectionResult<usize> {
        if self.size == 0 {
            return Err(CollectionError::InvalidArgument(
                "cannot write an empty buffer".into(),
            ));
        }

        let mut file = File::create(path).map_err(|e| CollectionError::io(path, e))?;
        file.write_all(self.as_slice())
            .and_then(|_| file.flush())
            .map_err(|e| CollectionError::io(path, e))?;

        debug!(path = %path.display(), bytes = self.size, "buffer written to file");
        Ok(self.size)
    }

    /// Borrow the byte at `offset`
    #[inline]
    pub fn at(&self, offset: usize) -> Option<&u8> {
        self.as_slice().get(offset)
    }

    #[inline]
    pub fn at_mut(&mut self, offset: usize) -> Option<&mut u8> {
        self.as_mut_slice().get_mut(offset)
    }

    /// Set every byte of the logical region to `byte`
    pub fn fill(&mut self, byte: u8) -> CollectionResult<()> {
        if self.size == 0 {
            return Err(CollectionError::Empty);
        }
        self.as_mut_slice().fill(byte);
        Ok(())
    }

    /// Resize to `size` then fill with `byte`
    pub fn fill_ex(&mut self, byte: u8, size: usize) -> CollectionResult<()> {
        self.resize(size)?;
        self.fill(byte)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.size]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.size]
    }

    fn ensure_capacity(&mut self, expected: usize) -> CollectionResult<()> {
        let current = self.capacity();
        if current >= expected {
            return Ok(());
        }

        let new_capacity = grow_capacity(current, expected, self.baseline)
            .ok_or(CollectionError::AllocationFailed { requested: expected })?;

        self.data
            .try_reserve_exact(new_capacity - current)
            .map_err(|_| CollectionError::AllocationFailed {
                requested: new_capacity,
            })?;
        self.data.resize(new_capacity, 0);

        trace!(
            old_capacity = current,
            new_capacity,
            "byte buffer grown"
        );
        Ok(())
    }
}

/// Double from `current` (or `baseline` when nothing is allocated) until `expected` fits
fn grow_capacity(current: usize, expected: usize, baseline: usize) -> Option<usize> {
    let mut capacity = if current > 0 { current } else { baseline };
    while capacity < expected {
        capacity = capacity.checked_mul(2)?;
    }
    Some(capacity)
}

impl Collection for ByteBuffer {
    #[inline]
    fn len(&self) -> usize {
        self.size
    }

    /// Reset the logical size; capacity is kept
    fn clear(&mut self) {
        self.size = 0;
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
