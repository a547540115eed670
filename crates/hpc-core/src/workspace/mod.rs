//! Call-scoped native buffers
//!
//! This module provides the contiguous buffers kernels read from and write to:
//! - Proper SIMD alignment (64 bytes by default)
//! - Zero initialisation on acquisition
//! - Fallible acquisition surfaced as `Error::AllocationFailure`
//! - RAII-based release: memory is returned on every exit path via `Drop`
//!
//! Buffers are never pooled or cached; each one lives exactly as long as the
//! call that created it.

use crate::error::{Error, Result};
use bytemuck::Pod;
use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// Default buffer alignment in bytes (one cache line, two AVX2 registers)
pub const DEFAULT_ALIGNMENT: usize = 64;

/// A zero-initialised, properly aligned buffer of `T`
///
/// The element type is plain old data, so an all-zero bit pattern is a valid
/// value and no constructors or destructors run for elements.
pub struct AlignedBuffer<T: Pod> {
    ptr: NonNull<T>,
    len: usize,
    // None for empty buffers, which never touch the allocator
    layout: Option<Layout>,
    _marker: PhantomData<T>,
}

impl<T: Pod> AlignedBuffer<T> {
    /// Acquire a zeroed buffer of `len` elements aligned to `alignment` bytes
    ///
    /// Fails with `InvalidArgument` if `alignment` is not a power of two or is
    /// below the natural alignment of `T`, and with `AllocationFailure` if the
    /// size overflows or the allocator returns nothing.
    pub fn zeroed(len: usize, alignment: usize) -> Result<Self> {
        if !alignment.is_power_of_two() {
            return Err(Error::invalid_argument(format!(
                "alignment {alignment} must be a power of two"
            )));
        }
        if alignment < mem::align_of::<T>() {
            return Err(Error::invalid_argument(format!(
                "alignment {alignment} must be at least {}",
                mem::align_of::<T>()
            )));
        }

        let bytes = len
            .checked_mul(mem::size_of::<T>())
            .ok_or_else(|| Error::allocation_failure(usize::MAX))?;

        if bytes == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len,
                layout: None,
                _marker: PhantomData,
            });
        }

        let layout = Layout::from_size_align(bytes, alignment)
            .map_err(|_| Error::allocation_failure(bytes))?;

        // Safety: layout has a non-zero size
        let raw = unsafe { alloc_zeroed(layout) } as *mut T;
        let ptr = NonNull::new(raw).ok_or_else(|| Error::allocation_failure(bytes))?;

        log::trace!("acquired {bytes} byte buffer aligned to {alignment}");

        Ok(Self {
            ptr,
            len,
            layout: Some(layout),
            _marker: PhantomData,
        })
    }

    /// Acquire a buffer holding a copy of `data`
    pub fn from_slice(data: &[T], alignment: usize) -> Result<Self> {
        let mut buffer = Self::zeroed(data.len(), alignment)?;
        buffer.as_mut_slice().copy_from_slice(data);
        Ok(buffer)
    }

    /// Get the buffer contents
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: ptr is valid for len initialised elements (or dangling with a zero-size footprint)
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Get the buffer contents mutably
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: as above, and &mut self guarantees exclusive access
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Copy the contents into an ordinary vector
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alignment the buffer was acquired with, in bytes
    ///
    /// Empty buffers never allocate and report the natural alignment of `T`.
    pub fn alignment(&self) -> usize {
        self.layout
            .map(|layout| layout.align())
            .unwrap_or_else(mem::align_of::<T>)
    }
}

impl<T: Pod> Drop for AlignedBuffer<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.layout.take() {
            // Safety: ptr was returned by alloc_zeroed with exactly this layout
            unsafe {
                dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
            log::trace!("released {} byte buffer", layout.size());
        }
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .field("alignment", &self.alignment())
            .field("data", &self.as_slice())
            .finish()
    }
}

// Safety: AlignedBuffer owns its data and T is Send
unsafe impl<T: Pod + Send> Send for AlignedBuffer<T> {}
// Safety: AlignedBuffer owns its data and T is Sync
unsafe impl<T: Pod + Sync> Sync for AlignedBuffer<T> {}
