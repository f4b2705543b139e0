// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::boxed::Box;
use core::fmt;
use core::ptr::{self, NonNull};

#[cfg(target_has_atomic = "ptr")]
use alloc::sync::Arc;
#[cfg(not(target_has_atomic = "ptr"))]
use portable_atomic_util::Arc;

/// Release policy of a buffer, fixed when the buffer is attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The buffer is released when its last handle goes away.
    Owning,
    /// The buffer is never released; somebody else keeps it alive.
    Borrowed,
}

impl Ownership {
    /// `Owning` if `manage` is true, `Borrowed` otherwise.
    #[inline]
    pub fn managed(manage: bool) -> Self {
        if manage {
            Ownership::Owning
        } else {
            Ownership::Borrowed
        }
    }
}

// The allocation shared by all handles to one buffer.
//
// An owning buffer is a leaked `Box<[A]>` of `len` elements and is
// released by rebuilding that box.
struct RawBuffer<A> {
    ptr: NonNull<A>,
    len: usize,
    ownership: Ownership,
}

impl<A> Drop for RawBuffer<A> {
    fn drop(&mut self) {
        if self.ownership == Ownership::Owning {
            log::trace!("releasing owned buffer of {} elements at {:p}", self.len, self.ptr);
            unsafe {
                drop(Box::from_raw(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len)));
            }
        }
    }
}

unsafe impl<A> Send for RawBuffer<A> where A: Send + Sync {}
unsafe impl<A> Sync for RawBuffer<A> where A: Send + Sync {}

/// Reference-counted handle to a flat buffer of elements.
///
/// Every handle sharing a buffer sees the same [`Ownership`]. An `Owning`
/// buffer is released exactly once, when the last handle to it is cleared
/// or dropped; a `Borrowed` buffer is never released. The reference count
/// is atomic.
pub struct BufferHandle<A> {
    inner: Option<Arc<RawBuffer<A>>>,
}

impl<A> BufferHandle<A> {
    /// Create a handle that holds no buffer.
    pub const fn new() -> Self {
        BufferHandle { inner: None }
    }

    /// Take ownership of `data`; it is released with the last handle.
    pub fn from_boxed_slice(data: Box<[A]>) -> Self {
        let len = data.len();
        let ptr = NonNull::from(Box::leak(data)).cast::<A>();
        unsafe { Self::from_nonnull(ptr, len, Ownership::Owning) }
    }

    unsafe fn from_nonnull(ptr: NonNull<A>, len: usize, ownership: Ownership) -> Self {
        BufferHandle {
            inner: Some(Arc::new(RawBuffer { ptr, len, ownership })),
        }
    }

    /// Replace the held buffer with the `len` elements at `ptr`.
    ///
    /// The previous buffer is let go first, following its own ownership and
    /// reference count. A null `ptr` leaves the handle empty.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` elements for as
    /// long as any handle to the buffer exists. With `Ownership::Owning`,
    /// `ptr` must come from `Box::<[A]>::into_raw` of a box of exactly `len`
    /// elements, and nothing else may release it.
    pub unsafe fn attach(&mut self, ptr: *mut A, len: usize, ownership: Ownership) {
        self.clear();
        if let Some(ptr) = NonNull::new(ptr) {
            *self = Self::from_nonnull(ptr, len, ownership);
        }
    }

    /// Drop this handle's reference, releasing the buffer if it was the
    /// last one and the buffer is owned.
    #[inline]
    pub fn clear(&mut self) {
        self.inner = None;
    }

    /// Return `true` if the handle holds a buffer.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Return a pointer to the first element, or null.
    #[inline]
    pub fn as_ptr(&self) -> *mut A {
        match self.inner {
            Some(ref buf) => buf.ptr.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    #[inline]
    pub(crate) fn as_nonnull(&self) -> Option<NonNull<A>> {
        self.inner.as_ref().map(|buf| buf.ptr)
    }

    /// Number of elements in the buffer; zero without a buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |buf| buf.len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the buffer's ownership, or `None` without a buffer.
    #[inline]
    pub fn ownership(&self) -> Option<Ownership> {
        self.inner.as_ref().map(|buf| buf.ownership)
    }

    /// Number of handles sharing the buffer; zero without a buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        self.inner.as_ref().map_or(0, Arc::strong_count)
    }

    /// Return `true` if both handles share one buffer.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<A> Clone for BufferHandle<A> {
    fn clone(&self) -> Self {
        BufferHandle {
            inner: self.inner.clone(),
        }
    }
}

impl<A> Default for BufferHandle<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for BufferHandle<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferHandle")
            .field("ptr", &self.as_ptr())
            .field("len", &self.len())
            .field("ownership", &self.ownership())
            .field("ref_count", &self.ref_count())
            .finish()
    }
}
