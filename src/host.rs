// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exchange of buffers with a host runtime.
//!
//! The host describes its arrays with a [`Descriptor`]; arrays attach to
//! them in borrowed mode, leaving the host in charge of the memory.
//!
//! A descriptor is consumed by the attaching array, so every array viewing
//! a host buffer is a clone of that one array and shares its reference
//! count. This is what lets [`into_read_only`](crate::ArrayBase::into_read_only)
//! prove that no writable alias remains.

use alloc::vec::Vec;
use core::ffi::c_void;
use core::fmt;

use crate::dimension;
use crate::{ArrayError, ElemTag, Element, Ix};

/// A host array: data pointer, per-axis extents and element tag.
///
/// The extents are in column-major order and the data contiguous; the rank
/// is the number of extents.
///
/// A descriptor is single-use: attaching consumes it.
///
/// ```compile_fail
/// use ndview::{Descriptor, Element, NdArray};
///
/// let mut data = [1u32, 2];
/// let desc = unsafe { Descriptor::new(data.as_mut_ptr().cast(), vec![2], u32::TAG) };
/// let a = NdArray::<u32, 1>::from_descriptor(desc).unwrap();
/// let b = NdArray::<u32, 1>::from_descriptor(desc).unwrap();
/// ```
pub struct Descriptor {
    ptr: *mut c_void,
    shape: Vec<Ix>,
    tag: ElemTag,
}

impl Descriptor {
    /// Describe the host array at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be null, or aligned and valid for reads and writes of
    /// `product(shape)` elements of the type described by `tag`, for as long
    /// as any array attached to this descriptor lives.
    ///
    /// While such an array lives, the memory must not be accessed other than
    /// through it and its clones: no other descriptor, array or reference
    /// may read or write the same elements.
    pub unsafe fn new(ptr: *mut c_void, shape: Vec<Ix>, tag: ElemTag) -> Self {
        Descriptor { ptr, shape, tag }
    }

    #[inline]
    pub fn as_ptr(&self) -> *mut c_void {
        self.ptr
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn shape(&self) -> &[Ix] {
        &self.shape
    }

    #[inline]
    pub fn tag(&self) -> ElemTag {
        self.tag
    }

    /// Number of elements described, saturating on overflow.
    pub fn numel(&self) -> Ix {
        dimension::size_of_shape(&self.shape)
    }

    /// Check the descriptor against rank `N` and element type `A`, then
    /// return its shape.
    pub(crate) fn check<A: Element, const N: usize>(&self) -> Result<[Ix; N], ArrayError> {
        if self.rank() != N {
            log::debug!("rejecting host array of rank {}, expected {}", self.rank(), N);
            return Err(ArrayError::RankMismatch {
                expected: N,
                found: self.rank(),
            });
        }
        if self.tag != A::TAG {
            log::debug!("rejecting host array of {}, expected {}", self.tag, A::TAG);
            return Err(ArrayError::TypeMismatch {
                expected: A::TAG,
                found: self.tag,
            });
        }
        dimension::fixed_index(&self.shape)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("ptr", &self.ptr)
            .field("shape", &self.shape)
            .field("tag", &self.tag)
            .finish()
    }
}

/// A host runtime able to allocate arrays that it keeps ownership of.
///
/// Used by [`ArrayBase::allocate_in`](crate::ArrayBase::allocate_in) to
/// produce output arrays in host memory.
pub trait HostAllocator {
    /// Allocate a host array of `shape` with elements described by `tag`.
    ///
    /// The returned descriptor must stay valid until the host array is
    /// released by the host, which must not happen while arrays attached to
    /// it are alive. The host must not access the elements during that time.
    fn allocate(&mut self, shape: &[Ix], tag: ElemTag) -> Result<Descriptor, ArrayError>;
}
