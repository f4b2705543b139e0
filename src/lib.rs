// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndview"]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndview` crate provides [`ArrayBase`], an n-dimensional array of
//! fixed rank laid out in column-major order (the first axis varies
//! fastest), over memory that it either owns or borrows.
//!
//! - An array is generic over its element type and its rank `N`, which is a
//!   const generic parameter. Shapes, strides and indices are `[Ix; N]`.
//! - Owned arrays release their buffer when the last array referencing it
//!   is dropped or cleared. Borrowed arrays never release; they view memory
//!   that somebody else, typically a host runtime, keeps alive.
//! - Cloning an array is shallow: the clone shares the buffer and increments
//!   an atomic reference count. Use [`copy_from`](ArrayBase::copy_from) or
//!   [`from_converted`](ArrayBase::from_converted) for deep copies, which
//!   also convert the element type.
//! - Arrays attach to host-described buffers through a [`Descriptor`],
//!   which is validated against the array's rank and [`Element`] tag.
//!
//! ## Array types
//!
//! - [`NdArray<A, N>`](NdArray): readable and writable elements.
//! - [`ConstNdArray<A, N>`](ConstNdArray): read-only elements, for instance
//!   inputs handed over by a host runtime.
//!
//! ```
//! use ndview::NdArray;
//!
//! // 3 rows and 4 columns, stored column by column
//! let a = NdArray::<i32, 2>::from_vec([3, 4], (0..12).collect()).unwrap();
//! assert_eq!(a.strides(), &[1, 3]);
//! assert_eq!(a.get_nd([2, 1]), Some(5));
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: Rust standard library (enabled by default). Without it the
//!   crate only depends on `alloc`.
//! - `safe-access`: out-of-range indices wrap modulo the extent (enabled by
//!   default). Without it, they are rejected.
//! - `approx`: implements the `approx` traits for approximate comparison of
//!   arrays.
//! - `half`: registers `half::f16` and `half::bf16` as element types.

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

use core::marker::PhantomData;

#[macro_use]
mod private;

#[cfg(feature = "approx")]
mod array_approx;
mod arrayformat;
mod arraytraits;
mod data_repr;
mod data_traits;
pub mod dimension;
mod elem;
mod error;
mod host;
mod impl_clone;
mod impl_constructors;
mod impl_convert;
mod impl_methods;
pub mod iterators;
pub mod prelude;

pub use crate::data_repr::{BufferHandle, Ownership};
pub use crate::data_traits::{DataMut, RawData, ReadOnly, ReadWrite};
pub use crate::dimension::{Ix, Layout};
pub use crate::elem::{ElemKind, ElemTag, Element, ELEMENT_TAGS};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::host::{Descriptor, HostAllocator};
pub use crate::iterators::{Indices, IndexedIter, Iter};

/// An n-dimensional array of rank `N` over a shared, ownership-tagged buffer.
///
/// The array is either *empty*, holding no buffer, or *bound* to a buffer of
/// exactly [`numel`](ArrayBase::numel) elements. Elements are stored in
/// column-major order: `stride[0] == 1` and every following stride is the
/// product of the preceding extents.
///
/// The type parameter `S` decides whether elements can be written, see
/// [`ReadWrite`] and [`ReadOnly`]; use the aliases [`NdArray`] and
/// [`ConstNdArray`].
///
/// ## Sharing
///
/// `clone()` is shallow. All clones of a read-write array observe each
/// other's writes, which is why elements are read and written by value
/// rather than through references, and why read-write arrays are neither
/// `Send` nor `Sync`.
pub struct ArrayBase<S, const N: usize>
where
    S: RawData,
{
    data: BufferHandle<S::Elem>,
    layout: Layout<N>,
    marker: PhantomData<S>,
}

/// An array with writable elements.
pub type NdArray<A, const N: usize> = ArrayBase<ReadWrite<A>, N>;

/// An array with read-only elements.
pub type ConstNdArray<A, const N: usize> = ArrayBase<ReadOnly<A>, N>;

/// One-dimensional array with writable elements.
pub type NdArray1<A> = NdArray<A, 1>;
/// Two-dimensional array with writable elements.
pub type NdArray2<A> = NdArray<A, 2>;
/// Three-dimensional array with writable elements.
pub type NdArray3<A> = NdArray<A, 3>;
