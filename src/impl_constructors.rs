// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndview
//!
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::marker::PhantomData;

use num_traits::Zero;

use crate::dimension::Layout;
use crate::iterators::Indices;
use crate::{ArrayBase, ArrayError, BufferHandle, Descriptor, Element, HostAllocator, Ix, Ownership, RawData};

/// Reserve room for exactly `numel` elements.
pub(crate) fn try_with_capacity<A>(numel: Ix) -> Result<Vec<A>, ArrayError> {
    let mut v = Vec::new();
    v.try_reserve_exact(numel)
        .map_err(|_| ArrayError::AllocationFailure { numel })?;
    Ok(v)
}

/// # Constructor Methods
///
/// These apply to read-write and read-only arrays alike.
impl<A, S, const N: usize> ArrayBase<S, N>
where
    A: Element,
    S: RawData<Elem = A>,
{
    /// Create an empty array, holding no buffer.
    ///
    /// ```
    /// use ndview::NdArray2;
    ///
    /// let a = NdArray2::<f64>::new();
    /// assert!(!a.is_bound());
    /// assert_eq!(a.shape(), &[0, 0]);
    /// ```
    pub fn new() -> Self {
        ArrayBase {
            data: BufferHandle::new(),
            layout: Layout::empty(),
            marker: PhantomData,
        }
    }

    pub(crate) fn from_parts(data: BufferHandle<A>, layout: Layout<N>) -> Self {
        debug_assert!(!data.is_valid() || data.len() == layout.numel());
        ArrayBase {
            data,
            layout,
            marker: PhantomData,
        }
    }

    /// Create an array of `shape` owning the elements of `v`, which are
    /// taken in column-major order.
    ///
    /// **Errors** with `IncompatibleShape` if `v` does not hold exactly as
    /// many elements as the shape, or `Overflow` if the shape's element
    /// count overflows.
    ///
    /// ```
    /// use ndview::NdArray;
    ///
    /// let a = NdArray::<u8, 2>::from_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.get_nd([1, 0]), Some(2));
    /// assert!(NdArray::<u8, 2>::from_vec([2, 3], vec![1, 2, 3, 4]).is_err());
    /// ```
    pub fn from_vec(shape: [Ix; N], v: Vec<A>) -> Result<Self, ArrayError> {
        Self::from_boxed_slice(shape, v.into_boxed_slice())
    }

    /// Create an array of `shape` owning `data`.
    ///
    /// **Errors** like [`from_vec`](ArrayBase::from_vec).
    pub fn from_boxed_slice(shape: [Ix; N], data: Box<[A]>) -> Result<Self, ArrayError> {
        let layout = Layout::from_shape(shape)?;
        if layout.numel() != data.len() {
            return Err(ArrayError::IncompatibleShape {
                numel: layout.numel(),
                len: data.len(),
            });
        }
        Ok(Self::from_parts(BufferHandle::from_boxed_slice(data), layout))
    }

    /// Create an array of `shape` with every element set to `elem`.
    ///
    /// **Errors** with `AllocationFailure` if the buffer cannot be allocated.
    pub fn from_elem(shape: [Ix; N], elem: A) -> Result<Self, ArrayError> {
        let layout = Layout::from_shape(shape)?;
        let mut v = try_with_capacity(layout.numel())?;
        v.resize(layout.numel(), elem);
        Ok(Self::from_parts(BufferHandle::from_boxed_slice(v.into_boxed_slice()), layout))
    }

    /// Create an array of `shape` filled with zeros.
    ///
    /// **Errors** with `AllocationFailure` if the buffer cannot be allocated.
    pub fn zeros(shape: [Ix; N]) -> Result<Self, ArrayError>
    where
        A: Zero,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array of `shape` with elements computed from their index.
    ///
    /// ```
    /// use ndview::NdArray;
    ///
    /// let a = NdArray::<usize, 2>::from_shape_fn([3, 4], |[r, c]| 10 * r + c).unwrap();
    /// assert_eq!(a.get_nd([2, 3]), Some(23));
    /// assert_eq!(a.get(1), Some(10));
    /// ```
    pub fn from_shape_fn<F>(shape: [Ix; N], mut f: F) -> Result<Self, ArrayError>
    where
        F: FnMut([Ix; N]) -> A,
    {
        let layout = Layout::from_shape(shape)?;
        let mut v = try_with_capacity(layout.numel())?;
        v.extend(Indices::new(&layout).map(&mut f));
        Ok(Self::from_parts(BufferHandle::from_boxed_slice(v.into_boxed_slice()), layout))
    }

    /// Create an array of `shape` over the elements at `ptr`.
    ///
    /// With `Ownership::Borrowed` the array never releases the memory;
    /// with `Ownership::Owning` the last array sharing it does. A null `ptr`
    /// creates an empty array.
    ///
    /// **Errors** with `Overflow` if the shape's element count overflows.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of as many elements as
    /// `shape` describes, for as long as any array referencing it lives.
    /// With `Ownership::Owning`, `ptr` must come from
    /// `Box::<[A]>::into_raw` of a box of exactly that many elements.
    ///
    /// While the array or any of its clones lives, the elements must not be
    /// accessed through anything else, including other arrays created from
    /// the same pointer.
    pub unsafe fn from_raw_parts(
        ptr: *mut A,
        shape: [Ix; N],
        ownership: Ownership,
    ) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.assign(ptr, shape, ownership)?;
        Ok(array)
    }

    /// Create an array borrowing the buffer described by `desc`, consuming
    /// the descriptor.
    ///
    /// **Errors** with `RankMismatch` if the descriptor's rank is not `N` and
    /// `TypeMismatch` if its element tag is not `A::TAG`.
    pub fn from_descriptor(desc: Descriptor) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.attach(desc)?;
        Ok(array)
    }

    /// Ask `host` for a new array of `shape` and element type `A`, and
    /// borrow it. The host keeps ownership of the allocation.
    ///
    /// **Errors** with whatever the host reports, or as
    /// [`from_descriptor`](ArrayBase::from_descriptor) if the host answers
    /// with an array of another rank or element type. A host array of the
    /// right rank but another shape is rejected with `IncompatibleShape`.
    pub fn allocate_in<H>(host: &mut H, shape: [Ix; N]) -> Result<Self, ArrayError>
    where
        H: HostAllocator + ?Sized,
    {
        let layout = Layout::from_shape(shape)?;
        let desc = host.allocate(&shape, A::TAG)?;
        if desc.rank() == N && desc.shape() != &shape[..] {
            log::debug!("host allocated shape {:?}, requested {:?}", desc.shape(), shape);
            return Err(ArrayError::IncompatibleShape {
                numel: layout.numel(),
                len: desc.numel(),
            });
        }
        Self::from_descriptor(desc)
    }
}

impl<S, const N: usize> Default for ArrayBase<S, N>
where
    S: RawData,
{
    /// Create an empty array.
    fn default() -> Self {
        Self::new()
    }
}
