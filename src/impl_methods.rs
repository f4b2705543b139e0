// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use core::mem;
use core::slice;

use crate::dimension::{fixed_index, Layout};
use crate::iterators::{Indices, IndexedIter, Iter};
use crate::{
    ArrayBase, ArrayError, ConstNdArray, DataMut, Descriptor, Element, Ix, Ownership,
    RawData, ReadOnly, ReadWrite,
};

/// # Methods For All Array Types
impl<A, S, const N: usize> ArrayBase<S, N>
where
    A: Element,
    S: RawData<Elem = A>,
{
    /// Return the number of dimensions, `N`.
    #[inline]
    pub const fn rank(&self) -> usize {
        N
    }

    /// Return the shape of the array. All zeros for an empty array.
    #[inline]
    pub fn shape(&self) -> &[Ix; N] {
        self.layout.dim()
    }

    /// Return the extent of axis `i`, taken modulo the rank.
    ///
    /// Always zero for a rank zero array.
    #[inline]
    pub fn extent(&self, i: usize) -> Ix {
        match i.checked_rem(N) {
            Some(i) => self.layout.dim()[i],
            None => 0,
        }
    }

    /// Return the strides of the array.
    #[inline]
    pub fn strides(&self) -> &[Ix; N] {
        self.layout.strides()
    }

    /// Return the stride of axis `i`, taken modulo the rank.
    #[inline]
    pub fn stride(&self, i: usize) -> Ix {
        match i.checked_rem(N) {
            Some(i) => self.layout.strides()[i],
            None => 0,
        }
    }

    /// Return the total number of elements.
    #[inline]
    pub fn numel(&self) -> Ix {
        self.layout.numel()
    }

    /// Return the layout (shape, strides, element count) of the array.
    #[inline]
    pub fn layout(&self) -> &Layout<N> {
        &self.layout
    }

    /// Return `true` if the array references a buffer.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.data.is_valid()
    }

    /// Return the ownership of the referenced buffer, `None` if the array is
    /// not bound.
    #[inline]
    pub fn ownership(&self) -> Option<Ownership> {
        self.data.ownership()
    }

    /// Return the number of arrays sharing this array's buffer, itself
    /// included; zero if the array is not bound.
    #[inline]
    pub fn ref_count(&self) -> usize {
        self.data.ref_count()
    }

    /// Return `true` if both arrays share one buffer.
    #[inline]
    pub fn shares_buffer<T>(&self, other: &ArrayBase<T, N>) -> bool
    where
        T: RawData<Elem = A>,
    {
        self.data.ptr_eq(&other.data)
    }

    /// Return a pointer to the first element, null if the array is not
    /// bound.
    #[inline]
    pub fn as_ptr(&self) -> *const A {
        self.data.as_ptr()
    }

    /// Pointer to the element at buffer offset `offset`, if bound.
    #[inline]
    fn ptr_at(&self, offset: Option<Ix>) -> Option<*mut A> {
        let base = self.data.as_nonnull()?;
        let offset = offset?;
        debug_assert!(offset < self.data.len());
        unsafe { Some(base.as_ptr().add(offset)) }
    }

    /// Return the element at linear index `n`, counting in memory order.
    ///
    /// With the `safe-access` feature (default), `n` wraps modulo the
    /// element count; without it, an out-of-range `n` gives `None`. Returns
    /// `None` for an array that is not bound or holds no elements.
    ///
    /// ```
    /// use ndview::NdArray;
    ///
    /// let a = NdArray::<i32, 1>::from_vec([3], vec![7, 8, 9]).unwrap();
    /// assert_eq!(a.get(1), Some(8));
    /// # #[cfg(feature = "safe-access")]
    /// assert_eq!(a.get(4), Some(8));
    /// ```
    #[inline]
    pub fn get(&self, n: Ix) -> Option<A> {
        let ptr = self.ptr_at(self.layout.linear_offset(n))?;
        unsafe { Some(ptr.read()) }
    }

    /// Return the element at `index`.
    ///
    /// Each coordinate wraps modulo its own extent with `safe-access`;
    /// without it, any out-of-range coordinate gives `None`.
    #[inline]
    pub fn get_nd(&self, index: [Ix; N]) -> Option<A> {
        let ptr = self.ptr_at(self.layout.offset(&index))?;
        unsafe { Some(ptr.read()) }
    }

    /// Return the element at the coordinates in `index`, like
    /// [`get_nd`](ArrayBase::get_nd).
    ///
    /// **Errors** with `LengthError` unless `index` holds exactly `N`
    /// coordinates.
    pub fn get_list(&self, index: &[Ix]) -> Result<Option<A>, ArrayError> {
        Ok(self.get_nd(fixed_index(index)?))
    }

    /// Return the element at buffer offset `offset`, without any checks.
    ///
    /// # Safety
    ///
    /// The array must be bound and `offset` less than its element count.
    #[inline]
    pub unsafe fn uget(&self, offset: Ix) -> A {
        debug_assert!(self.is_bound() && offset < self.numel());
        self.data.as_ptr().add(offset).read()
    }

    /// Return an iterator over the elements in memory order.
    pub fn iter(&self) -> Iter<'_, A> {
        match self.data.as_nonnull() {
            Some(ptr) => unsafe { Iter::new(ptr.as_ptr(), self.data.len()) },
            None => Iter::empty(),
        }
    }

    /// Return an iterator over the indices of the array in memory order.
    ///
    /// Empty if the array is not bound.
    pub fn indices(&self) -> Indices<N> {
        if self.is_bound() {
            Indices::new(&self.layout)
        } else {
            Indices::new(&Layout::empty())
        }
    }

    /// Return an iterator of indices and elements, in memory order.
    ///
    /// ```
    /// use ndview::NdArray;
    ///
    /// let a = NdArray::<u8, 2>::from_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// let mut it = a.indexed_iter();
    /// assert_eq!(it.next(), Some(([0, 0], 1)));
    /// assert_eq!(it.next(), Some(([1, 0], 2)));
    /// assert_eq!(it.next(), Some(([0, 1], 3)));
    /// ```
    pub fn indexed_iter(&self) -> IndexedIter<'_, A, N> {
        self.indices().zip(self.iter())
    }

    /// Return the elements in memory order as a new vector.
    pub fn to_vec(&self) -> Vec<A> {
        self.iter().collect()
    }

    /// Replace the array's buffer with the elements at `ptr`, laid out as
    /// `shape`.
    ///
    /// A null `ptr` resets the array. Nothing happens if `ptr` is already
    /// the array's buffer. Otherwise the array lets go of its previous buffer
    /// (which may release it) and attaches to `ptr` with `ownership`.
    ///
    /// **Errors** with `Overflow` if the shape's element count overflows;
    /// the array is left untouched.
    ///
    /// # Safety
    ///
    /// As for [`from_raw_parts`](ArrayBase::from_raw_parts).
    pub unsafe fn assign(
        &mut self,
        ptr: *mut A,
        shape: [Ix; N],
        ownership: Ownership,
    ) -> Result<(), ArrayError> {
        if ptr.is_null() {
            self.reset();
            return Ok(());
        }
        if ptr == self.data.as_ptr() {
            return Ok(());
        }
        let layout = Layout::from_shape(shape)?;
        self.data.attach(ptr, layout.numel(), ownership);
        self.layout = layout;
        Ok(())
    }

    /// Replace the array's buffer with the elements of `v`, owned by the
    /// array and laid out as `shape`.
    ///
    /// **Errors** like [`from_vec`](ArrayBase::from_vec); the array is left
    /// untouched.
    pub fn assign_vec(&mut self, shape: [Ix; N], v: Vec<A>) -> Result<(), ArrayError> {
        *self = Self::from_vec(shape, v)?;
        Ok(())
    }

    /// Borrow the host buffer described by `desc`, replacing the array's
    /// buffer. The descriptor is consumed, also on error.
    ///
    /// **Errors** with `RankMismatch` if the descriptor's rank is not `N`,
    /// `TypeMismatch` if its element tag is not `A::TAG`, and `Overflow` if
    /// its shape overflows. The array is left untouched on error.
    pub fn attach(&mut self, desc: Descriptor) -> Result<(), ArrayError> {
        let shape = desc.check::<A, N>()?;
        unsafe { self.assign(desc.as_ptr().cast::<A>(), shape, Ownership::Borrowed) }
    }

    /// Drop this array's reference to its buffer, releasing the buffer if it
    /// was the last reference and the buffer is owned.
    ///
    /// The shape and strides are kept; see [`reset`](ArrayBase::reset).
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clear the array and zero its shape, strides and element count.
    pub fn reset(&mut self) {
        self.clear();
        self.layout = Layout::empty();
    }

    /// Exchange buffer, shape and strides with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

/// # Methods For Read-Write Arrays
impl<A, S, const N: usize> ArrayBase<S, N>
where
    A: Element,
    S: DataMut<Elem = A>,
{
    /// Return a mutable pointer to the first element, null if the array is
    /// not bound.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut A {
        self.data.as_ptr()
    }

    /// Set the element at linear index `n` and return the previous value,
    /// `None` if there is no such element. Indexing is as for
    /// [`get`](ArrayBase::get).
    ///
    /// The write is seen by every array sharing the buffer.
    #[inline]
    pub fn set(&mut self, n: Ix, value: A) -> Option<A> {
        let ptr = self.ptr_at(self.layout.linear_offset(n))?;
        unsafe { Some(ptr.replace(value)) }
    }

    /// Set the element at `index` and return the previous value. Indexing is
    /// as for [`get_nd`](ArrayBase::get_nd).
    #[inline]
    pub fn set_nd(&mut self, index: [Ix; N], value: A) -> Option<A> {
        let ptr = self.ptr_at(self.layout.offset(&index))?;
        unsafe { Some(ptr.replace(value)) }
    }

    /// Set the element at the coordinates in `index` and return the previous
    /// value.
    ///
    /// **Errors** with `LengthError` unless `index` holds exactly `N`
    /// coordinates.
    pub fn set_list(&mut self, index: &[Ix], value: A) -> Result<Option<A>, ArrayError> {
        Ok(self.set_nd(fixed_index(index)?, value))
    }

    /// Set the element at buffer offset `offset`, without any checks.
    ///
    /// # Safety
    ///
    /// The array must be bound and `offset` less than its element count.
    #[inline]
    pub unsafe fn uset(&mut self, offset: Ix, value: A) {
        debug_assert!(self.is_bound() && offset < self.numel());
        self.data.as_ptr().add(offset).write(value)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: A) {
        self.map_inplace(|_| value)
    }

    /// Replace every element with `f` applied to it.
    pub fn map_inplace<F>(&mut self, mut f: F)
    where
        F: FnMut(A) -> A,
    {
        let ptr = self.data.as_ptr();
        for i in 0..self.data.len() {
            unsafe {
                let elt = ptr.add(i);
                elt.write(f(elt.read()));
            }
        }
    }
}

impl<A, const N: usize> ArrayBase<ReadWrite<A>, N>
where
    A: Element,
{
    /// Turn the array into a read-only array over the same buffer.
    ///
    /// **Errors** by returning the array unchanged if other arrays share its
    /// buffer, since they could still write to it.
    ///
    /// ```
    /// use ndview::NdArray;
    ///
    /// let a = NdArray::<i32, 1>::from_vec([2], vec![1, 2]).unwrap();
    /// let b = a.clone();
    /// let a = a.into_read_only().unwrap_err();
    /// drop(b);
    /// let c = a.into_read_only().unwrap();
    /// assert_eq!(c.as_slice(), Some(&[1, 2][..]));
    /// ```
    pub fn into_read_only(self) -> Result<ConstNdArray<A, N>, Self> {
        if self.ref_count() > 1 {
            return Err(self);
        }
        let ArrayBase { data, layout, .. } = self;
        Ok(ArrayBase::from_parts(data, layout))
    }
}

impl<A, const N: usize> ArrayBase<ReadOnly<A>, N>
where
    A: Element,
{
    /// Return the elements in memory order as a slice, `None` if the array
    /// is not bound.
    pub fn as_slice(&self) -> Option<&[A]> {
        let ptr = self.data.as_nonnull()?;
        unsafe { Some(slice::from_raw_parts(ptr.as_ptr(), self.data.len())) }
    }

    #[inline]
    pub(crate) fn ref_at(&self, offset: Option<Ix>) -> Option<&A> {
        let ptr = self.ptr_at(offset)?;
        unsafe { Some(&*ptr) }
    }
}
