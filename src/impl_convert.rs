// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deep copies with element type conversion.

use alloc::vec::Vec;

use num_traits::AsPrimitive;

use crate::impl_constructors::try_with_capacity;
use crate::{ArrayBase, ArrayError, BufferHandle, DataMut, Element, RawData};

impl<A, S, const N: usize> ArrayBase<S, N>
where
    A: Element,
    S: RawData<Elem = A>,
{
    /// Create an array owning a converted copy of `source`.
    ///
    /// Elements are converted like the `as` operator does. The result has
    /// the shape of `source`, or is empty if `source` is not bound.
    ///
    /// **Errors** with `AllocationFailure` if the buffer cannot be allocated.
    ///
    /// ```
    /// use ndview::{ConstNdArray, NdArray};
    ///
    /// let a = NdArray::<f64, 2>::from_vec([1, 3], vec![1.5, -2.7, 300.0]).unwrap();
    /// let b = ConstNdArray::<i32, 2>::from_converted(&a).unwrap();
    /// assert_eq!(b.to_vec(), vec![1, -2, 300]);
    /// ```
    pub fn from_converted<T>(source: &ArrayBase<T, N>) -> Result<Self, ArrayError>
    where
        T: RawData,
        T::Elem: AsPrimitive<A>,
    {
        let mut array = Self::new();
        array.convert_from(source)?;
        Ok(array)
    }

    fn convert_from<T>(&mut self, source: &ArrayBase<T, N>) -> Result<(), ArrayError>
    where
        T: RawData,
        T::Elem: AsPrimitive<A>,
    {
        if !source.is_bound() {
            self.reset();
            return Ok(());
        }
        let numel = source.numel();
        let mut elements: Vec<A> = try_with_capacity(numel)?;
        log::trace!("allocated {} elements for a converted copy", numel);
        elements.extend(source.iter().map(AsPrimitive::<A>::as_));
        self.data = BufferHandle::from_boxed_slice(elements.into_boxed_slice());
        self.layout = source.layout;
        Ok(())
    }
}

impl<A, S, const N: usize> ArrayBase<S, N>
where
    A: Element,
    S: DataMut<Elem = A>,
{
    /// Replace the array's buffer with a newly allocated, owned copy of
    /// `source`, converting each element like the `as` operator does.
    ///
    /// Arrays sharing the previous buffer are not affected, nor is `source`
    /// by later writes to this array. If `source` is not bound, the array is
    /// reset.
    ///
    /// **Errors** with `AllocationFailure` if the buffer cannot be
    /// allocated; the array is left untouched.
    ///
    /// ```
    /// use ndview::NdArray;
    ///
    /// let a = NdArray::<i32, 1>::from_vec([3], vec![1, 2, 3]).unwrap();
    /// let mut b = NdArray::<f32, 1>::new();
    /// b.copy_from(&a).unwrap();
    /// b.set(0, 10.);
    /// assert_eq!(a.get(0), Some(1));
    /// assert_eq!(b.to_vec(), vec![10., 2., 3.]);
    /// ```
    pub fn copy_from<T>(&mut self, source: &ArrayBase<T, N>) -> Result<(), ArrayError>
    where
        T: RawData,
        T::Elem: AsPrimitive<A>,
    {
        self.convert_from(source)
    }
}
