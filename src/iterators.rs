// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Iterators over array elements and indices.
//!
//! All iterators visit the array in memory order, the first axis varying
//! fastest.

use core::iter::{FusedIterator, Zip};
use core::marker::PhantomData;

use rawpointer::PointerExt;

use crate::dimension::{next_for, Layout};
use crate::Ix;

/// An iterator over the elements of an array, by value.
///
/// Elements are read as the iterator advances, so writes made through
/// another array sharing the buffer are seen by elements not yet visited.
pub struct Iter<'a, A> {
    ptr: *const A,
    end: *const A,
    life: PhantomData<&'a A>,
}

impl<'a, A> Iter<'a, A> {
    /// Iterate over `len` elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` elements for `'a`.
    #[inline]
    pub(crate) unsafe fn new(ptr: *const A, len: usize) -> Self {
        Iter {
            ptr,
            end: ptr.add(len),
            life: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn empty() -> Self {
        Iter {
            ptr: core::ptr::NonNull::dangling().as_ptr(),
            end: core::ptr::NonNull::dangling().as_ptr(),
            life: PhantomData,
        }
    }
}

impl<'a, A: Copy> Iterator for Iter<'a, A> {
    type Item = A;

    #[inline]
    fn next(&mut self) -> Option<A> {
        if self.ptr == self.end {
            None
        } else {
            unsafe { Some(self.ptr.post_inc().read()) }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, A: Copy> DoubleEndedIterator for Iter<'a, A> {
    #[inline]
    fn next_back(&mut self) -> Option<A> {
        if self.ptr == self.end {
            None
        } else {
            unsafe { Some(self.end.pre_dec().read()) }
        }
    }
}

impl<'a, A: Copy> ExactSizeIterator for Iter<'a, A> {
    fn len(&self) -> usize {
        if core::mem::size_of::<A>() == 0 {
            return 0;
        }
        (self.end as usize - self.ptr as usize) / core::mem::size_of::<A>()
    }
}

impl<'a, A: Copy> FusedIterator for Iter<'a, A> {}

impl<'a, A> Clone for Iter<'a, A> {
    fn clone(&self) -> Self {
        Iter {
            ptr: self.ptr,
            end: self.end,
            life: PhantomData,
        }
    }
}

/// An iterator over the indices of an array of rank `N`.
///
/// ```
/// use ndview::Layout;
/// use ndview::iterators::Indices;
///
/// let layout = Layout::from_shape([2, 3]).unwrap();
/// let ix: Vec<_> = Indices::new(&layout).collect();
/// assert_eq!(ix, [[0, 0], [1, 0], [0, 1], [1, 1], [0, 2], [1, 2]]);
/// ```
#[derive(Clone, Debug)]
pub struct Indices<const N: usize> {
    dim: [Ix; N],
    index: Option<[Ix; N]>,
    remaining: usize,
}

impl<const N: usize> Indices<N> {
    /// Iterate over every index of `layout`; nothing if it holds no
    /// elements.
    pub fn new(layout: &Layout<N>) -> Self {
        let remaining = layout.numel();
        Indices {
            dim: *layout.dim(),
            index: if remaining == 0 { None } else { Some([0; N]) },
            remaining,
        }
    }
}

impl<const N: usize> Iterator for Indices<N> {
    type Item = [Ix; N];

    #[inline]
    fn next(&mut self) -> Option<[Ix; N]> {
        let index = self.index?;
        self.index = next_for(&self.dim, index);
        self.remaining -= 1;
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Indices<N> {}

impl<const N: usize> FusedIterator for Indices<N> {}

/// An iterator over the indices and elements of an array.
pub type IndexedIter<'a, A, const N: usize> = Zip<Indices<N>, Iter<'a, A>>;
