// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use core::ops::Index;

use crate::dimension::Layout;
use crate::{ArrayBase, BufferHandle, Element, Ix, NdArray1, RawData, ReadOnly};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> ! {
    panic!("ndview: index out of bounds");
}

/// Access the element at linear index `n`, in memory order.
///
/// **Panics** if the array is not bound or holds no elements, or, without
/// the `safe-access` feature, if `n` is out of range.
impl<A, const N: usize> Index<Ix> for ArrayBase<ReadOnly<A>, N>
where
    A: Element,
{
    type Output = A;

    #[inline]
    fn index(&self, n: Ix) -> &A {
        match self.ref_at(self.layout.linear_offset(n)) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

/// Access the element at `index`.
///
/// **Panics** like indexing by linear index.
impl<A, const N: usize> Index<[Ix; N]> for ArrayBase<ReadOnly<A>, N>
where
    A: Element,
{
    type Output = A;

    #[inline]
    fn index(&self, index: [Ix; N]) -> &A {
        match self.ref_at(self.layout.offset(&index)) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

/// Return `true` if the array shapes and all elements of `self` and `other`
/// are equal. Two arrays that are not bound are equal if their shapes are.
impl<A, B, S, S2, const N: usize> PartialEq<ArrayBase<S2, N>> for ArrayBase<S, N>
where
    A: Element + PartialEq<B>,
    B: Element,
    S: RawData<Elem = A>,
    S2: RawData<Elem = B>,
{
    fn eq(&self, rhs: &ArrayBase<S2, N>) -> bool {
        self.shape() == rhs.shape()
            && self.is_bound() == rhs.is_bound()
            && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<A, S, const N: usize> Eq for ArrayBase<S, N>
where
    A: Element + Eq,
    S: RawData<Elem = A>,
{
}

impl<A, S, const N: usize> Hash for ArrayBase<S, N>
where
    A: Element + Hash,
    S: RawData<Elem = A>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

/// Create a one-dimensional array owning the elements of the iterator.
///
/// ```
/// use ndview::NdArray1;
///
/// let a: NdArray1<i64> = (1..=4).collect();
/// assert_eq!(a.shape(), &[4]);
/// assert_eq!(a.get(3), Some(4));
/// ```
impl<A> FromIterator<A> for NdArray1<A>
where
    A: Element,
{
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let v: Vec<A> = iterable.into_iter().collect();
        let layout = Layout::from_len(v.len());
        Self::from_parts(BufferHandle::from_boxed_slice(v.into_boxed_slice()), layout)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstNdArray, NdArray, NdArray1, Ownership};
    use std::vec;

    #[test]
    fn eq_across_element_types() {
        let a = NdArray::<i32, 1>::from_vec([2], vec![1, 2]).unwrap();
        let b = ConstNdArray::<i32, 1>::from_vec([2], vec![1, 2]).unwrap();
        assert!(a == b);
        let c = NdArray::<i32, 2>::from_vec([1, 2], vec![1, 2]).unwrap();
        let d = NdArray::<i32, 2>::from_vec([2, 1], vec![1, 2]).unwrap();
        assert!(c != d);
    }

    #[test]
    fn empty_arrays_equal() {
        assert!(NdArray::<u8, 3>::new() == NdArray::<u8, 3>::new());
        let zero = NdArray::<u8, 2>::from_vec([0, 0], vec![]).unwrap();
        assert!(zero != NdArray::<u8, 2>::new());
    }

    #[test]
    fn collect_owns_elements() {
        let a: NdArray1<f32> = (0..5).map(|i| i as f32 / 2.).collect();
        assert_eq!(a.shape(), &[5]);
        assert_eq!(a.strides(), &[1]);
        assert_eq!(a.to_vec(), vec![0., 0.5, 1., 1.5, 2.]);
        assert_eq!(a.ownership(), Some(Ownership::Owning));
    }

    #[test]
    fn collect_empty_is_bound() {
        let a: NdArray1<u16> = core::iter::empty().collect();
        assert!(a.is_bound());
        assert_eq!(a.shape(), &[0]);
        assert_eq!(a.get(0), None);
    }

    #[test]
    #[should_panic]
    fn index_unbound_panics() {
        let a = ConstNdArray::<f32, 1>::new();
        let _ = a[0];
    }
}
