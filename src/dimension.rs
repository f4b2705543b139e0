// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shapes, strides and index arithmetic.
//!
//! All arrays are laid out in column-major ("Fortran") order: the first
//! axis varies fastest.

use crate::ArrayError;

/// Array index type
pub type Ix = usize;

/// Compute the column-major strides of `shape` and the number of elements
/// it describes.
///
/// Shape `(a, b, c)` gives strides `(1, a, a * b)` and `a * b * c` elements.
/// Extents of zero are allowed and propagate into the later strides. A rank
/// zero shape describes zero elements.
///
/// **Errors** with `Overflow` if the element count does not fit in `usize`.
///
/// ```
/// use ndview::dimension::fortran_strides;
///
/// assert_eq!(fortran_strides(&[3, 4, 2]), Ok(([1, 3, 12], 24)));
/// ```
pub fn fortran_strides<const N: usize>(shape: &[Ix; N]) -> Result<([Ix; N], Ix), ArrayError> {
    let mut strides = [0; N];
    if N == 0 {
        return Ok((strides, 0));
    }
    let mut cum_prod: Ix = 1;
    for (i, &dim) in shape.iter().enumerate() {
        cum_prod = cum_prod.checked_mul(dim).ok_or(ArrayError::Overflow)?;
        strides[(i + 1) % N] = cum_prod;
    }
    // the last product wrapped around into the first stride
    strides[0] = 1;
    Ok((strides, cum_prod))
}

/// Return the number of elements a shape of any rank describes, saturating
/// on overflow. A rank zero shape describes zero elements.
pub fn size_of_shape(shape: &[Ix]) -> Ix {
    if shape.is_empty() {
        return 0;
    }
    shape.iter().fold(1, |s, &a| s.saturating_mul(a))
}

/// Convert a coordinate list to a fixed size index.
///
/// **Errors** with `LengthError` unless `index` has exactly `N` entries.
pub fn fixed_index<const N: usize>(index: &[Ix]) -> Result<[Ix; N], ArrayError> {
    <[Ix; N]>::try_from(index).map_err(|_| ArrayError::LengthError {
        expected: N,
        found: index.len(),
    })
}

/// Bring `k` into `0..n`, wrapping modulo `n` with `safe-access` and
/// rejecting it otherwise.
#[inline(always)]
fn protect(k: Ix, n: Ix) -> Option<Ix> {
    if cfg!(feature = "safe-access") {
        k.checked_rem(n)
    } else if k < n {
        Some(k)
    } else {
        None
    }
}

/// Iteration: use `dim` as size and return the next index after `index` in
/// column-major order, or `None` if there are no more.
#[inline]
pub(crate) fn next_for<const N: usize>(dim: &[Ix; N], mut index: [Ix; N]) -> Option<[Ix; N]> {
    for (ix, &d) in index.iter_mut().zip(dim) {
        *ix += 1;
        if *ix == d {
            *ix = 0;
        } else {
            return Some(index);
        }
    }
    None
}

/// Shape, strides and element count of an array of rank `N`.
///
/// The strides and element count are always derived from the shape through
/// [`fortran_strides`]; the all-zero layout describes an empty array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout<const N: usize> {
    dim: [Ix; N],
    strides: [Ix; N],
    numel: Ix,
}

impl Layout<1> {
    /// The layout of a vector of `len` elements.
    pub(crate) const fn from_len(len: Ix) -> Self {
        Layout {
            dim: [len],
            strides: [1],
            numel: len,
        }
    }
}

impl<const N: usize> Layout<N> {
    /// The layout of an empty array: shape, strides and count all zero.
    pub const fn empty() -> Self {
        Layout {
            dim: [0; N],
            strides: [0; N],
            numel: 0,
        }
    }

    /// Create the column-major layout of `shape`.
    ///
    /// **Errors** with `Overflow` if the element count does not fit in `usize`.
    pub fn from_shape(shape: [Ix; N]) -> Result<Self, ArrayError> {
        let (strides, numel) = fortran_strides(&shape)?;
        Ok(Layout {
            dim: shape,
            strides,
            numel,
        })
    }

    #[inline]
    pub fn dim(&self) -> &[Ix; N] {
        &self.dim
    }

    #[inline]
    pub fn strides(&self) -> &[Ix; N] {
        &self.strides
    }

    #[inline]
    pub fn numel(&self) -> Ix {
        self.numel
    }

    /// Return the buffer offset of linear index `n`.
    ///
    /// With `safe-access`, `n` wraps modulo the element count; without it,
    /// `None` is returned when `n` is out of bounds. Always `None` when the
    /// layout holds no elements.
    #[inline]
    pub fn linear_offset(&self, n: Ix) -> Option<Ix> {
        protect(n, self.numel)
    }

    /// Return the buffer offset of `index`.
    ///
    /// Each coordinate is brought into range on its own axis, wrapping
    /// modulo the extent with `safe-access`. Always `None` when the layout
    /// holds no elements.
    #[inline]
    pub fn offset(&self, index: &[Ix; N]) -> Option<Ix> {
        if self.numel == 0 {
            return None;
        }
        let mut offset = 0;
        for ((&i, &d), &s) in index.iter().zip(&self.dim).zip(&self.strides) {
            offset += protect(i, d)? * s;
        }
        Some(offset)
    }

    /// Return the buffer offset of a coordinate list.
    ///
    /// **Errors** with `LengthError` unless `index` has exactly `N` entries.
    pub fn offset_of_slice(&self, index: &[Ix]) -> Result<Option<Ix>, ArrayError> {
        let index = fixed_index::<N>(index)?;
        Ok(self.offset(&index))
    }
}

impl<const N: usize> Default for Layout<N> {
    fn default() -> Self {
        Self::empty()
    }
}
