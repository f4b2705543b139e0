// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::string::{String, ToString};
use core::fmt;

use crate::{ArrayBase, Element, RawData};

fn format_summary<S, const N: usize>(array: &ArrayBase<S, N>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    S: RawData,
{
    if !array.is_bound() {
        return write!(f, "Empty {}-dimensional array.", N);
    }
    write!(f, "{}-dimensional array of size (", N)?;
    for (i, extent) in array.layout.dim().iter().enumerate() {
        if i != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", extent)?;
    }
    write!(f, ") = {} elements.", array.layout.numel())
}

impl<A, S, const N: usize> ArrayBase<S, N>
where
    A: Element,
    S: RawData<Elem = A>,
{
    /// Return a one-line summary of the array's rank and shape.
    ///
    /// ```
    /// use ndview::NdArray;
    ///
    /// let a = NdArray::<f32, 2>::zeros([3, 4]).unwrap();
    /// assert_eq!(a.describe(), "2-dimensional array of size (3, 4) = 12 elements.");
    /// assert_eq!(NdArray::<f32, 3>::new().describe(), "Empty 3-dimensional array.");
    /// ```
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// Format the array summary, as returned by
/// [`describe`](ArrayBase::describe).
impl<A, S, const N: usize> fmt::Display for ArrayBase<S, N>
where
    A: Element,
    S: RawData<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_summary(self, f)
    }
}

/// Format the elements in memory order using `Debug`, applying the
/// formatting parameters to each element, followed by the layout and
/// ownership of the array.
impl<A, S, const N: usize> fmt::Debug for ArrayBase<S, N>
where
    A: Element + fmt::Debug,
    S: RawData<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elt) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Debug::fmt(&elt, f)?;
        }
        write!(f, "]")?;
        write!(
            f,
            " shape={:?}, strides={:?}, numel={}, ownership={:?}, const ndim={}",
            self.shape(),
            self.strides(),
            self.numel(),
            self.ownership(),
            N
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstNdArray, NdArray};
    use std::format;
    use std::vec;

    #[test]
    fn display_is_describe() {
        let a = ConstNdArray::<u16, 3>::zeros([2, 1, 5]).unwrap();
        assert_eq!(format!("{}", a), "3-dimensional array of size (2, 1, 5) = 10 elements.");
        assert_eq!(format!("{}", a), a.describe());
    }

    #[test]
    fn cleared_array_is_empty() {
        let mut a = NdArray::<u16, 1>::zeros([4]).unwrap();
        a.clear();
        assert_eq!(a.describe(), "Empty 1-dimensional array.");
    }

    #[test]
    fn debug_format() {
        let a = NdArray::<i8, 2>::from_vec([2, 2], vec![1, -2, 3, -4]).unwrap();
        assert_eq!(
            format!("{:?}", a),
            "[1, -2, 3, -4] shape=[2, 2], strides=[1, 2], numel=4, ownership=Some(Owning), const ndim=2"
        );
        assert_eq!(
            format!("{:?}", NdArray::<f64, 1>::new()),
            "[] shape=[0], strides=[0], numel=0, ownership=None, const ndim=1"
        );
    }
}
