// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The element access traits for ndview

use core::fmt;
use core::marker::PhantomData;

use crate::Element;

/// Array representation trait.
///
/// Names the element type of an array and whether it can be written.
///
/// ***Note:*** `RawData` is not an extension interface at this point.
/// Traits in Rust can serve many different roles. This trait is public because
/// it is used as a bound on public methods.
#[allow(clippy::missing_safety_doc)] // not implementable downstream
pub unsafe trait RawData: Sized {
    /// The array element type.
    type Elem: Element;

    private_decl! {}
}

/// Array representation trait.
///
/// For an array with writable elements.
///
/// ***Internal trait, see `RawData`.***
#[allow(clippy::missing_safety_doc)] // not implementable downstream
pub unsafe trait DataMut: RawData {}

/// Access marker for arrays whose elements can be written.
///
/// Clones of such an array share their buffer, so the marker keeps the
/// array on a single thread.
///
/// ```compile_fail
/// use ndview::NdArray;
///
/// fn send<T: Send>(_: T) {}
/// send(NdArray::<f64, 2>::new());
/// ```
///
/// ```compile_fail
/// use ndview::NdArray;
///
/// fn sync<T: Sync>(_: &T) {}
/// sync(&NdArray::<f64, 2>::new());
/// ```
pub struct ReadWrite<A> {
    marker: PhantomData<*mut A>,
}

/// Access marker for arrays whose elements can only be read.
pub struct ReadOnly<A> {
    marker: PhantomData<A>,
}

unsafe impl<A: Element> RawData for ReadWrite<A> {
    type Elem = A;
    private_impl! {}
}

unsafe impl<A: Element> DataMut for ReadWrite<A> {}

unsafe impl<A: Element> RawData for ReadOnly<A> {
    type Elem = A;
    private_impl! {}
}

impl<A> fmt::Debug for ReadWrite<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReadWrite")
    }
}

impl<A> fmt::Debug for ReadOnly<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReadOnly")
    }
}
