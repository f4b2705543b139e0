// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::marker::PhantomData;

use crate::{ArrayBase, RawData};

impl<S: RawData, const N: usize> Clone for ArrayBase<S, N> {
    /// Return an array sharing this array's buffer, shape and strides.
    ///
    /// No element is copied; the buffer's reference count goes up by one.
    fn clone(&self) -> ArrayBase<S, N> {
        ArrayBase {
            data: self.data.clone(),
            layout: self.layout,
            marker: PhantomData,
        }
    }

    /// Make `self` share `other`'s buffer, letting go of its own.
    ///
    /// Does nothing if both already share one buffer.
    fn clone_from(&mut self, other: &Self) {
        if self.data.ptr_eq(&other.data) {
            return;
        }
        self.data.clone_from(&other.data);
        self.layout = other.layout;
    }
}
