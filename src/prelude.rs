// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndview prelude.
//!
//! This module contains the most used types, type aliases and traits that
//! you can import easily as a group.
//!
//! ```
//! use ndview::prelude::*;
//!
//! let a = NdArray2::<f64>::zeros([2, 2]).unwrap();
//! assert_eq!(a.ownership(), Some(Ownership::Owning));
//! ```

#[doc(no_inline)]
pub use crate::{ArrayBase, ConstNdArray, NdArray, NdArray1, NdArray2, NdArray3};

#[doc(no_inline)]
pub use crate::{ArrayError, ErrorKind};

#[doc(no_inline)]
pub use crate::{Descriptor, ElemTag, Element, HostAllocator, Ix, Ownership};
