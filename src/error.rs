// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

use crate::{ElemTag, Ix};

/// An error related to array shape, element type or allocation.
///
/// Every operation returning this error validates its input before touching
/// the array, so an array is left in its previous state on error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// host descriptor rank differs from the array rank
    RankMismatch {
        expected: usize,
        found: usize,
    },
    /// host descriptor element tag differs from the array element tag
    TypeMismatch {
        expected: ElemTag,
        found: ElemTag,
    },
    /// coordinate list length differs from the array rank
    LengthError {
        expected: usize,
        found: usize,
    },
    /// element count of the data differs from the element count of the shape
    IncompatibleShape {
        numel: Ix,
        len: usize,
    },
    /// shape product does not fit in `usize`
    Overflow,
    /// allocation of an owned buffer failed
    AllocationFailure {
        numel: Ix,
    },
}

/// Error code of an [`ArrayError`], for matching without its context.
///
/// This enumeration is not exhaustive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// host descriptor rank differs from the array rank
    RankMismatch,
    /// host descriptor element tag differs from the array element tag
    TypeMismatch,
    /// coordinate list length differs from the array rank
    LengthError,
    /// data length differs from the shape's element count
    IncompatibleShape,
    /// shape product overflows
    Overflow,
    /// allocation failed
    AllocationFailure,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match *self {
            ArrayError::RankMismatch { .. } => ErrorKind::RankMismatch,
            ArrayError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ArrayError::LengthError { .. } => ErrorKind::LengthError,
            ArrayError::IncompatibleShape { .. } => ErrorKind::IncompatibleShape,
            ArrayError::Overflow => ErrorKind::Overflow,
            ArrayError::AllocationFailure { .. } => ErrorKind::AllocationFailure,
        }
    }
}

impl ErrorKind {
    fn description(self) -> &'static str {
        match self {
            ErrorKind::RankMismatch => "rank mismatch",
            ErrorKind::TypeMismatch => "element type mismatch",
            ErrorKind::LengthError => "invalid coordinates length",
            ErrorKind::IncompatibleShape => "incompatible shape",
            ErrorKind::Overflow => "shape size overflows usize",
            ErrorKind::AllocationFailure => "allocation failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ArrayError::RankMismatch { expected, found } => {
                write!(f, "rank mismatch: expected {} dimensions, found {}", expected, found)
            }
            ArrayError::TypeMismatch { expected, found } => {
                write!(f, "element type mismatch: expected {}, found {}", expected, found)
            }
            ArrayError::LengthError { expected, found } => {
                write!(f, "invalid coordinates length: expected {}, found {}", expected, found)
            }
            ArrayError::IncompatibleShape { numel, len } => {
                write!(f, "incompatible shape: shape holds {} elements, data holds {}", numel, len)
            }
            ArrayError::AllocationFailure { numel } => {
                write!(f, "allocation failure for {} elements", numel)
            }
            ArrayError::Overflow => fmt::Display::fmt(&self.kind(), f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArrayError {}
