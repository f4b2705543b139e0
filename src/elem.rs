// Copyright 2019-2024 ndview developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element types and their run-time tags.

use core::fmt;
use core::mem::size_of;

/// Numeric category of an element type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElemKind {
    SignedInt,
    UnsignedInt,
    Float,
}

impl fmt::Display for ElemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            ElemKind::SignedInt => "signed integer",
            ElemKind::UnsignedInt => "unsigned integer",
            ElemKind::Float => "floating point",
        })
    }
}

/// Run-time description of an element type: its host class name, its width
/// in bytes and its numeric kind.
///
/// Host descriptors carry a tag; attaching to one compares it with
/// `A::TAG` for the array's element type `A`.
///
/// ```
/// use ndview::{ElemKind, ElemTag};
///
/// let tag = ElemTag::of::<f32>();
/// assert_eq!(tag.name(), "single");
/// assert_eq!(tag.width(), 4);
/// assert_eq!(tag.kind(), ElemKind::Float);
/// assert_eq!(ElemTag::from_name("single"), Some(tag));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElemTag {
    name: &'static str,
    width: usize,
    kind: ElemKind,
}

impl ElemTag {
    pub const fn new(name: &'static str, width: usize, kind: ElemKind) -> Self {
        ElemTag { name, width, kind }
    }

    /// Return the tag of element type `A`.
    #[inline]
    pub fn of<A: Element>() -> Self {
        A::TAG
    }

    /// Look up a registered tag by its host class name.
    pub fn from_name(name: &str) -> Option<Self> {
        ELEMENT_TAGS.iter().find(|tag| tag.name == name).copied()
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Width of one element in bytes.
    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn kind(&self) -> ElemKind {
        self.kind
    }
}

impl fmt::Display for ElemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-byte {})", self.name, self.width, self.kind)
    }
}

/// Numeric element type of an array.
///
/// # Safety
///
/// `TAG` must describe `Self` exactly: host buffers tagged with it are
/// reinterpreted as `Self`. Its width must be `size_of::<Self>()` and every
/// bit pattern of that width must be a valid `Self`.
pub unsafe trait Element: Copy + Send + Sync + 'static {
    const TAG: ElemTag;
}

macro_rules! impl_element {
    ($($ty:ty => $name:expr, $kind:ident;)*) => {
        $(
            unsafe impl Element for $ty {
                const TAG: ElemTag = ElemTag::new($name, size_of::<$ty>(), ElemKind::$kind);
            }
        )*
    };
}

impl_element! {
    i8 => "int8", SignedInt;
    u8 => "uint8", UnsignedInt;
    i16 => "int16", SignedInt;
    u16 => "uint16", UnsignedInt;
    i32 => "int32", SignedInt;
    u32 => "uint32", UnsignedInt;
    i64 => "int64", SignedInt;
    u64 => "uint64", UnsignedInt;
    f32 => "single", Float;
    f64 => "double", Float;
}

#[cfg(feature = "half")]
impl_element! {
    half::f16 => "half", Float;
    half::bf16 => "bfloat16", Float;
}

macro_rules! tag_table {
    ($($ty:ty),* $(,)?) => {
        &[$(<$ty as Element>::TAG),*]
    };
}

/// Every element tag registered by this crate, in a fixed order.
#[cfg(not(feature = "half"))]
pub static ELEMENT_TAGS: &[ElemTag] = tag_table![i8, u8, i16, u16, i32, u32, i64, u64, f32, f64];

/// Every element tag registered by this crate, in a fixed order.
#[cfg(feature = "half")]
pub static ELEMENT_TAGS: &[ElemTag] = tag_table![
    i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, half::f16, half::bf16
];
