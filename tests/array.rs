#![allow(clippy::many_single_char_names)]

use defmac::defmac;
use itertools::{assert_equal, Itertools};

use ndview::prelude::*;
use ndview::{ErrorKind, Layout};

#[test]
fn construct_column_major() {
    let a = NdArray::<f64, 2>::from_vec([3, 4], (0..12).map(|x| x as f64).collect()).unwrap();
    assert_eq!(a.rank(), 2);
    assert_eq!(a.shape(), &[3, 4]);
    assert_eq!(a.strides(), &[1, 3]);
    assert_eq!(a.numel(), 12);
    assert_eq!(a.ownership(), Some(Ownership::Owning));
    assert_eq!(a.ref_count(), 1);

    // element (r, c) lives at r + 3 * c
    defmac!(view r, c => a.get_nd([r, c]).unwrap());
    for (r, c) in (0..3).cartesian_product(0..4) {
        assert_eq!(view!(r, c), (r + 3 * c) as f64);
    }
}

#[test]
fn strides_rank_three() {
    let a = NdArray3::<u8>::zeros([2, 3, 4]).unwrap();
    assert_eq!(a.strides(), &[1, 2, 6]);
    assert_eq!(a.extent(2), 4);
    assert_eq!(a.stride(1), 2);
    // axes wrap modulo the rank
    assert_eq!(a.extent(3), 2);
    assert_eq!(a.stride(5), 6);
}

#[test]
fn zero_extent() {
    let a = NdArray::<i32, 2>::from_vec([4, 0], vec![]).unwrap();
    assert!(a.is_bound());
    assert_eq!(a.numel(), 0);
    assert_eq!(a.strides(), &[1, 4]);
    assert_eq!(a.get(0), None);
    assert_eq!(a.get_nd([1, 0]), None);
    assert_eq!(a.iter().count(), 0);
}

#[test]
fn empty_array() {
    let a = NdArray::<i32, 3>::new();
    assert!(!a.is_bound());
    assert_eq!(a.shape(), &[0, 0, 0]);
    assert_eq!(a.numel(), 0);
    assert_eq!(a.ownership(), None);
    assert_eq!(a.ref_count(), 0);
    assert!(a.as_ptr().is_null());
    assert_eq!(a.get(0), None);
    assert_eq!(a.indexed_iter().count(), 0);
}

#[test]
fn incompatible_shape() {
    let err = NdArray::<u32, 2>::from_vec([2, 2], vec![1, 2, 3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    let err = NdArray::<u32, 2>::zeros([usize::MAX, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
#[cfg(feature = "safe-access")]
fn indices_wrap() {
    let a = NdArray::<i64, 2>::from_shape_fn([3, 2], |[r, c]| (10 * r + c) as i64).unwrap();
    assert_eq!(a.get(6), a.get(0));
    assert_eq!(a.get(13), a.get(1));
    assert_eq!(a.get_nd([4, 1]), Some(11));
    assert_eq!(a.get_nd([2, 5]), Some(21));
    for n in 0..40 {
        assert_eq!(a.get(n), a.get(n % a.numel()));
    }
}

#[test]
#[cfg(not(feature = "safe-access"))]
fn indices_rejected() {
    let mut a = NdArray::<i64, 2>::zeros([3, 2]).unwrap();
    assert_eq!(a.get(6), None);
    assert_eq!(a.get_nd([3, 0]), None);
    assert_eq!(a.set_nd([0, 2], 1), None);
    assert_eq!(a.iter().sum::<i64>(), 0);
}

#[test]
fn list_index_length() {
    let mut a = NdArray::<i16, 2>::zeros([2, 2]).unwrap();
    assert_eq!(a.set_list(&[1, 1], 7).unwrap(), Some(0));
    assert_eq!(a.get_list(&[1, 1]).unwrap(), Some(7));
    let err = a.get_list(&[1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthError);
    let err = a.set_list(&[0, 0, 0], 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthError);
    assert_eq!(a.to_vec(), [0, 0, 0, 7]);
}

#[test]
fn set_returns_previous() {
    let mut a = NdArray1::<f32>::from_vec([3], vec![1., 2., 3.]).unwrap();
    assert_eq!(a.set(1, 5.), Some(2.));
    assert_eq!(a.set_nd([2], 6.), Some(3.));
    assert_eq!(a.to_vec(), [1., 5., 6.]);
    unsafe {
        a.uset(0, 4.);
        assert_eq!(a.uget(0), 4.);
    }
}

#[test]
fn clone_shares_buffer() {
    let mut a = NdArray::<i32, 2>::zeros([2, 3]).unwrap();
    let b = a.clone();
    assert_eq!(a.ref_count(), 2);
    assert!(a.shares_buffer(&b));
    assert_eq!(a.as_ptr(), b.as_ptr());
    a.set_nd([1, 2], 9);
    assert_eq!(b.get_nd([1, 2]), Some(9));
    drop(b);
    assert_eq!(a.ref_count(), 1);
}

#[test]
fn clone_from_same_buffer() {
    let a = NdArray::<u8, 1>::zeros([4]).unwrap();
    let mut b = a.clone();
    b.clone_from(&a);
    assert_eq!(a.ref_count(), 2);

    let mut c = NdArray::<u8, 1>::zeros([2]).unwrap();
    c.clone_from(&a);
    assert_eq!(a.ref_count(), 3);
    assert_eq!(c.shape(), &[4]);
}

#[test]
fn swap_arrays() {
    let mut a = NdArray::<u8, 2>::from_vec([1, 2], vec![1, 2]).unwrap();
    let mut b = NdArray::<u8, 2>::new();
    let pa = a.as_ptr();
    a.swap(&mut b);
    assert!(!a.is_bound());
    assert_eq!(b.as_ptr(), pa);
    assert_eq!(b.shape(), &[1, 2]);
    assert_eq!(b.ref_count(), 1);
}

#[test]
fn clear_and_reset() {
    let mut a = NdArray::<f64, 2>::zeros([2, 5]).unwrap();
    let b = a.clone();
    a.clear();
    assert!(!a.is_bound());
    assert_eq!(a.shape(), &[2, 5]);
    assert_eq!(a.get(0), None);
    assert_eq!(b.ref_count(), 1);
    a.reset();
    assert_eq!(a.shape(), &[0, 0]);
    assert_eq!(a.strides(), &[0, 0]);
    assert_eq!(a.numel(), 0);
}

#[test]
fn assign_borrowed() {
    let mut data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut a = NdArray::<f32, 2>::new();
    unsafe {
        a.assign(data.as_mut_ptr(), [2, 3], Ownership::Borrowed).unwrap();
    }
    assert_eq!(a.ownership(), Some(Ownership::Borrowed));
    assert_eq!(a.get_nd([1, 2]), Some(6.0));
    a.set_nd([0, 1], 30.0);

    // assigning the same buffer again changes nothing
    let b = a.clone();
    unsafe {
        a.assign(data.as_mut_ptr(), [3, 2], Ownership::Borrowed).unwrap();
    }
    assert_eq!(a.shape(), &[2, 3]);
    assert!(a.shares_buffer(&b));
    drop((a, b));
    assert_eq!(data[2], 30.0);
}

#[test]
fn assign_null_resets() {
    let mut a = NdArray::<u64, 1>::zeros([3]).unwrap();
    unsafe {
        a.assign(core::ptr::null_mut(), [3], Ownership::Owning).unwrap();
    }
    assert!(!a.is_bound());
    assert_eq!(a.shape(), &[0]);
}

#[test]
fn assign_vec_replaces() {
    let mut a = NdArray::<i8, 2>::zeros([1, 1]).unwrap();
    let b = a.clone();
    a.assign_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    assert!(!a.shares_buffer(&b));
    assert_eq!(b.get(0), Some(0));
    assert!(a.assign_vec([3, 3], vec![1]).is_err());
    assert_eq!(a.shape(), &[2, 2]);
}

#[test]
fn read_only() {
    let a = NdArray::<u16, 2>::from_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    let b = a.clone();
    let a = a.into_read_only().unwrap_err();
    drop(b);
    let c = a.into_read_only().unwrap();
    assert_eq!(c[[1, 1]], 4);
    assert_eq!(c[2], 3);
    assert_eq!(c.as_slice(), Some(&[1, 2, 3, 4][..]));
    assert_eq!(ConstNdArray::<u16, 1>::new().as_slice(), None);
}

#[test]
#[should_panic]
fn index_zero_extent_panics() {
    let a = ConstNdArray::<u16, 2>::from_vec([0, 3], vec![]).unwrap();
    let _ = a[[0, 0]];
}

#[test]
fn fill_and_map() {
    let mut a = NdArray::<i32, 2>::zeros([3, 3]).unwrap();
    a.fill(2);
    a.map_inplace(|x| x * x + 1);
    assert!(a.iter().all(|x| x == 5));
    let mut e = NdArray::<i32, 2>::new();
    e.fill(1);
    assert!(!e.is_bound());
}

#[test]
fn iteration_order() {
    let a = NdArray::<usize, 3>::from_shape_fn([2, 2, 2], |[i, j, k]| i + 10 * j + 100 * k).unwrap();
    assert_equal(a.iter(), [0, 1, 10, 11, 100, 101, 110, 111]);
    assert_equal(a.iter().rev().take(2), [111, 110]);
    assert_equal(a.indices().take(3), [[0, 0, 0], [1, 0, 0], [0, 1, 0]]);
    for (ix, elt) in a.indexed_iter() {
        assert_eq!(a.get_nd(ix), Some(elt));
    }
    assert_eq!(a.indexed_iter().len(), 8);
}

#[test]
fn layout_of_shape() {
    let layout = Layout::from_shape([4, 1, 3]).unwrap();
    assert_eq!(layout.strides(), &[1, 4, 4]);
    assert_eq!(layout.numel(), 12);
    let a = NdArray::<u8, 3>::zeros([4, 1, 3]).unwrap();
    assert_eq!(a.layout(), &layout);
}

#[test]
fn equality() {
    let a = NdArray::<i32, 2>::from_vec([2, 1], vec![1, 2]).unwrap();
    let b = ConstNdArray::<i32, 2>::from_vec([2, 1], vec![1, 2]).unwrap();
    let c = NdArray::<i32, 2>::from_vec([1, 2], vec![1, 2]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(NdArray::<i32, 2>::new(), NdArray::<i32, 2>::default());
}

#[test]
fn collect_one_dimensional() {
    let a: NdArray1<u32> = (0..5).map(|x| x * x).collect();
    assert_eq!(a.shape(), &[5]);
    assert_eq!(a.to_vec(), [0, 1, 4, 9, 16]);
}

#[test]
fn describe() {
    let a = NdArray::<f64, 2>::zeros([3, 4]).unwrap();
    assert_eq!(a.describe(), "2-dimensional array of size (3, 4) = 12 elements.");
    assert_eq!(a.to_string(), a.describe());
    assert_eq!(NdArray::<f64, 4>::new().describe(), "Empty 4-dimensional array.");
}
