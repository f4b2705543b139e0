use approx::assert_abs_diff_eq;
use itertools::assert_equal;

use ndview::{ConstNdArray, NdArray, NdArray2, Ownership};

#[test]
fn copy_is_independent() {
    let mut a = NdArray::<i32, 2>::from_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    let mut b = NdArray::<i32, 2>::new();
    b.copy_from(&a).unwrap();
    assert!(!a.shares_buffer(&b));
    assert_eq!(b.ownership(), Some(Ownership::Owning));
    assert_eq!(b.shape(), a.shape());
    assert_eq!(b.strides(), a.strides());

    a.set(0, 10);
    b.set(3, 40);
    assert_eq!(a.to_vec(), [10, 2, 3, 4]);
    assert_eq!(b.to_vec(), [1, 2, 3, 40]);
}

#[test]
fn copy_leaves_clones_alone() {
    let a = NdArray::<u8, 1>::from_vec([2], vec![7, 8]).unwrap();
    let mut b = NdArray::<u8, 1>::from_vec([3], vec![1, 2, 3]).unwrap();
    let c = b.clone();
    b.copy_from(&a).unwrap();
    assert_eq!(c.ref_count(), 1);
    assert_eq!(c.to_vec(), [1, 2, 3]);
    assert_eq!(b.to_vec(), [7, 8]);
}

#[test]
fn cast_like_as() {
    let a = NdArray::<i32, 1>::from_vec([4], vec![300, -1, 255, 256]).unwrap();
    let b = NdArray::<u8, 1>::from_converted(&a).unwrap();
    assert_equal(b.iter(), [44u8, 255, 255, 0]);

    let f = NdArray::<f64, 1>::from_vec([4], vec![2.9, -2.9, 1e20, f64::NAN]).unwrap();
    let i = NdArray::<i32, 1>::from_converted(&f).unwrap();
    assert_equal(i.iter(), [2, -2, i32::MAX, 0]);
}

#[test]
fn narrow_floats() {
    let a = NdArray2::<f64>::from_shape_fn([3, 3], |[r, c]| 0.1 * r as f64 + c as f64 / 3.).unwrap();
    let b = NdArray2::<f32>::from_converted(&a).unwrap();
    for (ix, x) in b.indexed_iter() {
        assert_abs_diff_eq!(x as f64, a.get_nd(ix).unwrap(), epsilon = 1e-6);
    }
}

#[test]
fn unbound_source_resets() {
    let empty = NdArray::<f32, 2>::new();
    let mut b = NdArray::<f64, 2>::zeros([2, 2]).unwrap();
    b.copy_from(&empty).unwrap();
    assert!(!b.is_bound());
    assert_eq!(b.shape(), &[0, 0]);

    let c = NdArray::<f64, 2>::from_converted(&empty).unwrap();
    assert!(!c.is_bound());
}

#[test]
fn copy_zero_extent() {
    let a = NdArray::<i16, 2>::from_vec([0, 5], vec![]).unwrap();
    let b = NdArray::<i64, 2>::from_converted(&a).unwrap();
    assert!(b.is_bound());
    assert_eq!(b.shape(), &[0, 5]);
    assert_eq!(b.numel(), 0);
}

#[test]
fn into_read_only_copy() {
    let a = NdArray::<u16, 2>::from_vec([1, 3], vec![1, 2, 3]).unwrap();
    let view = a.clone();
    let c = ConstNdArray::<f32, 2>::from_converted(&view).unwrap();
    assert_eq!(c[[0, 2]], 3.0);
    assert_eq!(c.ref_count(), 1);
    assert_eq!(a.ref_count(), 2);
}

#[test]
fn copy_from_read_only() {
    let c = ConstNdArray::<u32, 1>::from_vec([2], vec![5, 6]).unwrap();
    let mut a = NdArray::<u64, 1>::new();
    a.copy_from(&c).unwrap();
    a.set(0, 50);
    assert_eq!(c[0], 5);
    assert_eq!(a.to_vec(), [50, 6]);
}
