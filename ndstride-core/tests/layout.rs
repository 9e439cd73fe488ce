use ndstride_core::{is_contiguous, shape_to_strides, shape_to_strides_into, Order};

// Row-major: last dimension has stride 1, earlier strides multiply up.
#[test]
fn row_major_dense_shapes() {
    assert_eq!(shape_to_strides(&[3, 3, 3], Order::RowMajor), vec![9, 3, 1]);
    assert_eq!(shape_to_strides(&[1, 1], Order::RowMajor), vec![1, 1]);
    assert_eq!(
        shape_to_strides(&[1, 2, 3, 4], Order::RowMajor),
        vec![24, 12, 4, 1]
    );
    assert_eq!(shape_to_strides(&[5], Order::RowMajor), vec![1]);
}

// Column-major: first dimension has stride 1, later strides multiply up.
#[test]
fn col_major_dense_shapes() {
    assert_eq!(shape_to_strides(&[3, 3, 3], Order::ColMajor), vec![1, 3, 9]);
    assert_eq!(shape_to_strides(&[1, 1], Order::ColMajor), vec![1, 1]);
    assert_eq!(
        shape_to_strides(&[1, 2, 3, 4], Order::ColMajor),
        vec![1, 1, 2, 6]
    );
    assert_eq!(shape_to_strides(&[5], Order::ColMajor), vec![1]);
}

// A zero-size dimension zeroes the running product for every dimension on
// its slow side.
#[test]
fn zero_size_dimension_propagates() {
    assert_eq!(
        shape_to_strides(&[3, 3, 0, 3], Order::RowMajor),
        vec![0, 0, 3, 1]
    );
    assert_eq!(shape_to_strides(&[3, 0, 3], Order::ColMajor), vec![1, 3, 0]);
}

#[test]
fn zero_rank_yields_single_zero() {
    assert_eq!(shape_to_strides(&[], Order::RowMajor), vec![0]);
    assert_eq!(shape_to_strides(&[], Order::ColMajor), vec![0]);
}

// stride[i] is the product of all sizes after i (row-major) or before i
// (column-major).
#[test]
fn strides_match_partial_products() {
    let shape = [2usize, 7, 1, 4, 3];
    let row = shape_to_strides(&shape, Order::RowMajor);
    let col = shape_to_strides(&shape, Order::ColMajor);
    for i in 0..shape.len() {
        assert_eq!(row[i], shape[i + 1..].iter().product::<usize>() as isize);
        assert_eq!(col[i], shape[..i].iter().product::<usize>() as isize);
    }
    assert_eq!(row[shape.len() - 1], 1);
    assert_eq!(col[0], 1);
}

#[test]
fn into_variant_fills_buffer() {
    let shape = [1usize, 2, 3, 4];
    let mut out = [0isize; 4];
    shape_to_strides_into(&shape, Order::RowMajor, &mut out);
    assert_eq!(out, [24, 12, 4, 1]);
    shape_to_strides_into(&shape, Order::ColMajor, &mut out);
    assert_eq!(out, [1, 1, 2, 6]);
}

// The returned reference is the caller's own buffer, usable for chaining.
#[test]
fn into_variant_returns_caller_buffer() {
    let mut out = [0isize; 2];
    let ptr = out.as_ptr();
    let filled = shape_to_strides_into(&[4, 5], Order::RowMajor, &mut out);
    assert_eq!(filled, &[5, 1]);
    assert_eq!(filled.as_ptr(), ptr);
}

#[test]
fn into_variant_zero_rank_writes_nothing() {
    let mut out: [isize; 0] = [];
    assert!(shape_to_strides_into(&[], Order::RowMajor, &mut out).is_empty());
}

#[test]
fn contiguity_matches_derived_strides() {
    assert!(is_contiguous(&[3, 3, 3], &[9, 3, 1], Order::RowMajor));
    assert!(is_contiguous(&[3, 3, 3], &[1, 3, 9], Order::ColMajor));
    assert!(!is_contiguous(&[3, 3, 3], &[9, 3, 1], Order::ColMajor));
    assert!(!is_contiguous(&[2, 2], &[4, 1], Order::RowMajor));
    assert!(is_contiguous(&[], &[0], Order::RowMajor));
    assert!(!is_contiguous(&[], &[], Order::RowMajor));
}
