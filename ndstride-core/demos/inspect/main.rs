use ndstride_core::{shape_to_strides, strides_of, ArrayMeta, Order};

fn main() {
    // Dense allocation: explicit strides stamped from the shape.
    let dense = ArrayMeta::dense(vec![3, 3, 3], Order::RowMajor);
    let strides = strides_of(&dense, false).unwrap();
    assert_eq!(strides.as_ref(), &[9, 3, 1]);

    // Shape-only descriptor: strides derived on demand.
    let minimal = ArrayMeta::from_shape(vec![1, 2, 3, 4]).with_order(Order::ColMajor);
    let derived = strides_of(&minimal, false).unwrap();
    assert_eq!(derived.as_ref(), &[1, 1, 2, 6]);

    println!("row-major [3, 3, 3] -> {:?}", strides);
    println!("column-major [1, 2, 3, 4] -> {:?}", derived);
    println!("row-major [] -> {:?}", shape_to_strides(&[], Order::RowMajor));
}
