use crate::Order;

/// Compute the stride vector for `shape` laid out in `order`.
///
/// A zero-dimensional shape yields the single-element vector `[0]`. A
/// zero-size dimension flows through the running product like any other
/// size, so every dimension on its slow side gets a zero stride.
pub fn shape_to_strides(shape: &[usize], order: Order) -> Vec<isize> {
    if shape.is_empty() {
        return vec![0];
    }
    let mut strides = Vec::with_capacity(shape.len());
    let mut acc = 1isize;
    match order {
        Order::RowMajor => {
            // Iterate dims in reverse to accumulate products
            for dim in shape.iter().rev() {
                strides.push(acc);
                acc *= *dim as isize;
            }
            strides.reverse();
        }
        Order::ColMajor => {
            for dim in shape.iter() {
                strides.push(acc);
                acc *= *dim as isize;
            }
        }
    }
    strides
}

/// Fill `out` with the strides for `shape` laid out in `order` and return
/// the same buffer, so the call can be chained.
///
/// Unlike [`shape_to_strides`] there is no zero-rank special case: the
/// caller sizes `out` to the rank, and a zero-rank shape writes nothing.
///
/// # Panics
/// Panics if `out` is shorter than `shape`.
pub fn shape_to_strides_into<'a>(
    shape: &[usize],
    order: Order,
    out: &'a mut [isize],
) -> &'a mut [isize] {
    let mut acc = 1isize;
    match order {
        Order::RowMajor => {
            for i in (0..shape.len()).rev() {
                out[i] = acc;
                acc *= shape[i] as isize;
            }
        }
        Order::ColMajor => {
            for i in 0..shape.len() {
                out[i] = acc;
                acc *= shape[i] as isize;
            }
        }
    }
    out
}

/// Whether `strides` are exactly the dense strides of `shape` in `order`.
pub fn is_contiguous(shape: &[usize], strides: &[isize], order: Order) -> bool {
    strides == shape_to_strides(shape, order)
}
