//! Stride derivation and retrieval for n-dimensional array memory layouts.
//!
//! Strides map a multi-dimensional index to a position in a flat buffer:
//! element `i` of a stride vector is the number of buffer units to skip to
//! advance index `i` by one. [`shape_to_strides`] derives them from a shape
//! and an [`Order`]; [`strides_of`] answers for any [`ArrayLike`]
//! descriptor, preferring the strides it already carries.

mod descriptor;
mod error;
mod layout;
mod order;

pub use descriptor::{strides_of, ArrayLike, ArrayMeta};
pub use error::{Error, Result};
pub use layout::{is_contiguous, shape_to_strides, shape_to_strides_into};
pub use order::Order;
