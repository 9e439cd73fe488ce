use std::borrow::Cow;

use crate::{shape_to_strides, Error, Order, Result};

/// Capability interface for anything that can describe an ndarray memory
/// layout: explicit strides, or a shape plus an optional order.
///
/// A descriptor should expose at least one of [`strides`](Self::strides)
/// and [`shape`](Self::shape); [`strides_of`] rejects one that exposes
/// neither.
pub trait ArrayLike {
    /// Explicit per-dimension strides, when the descriptor carries them.
    fn strides(&self) -> Option<&[isize]> {
        None
    }

    /// Dimension sizes, when the descriptor carries them.
    fn shape(&self) -> Option<&[usize]> {
        None
    }

    /// Memory layout order; `None` means row-major.
    fn order(&self) -> Option<Order> {
        None
    }
}

/// Retrieve the strides of `arr`.
///
/// Explicit strides are authoritative: with `copy` set they come back as a
/// freshly allocated vector, otherwise the returned [`Cow`] borrows the
/// descriptor's own slice and stays valid for as long as `arr` does.
/// Without explicit strides the result is derived from the shape and order
/// via [`shape_to_strides`] and is always owned, whatever `copy` says.
///
/// Returns [`Error::MissingLayout`] if `arr` exposes neither strides nor a
/// shape.
pub fn strides_of<A: ArrayLike + ?Sized>(arr: &A, copy: bool) -> Result<Cow<'_, [isize]>> {
    if let Some(strides) = arr.strides() {
        return Ok(if copy {
            Cow::Owned(strides.to_vec())
        } else {
            Cow::Borrowed(strides)
        });
    }
    let Some(shape) = arr.shape() else {
        return Err(Error::MissingLayout);
    };
    Ok(Cow::Owned(shape_to_strides(
        shape,
        arr.order().unwrap_or_default(),
    )))
}

/// Minimal array-like descriptor for callers that hold layout metadata
/// without a backing buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayMeta {
    shape: Option<Vec<usize>>,
    strides: Option<Vec<isize>>,
    order: Option<Order>,
}

impl ArrayMeta {
    /// Descriptor carrying only a shape.
    pub fn from_shape(shape: impl Into<Vec<usize>>) -> Self {
        Self {
            shape: Some(shape.into()),
            ..Self::default()
        }
    }

    /// Descriptor carrying only explicit strides.
    pub fn from_strides(strides: impl Into<Vec<isize>>) -> Self {
        Self {
            strides: Some(strides.into()),
            ..Self::default()
        }
    }

    /// Descriptor for a dense array of `shape` in `order`, with explicit
    /// strides stamped the way an allocation routine would.
    pub fn dense(shape: impl Into<Vec<usize>>, order: Order) -> Self {
        let shape = shape.into();
        let strides = shape_to_strides(&shape, order);
        Self {
            shape: Some(shape),
            strides: Some(strides),
            order: Some(order),
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }
}

impl ArrayLike for ArrayMeta {
    fn strides(&self) -> Option<&[isize]> {
        self.strides.as_deref()
    }

    fn shape(&self) -> Option<&[usize]> {
        self.shape.as_deref()
    }

    fn order(&self) -> Option<Order> {
        self.order
    }
}
