use num_traits::{PrimInt, Unsigned};

pub mod macros;

/// Trait for unsigned types which can address a vertex within a buffer.
///
/// Values which don't fit in `usize` address no vertex at all; see [ArrayIndex::index].
pub trait ArrayIndex:
    PrimInt + Unsigned + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
    /// Convert to `usize`, or `None` if the value doesn't fit.
    #[inline]
    fn index(self) -> Option<usize> {
        self.to_usize()
    }

    /// `start..start + length` as a `usize` range, or `None` if either bound isn't representable.
    #[inline]
    fn span(start: Self, length: Self) -> Option<std::ops::Range<usize>> {
        let start = start.index()?;
        start
            .checked_add(length.index()?)
            .map(|end| start..end)
    }
}
impl<P> ArrayIndex for P where
    P: PrimInt + Unsigned + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}
