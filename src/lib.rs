//! Per-segment mesh deformation.
//!
//! A mesh is treated as a flat [VertexBuffer] split into [Segments](Segment), each a run of
//! vertices carrying its own bend, uniform scale, rotation, and translation. A batch of segments
//! is applied all at once: either every segment succeeds, or the buffer is left untouched.
//!
//! ```
//! use flexure::{apply_segments, Segment, VertexBuffer};
//! use nalgebra::{point, vector};
//!
//! let mut buffer = VertexBuffer::<f64>::from_positions(vec![
//!     point![1.0, 0.0, 0.0],
//!     point![2.0, 0.0, 0.0],
//!     point![3.0, 0.0, 0.0],
//!     point![4.0, 0.0, 0.0],
//! ]);
//! let segments = [
//!     Segment::<f64, u32>::new(0, 2).with_scale(2.0),
//!     Segment::new(2, 2).with_offset(vector![5.0, 0.0, 0.0]),
//! ];
//! apply_segments(&mut buffer, &segments).unwrap();
//! assert_eq!(buffer.positions()[3], point![9.0, 0.0, 0.0]);
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod batch;
mod buffer;
mod error;
pub mod kernel;
mod mesh;
mod schedule;
mod segment;
mod traits;

pub use batch::*;
pub use buffer::*;
pub use error::*;
pub use mesh::*;
pub use schedule::{BatchOptions, BendScope, Schedule};
pub use segment::*;
pub use traits::*;

pub use flexure_common::ArrayIndex;

/// Apply `segments` to `buffer` using [default options](BatchOptions::default).
pub fn apply_segments<Real: Float, Idx: ArrayIndex>(
    buffer: &mut VertexBuffer<Real>,
    segments: &[Segment<Real, Idx>],
) -> Result<(), Error<Idx>> {
    apply_segments_with(buffer, segments, &BatchOptions::default())
}

/// Apply `segments` to `buffer`.
///
/// Every segment is validated before any vertex is modified; on error, `buffer` is unchanged.
///
/// # Errors
///
/// * [Error::EmptyBatch] if `segments` is empty
/// * [Error::OutOfRange] if a segment extends past the end of `buffer`
/// * [Error::OverlappingSegments] if scheduled in parallel and two segments share a vertex
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip_all,
        fields(vertices = buffer.len(), segments = segments.len(), bend = ?options.bend, schedule = ?options.schedule)
    )
)]
pub fn apply_segments_with<Real: Float, Idx: ArrayIndex>(
    buffer: &mut VertexBuffer<Real>,
    segments: &[Segment<Real, Idx>],
    options: &BatchOptions,
) -> Result<(), Error<Idx>> {
    let ranges = segment::validate_ranges(segments, buffer.len())?;
    match options.schedule {
        Schedule::Sequential => {
            schedule::run_sequential(buffer.as_slice_mut(), segments, &ranges, options.bend);
        }
        #[cfg(feature = "parallel")]
        Schedule::Parallel => {
            let order = segment::disjoint_order::<Idx>(&ranges)?;
            schedule::run_parallel(buffer.as_slice_mut(), segments, &ranges, &order, options);
        }
    }
    Ok(())
}
