use std::ops::Range;

use flexure_common::ArrayIndex;
use rayon::prelude::*;

use crate::{
    kernel::{self, Bend},
    BatchOptions, BendScope, Float, Segment, VertexSliceMut,
};

/// Apply `segments` across the rayon thread pool.
///
/// `ranges[i]` must be the validated range of `segments[i]`, and `order` must list the indices of
/// every non-empty range, sorted by start, with no two ranges overlapping.
pub(crate) fn run_parallel<Real: Float, Idx: ArrayIndex>(
    mut vertices: VertexSliceMut<'_, Real>,
    segments: &[Segment<Real, Idx>],
    ranges: &[Range<usize>],
    order: &[usize],
    options: &BatchOptions,
) {
    let chunk_size = options.chunk_size.max(1);
    match options.bend {
        BendScope::Global => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                segments = segments.len(),
                "global bends interleave with placement; running batch sequentially"
            );
            super::run_sequential(vertices, segments, ranges, BendScope::Global);
        }
        BendScope::Hoisted => {
            for seg in segments {
                bend_vertices(&mut vertices, seg.bending, chunk_size);
            }
            place_segments(vertices, segments, ranges, order, chunk_size, false);
        }
        BendScope::Segment => {
            place_segments(vertices, segments, ranges, order, chunk_size, true);
        }
    }
}

/// Bend every vertex in `vertices`, spread across threads by vertex.
fn bend_vertices<Real: Float>(vertices: &mut VertexSliceMut<'_, Real>, bending: Real, chunk_size: usize) {
    let bend = Bend::new(bending);
    if bend.is_identity() {
        return;
    }
    let (positions, normals, tangents) = vertices.parts_mut();
    positions
        .par_iter_mut()
        .zip(normals.par_iter_mut())
        .zip(tangents.par_iter_mut())
        .with_min_len(chunk_size)
        .for_each(|((p, n), t)| bend.apply(p, n, t));
}

/// Place each segment on its own disjoint view, spread across threads by segment.
fn place_segments<Real: Float, Idx: ArrayIndex>(
    vertices: VertexSliceMut<'_, Real>,
    segments: &[Segment<Real, Idx>],
    ranges: &[Range<usize>],
    order: &[usize],
    chunk_size: usize,
    local_bend: bool,
) {
    let sorted: Vec<Range<usize>> = order.iter().map(|&i| ranges[i].clone()).collect();
    vertices
        .split_disjoint(&sorted)
        .into_par_iter()
        .zip(order.par_iter())
        .with_min_len(chunk_size)
        .for_each(|(mut view, &i)| {
            let seg = &segments[i];
            if local_bend {
                kernel::bend(&mut view, seg.bending);
            }
            kernel::place(&mut view, seg);
        });
}
