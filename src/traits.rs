use flexure_common::for_each_real;

/// Trait for floating-point types which vertex data can be stored in, so that buffers, segments,
/// and kernels can be generic over {f32, f64}.
///
/// This is only intended to be implemented on floating-point types.
pub trait Float: simba::scalar::RealField + Copy + Send + Sync {
    const ZERO: Self;
    const ONE: Self;
}

for_each_real!(Real in [f32, f64] => impl Float for Real {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
});
