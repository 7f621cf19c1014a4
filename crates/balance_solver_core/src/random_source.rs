use rand::Rng;

/// Uniform randomness consumed by the generator.
///
/// Any [`rand::Rng`] is a source, so callers pass `thread_rng()` for play
/// and `StdRng::seed_from_u64` for reproducible puzzles.
pub trait UniformSource {
    /// Uniform integer in `lo..=hi`. Callers guarantee `lo <= hi`.
    fn int_in(&mut self, lo: i64, hi: i64) -> i64;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        self.gen_range(lo..=hi)
    }

    fn coin(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}
