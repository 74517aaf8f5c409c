/// A source of uniform samples in `[0, 1)`.
///
/// All randomized line parameters are drawn through this trait so that tests and replays can
/// inject a seeded or scripted source.
pub trait UniformSource {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Sample from `[lo, hi)`, computed as `(hi - lo) * u + lo`.
    ///
    /// `hi < lo` is allowed and yields a sample from `(hi, lo]`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (hi - lo) * self.next_unit() + lo
    }
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<T: UniformSource + ?Sized> UniformSource for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Seeded SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Build a generator from `seed`. Equal seeds yield equal sequences.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next sample in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

impl UniformSource for Rng64 {
    fn next_unit(&mut self) -> f64 {
        self.next_f64_01()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
