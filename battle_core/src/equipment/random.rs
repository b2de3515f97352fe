//! Random sources for probability rolls

use rand::Rng;
use std::collections::VecDeque;

/// Source of uniform samples in `[0.0, 1.0)`
pub trait RandomSource {
    fn next_uniform(&mut self) -> f64;
}

/// Adapts any `rand` generator (thread rng, seeded ChaCha, ...)
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Replays a fixed list of samples, then repeats the last one
///
/// Samples are clamped into `[0.0, 1.0)`. An empty sequence always yields 0.0.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    samples: VecDeque<f64>,
    last: f64,
    drawn: usize,
}

impl SequenceSource {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        SequenceSource {
            samples: samples.into_iter().map(clamp_unit).collect(),
            last: 0.0,
            drawn: 0,
        }
    }

    /// Number of samples handed out so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        if let Some(sample) = self.samples.pop_front() {
            self.last = sample;
        }
        self.drawn += 1;
        self.last
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else if value >= 1.0 {
        // largest f64 below 1.0
        1.0 - f64::EPSILON / 2.0
    } else {
        value
    }
}
