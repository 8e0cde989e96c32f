use netgraph_core::{RandomSource, SeededRandom};

/// Counts the draws made from a wrapped [`SeededRandom`].
#[derive(Debug)]
pub struct CountingRandom {
    inner: SeededRandom,
    pub normals: usize,
    pub poissons: usize,
    pub uniforms: usize,
}

impl CountingRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SeededRandom::new(seed),
            normals: 0,
            poissons: 0,
            uniforms: 0,
        }
    }
}

impl RandomSource for CountingRandom {
    fn normal(&mut self) -> f64 {
        self.normals += 1;
        self.inner.normal()
    }

    fn poisson(&mut self, mean: f64) -> u64 {
        self.poissons += 1;
        self.inner.poisson(mean)
    }

    fn uniform_double(&mut self, lo: f64, hi: f64) -> f64 {
        self.uniforms += 1;
        self.inner.uniform_double(lo, hi)
    }
}
