//! Shared test utilities for `netgraph-core`.

use std::collections::VecDeque;

use netgraph_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::random::RandomSource;

/// Builds a proptest configuration from the shared run profile so every
/// property suite honours `NETGRAPH_PBT_CASES` and `NETGRAPH_PBT_FORK`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`RandomSource`] replaying fixed draw sequences.
///
/// Normal and Poisson scripts fall back to zero once exhausted. The uniform
/// script panics instead, so a candidate loop that outruns its script fails
/// loudly rather than spinning.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRandom {
    normals: VecDeque<f64>,
    poissons: VecDeque<u64>,
    uniforms: VecDeque<f64>,
    poisson_means: Vec<f64>,
}

impl ScriptedRandom {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_normals(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.normals.extend(draws);
        self
    }

    pub(crate) fn with_poissons(mut self, draws: impl IntoIterator<Item = u64>) -> Self {
        self.poissons.extend(draws);
        self
    }

    pub(crate) fn with_uniforms(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.uniforms.extend(draws);
        self
    }

    /// Means passed to [`RandomSource::poisson`], in call order.
    pub(crate) fn poisson_means(&self) -> &[f64] {
        &self.poisson_means
    }

    /// Uniform draws not consumed yet.
    pub(crate) fn remaining_uniforms(&self) -> usize {
        self.uniforms.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn normal(&mut self) -> f64 {
        self.normals.pop_front().unwrap_or(0.0)
    }

    fn poisson(&mut self, mean: f64) -> u64 {
        self.poisson_means.push(mean);
        self.poissons.pop_front().unwrap_or(0)
    }

    fn uniform_double(&mut self, _lo: f64, _hi: f64) -> f64 {
        self.uniforms
            .pop_front()
            .expect("uniform script exhausted before the network stopped drawing")
    }
}
