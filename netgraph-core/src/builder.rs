//! Builder for configuring and populating a [`Network`] in one step.

use tracing::instrument;

use crate::{
    Result,
    error::validate_mean_degree,
    network::Network,
    random::{DEFAULT_SEED, RandomSource, SeededRandom},
};

/// Configures the node count, optional mean degree and seed of a network.
///
/// [`NetworkBuilder::build`] resizes the network to the configured node
/// count and, when a mean degree is set, random-connects it.
///
/// # Examples
/// ```
/// use netgraph_core::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .with_nodes(20)
///     .with_mean_degree(2.0)
///     .with_rng_seed(99)
///     .build()?;
/// assert_eq!(network.size(), 20);
/// let degree_sum: usize = (0..20).map(|n| network.degree(n)).sum();
/// assert_eq!(degree_sum, 2 * network.link_count());
/// # Ok::<(), netgraph_core::NetworkError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkBuilder {
    nodes: usize,
    mean_degree: Option<f64>,
    rng_seed: u64,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self {
            nodes: 0,
            mean_degree: None,
            rng_seed: DEFAULT_SEED,
        }
    }
}

impl NetworkBuilder {
    /// Creates a builder for an empty, unlinked network seeded with
    /// [`DEFAULT_SEED`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes drawn on build.
    #[must_use]
    pub const fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    /// Random-connects the network with this Poisson mean on build.
    #[must_use]
    pub const fn with_mean_degree(mut self, mean_degree: f64) -> Self {
        self.mean_degree = Some(mean_degree);
        self
    }

    /// Seeds the [`SeededRandom`] used by [`NetworkBuilder::build`].
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the configured mean degree, if any.
    #[must_use]
    pub const fn mean_degree(&self) -> Option<f64> {
        self.mean_degree
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Builds a network drawing from a [`SeededRandom`] with the configured
    /// seed.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::InvalidMeanDegree`] when the configured
    /// mean degree is negative or not finite.
    pub fn build(&self) -> Result<Network> {
        self.build_with(SeededRandom::new(self.rng_seed))
    }

    /// Builds a network drawing from `rng`; the configured seed is ignored.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::InvalidMeanDegree`] when the configured
    /// mean degree is negative or not finite.
    #[instrument(
        name = "network.build",
        err,
        skip(self, rng),
        fields(nodes = self.nodes, mean_degree = ?self.mean_degree),
    )]
    pub fn build_with<R: RandomSource>(&self, rng: R) -> Result<Network<R>> {
        let mean_degree = self.mean_degree.map(validate_mean_degree).transpose()?;
        let mut network = Network::new(rng);
        network.resize(self.nodes);
        if let Some(mean) = mean_degree {
            network.random_connect(mean)?;
        }
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{NetworkError, test_utils::ScriptedRandom};

    #[test]
    fn defaults_describe_an_empty_network() {
        let builder = NetworkBuilder::new();
        assert_eq!(builder.nodes(), 0);
        assert_eq!(builder.mean_degree(), None);
        assert_eq!(builder.rng_seed(), DEFAULT_SEED);

        let network = builder.build().expect("defaults are valid");
        assert!(network.is_empty());
    }

    #[test]
    fn nodes_without_mean_degree_stay_unlinked() {
        let network = NetworkBuilder::new()
            .with_nodes(12)
            .build()
            .expect("configuration is valid");
        assert_eq!(network.size(), 12);
        assert_eq!(network.link_count(), 0);
    }

    #[test]
    fn seed_is_applied() {
        let builder = NetworkBuilder::new()
            .with_nodes(25)
            .with_mean_degree(3.0)
            .with_rng_seed(1234);
        let built = builder.build().expect("configuration is valid");

        let mut manual = Network::with_seed(1234);
        manual.resize(25);
        let edges = manual.random_connect(3.0).expect("mean is valid");

        assert_eq!(built.values(), manual.values());
        assert_eq!(built.link_count(), edges);
        assert!(built.edges().eq(manual.edges()));
    }

    #[test]
    fn injected_source_drives_the_build() {
        let script = ScriptedRandom::new()
            .with_normals([1.0, 2.0])
            .with_poissons([1])
            .with_uniforms([1.0]);
        let network = NetworkBuilder::new()
            .with_nodes(2)
            .with_mean_degree(0.7)
            .build_with(script)
            .expect("configuration is valid");

        assert_eq!(network.values(), &[1.0, 2.0]);
        assert_eq!(network.neighbors(0), &[1]);
    }

    #[rstest]
    #[case(-0.5)]
    #[case(f64::NAN)]
    fn invalid_mean_degree_is_rejected(#[case] mean: f64) {
        let err = NetworkBuilder::new()
            .with_nodes(4)
            .with_mean_degree(mean)
            .build()
            .expect_err("mean must be rejected");
        assert!(matches!(err, NetworkError::InvalidMeanDegree { .. }));
    }
}
