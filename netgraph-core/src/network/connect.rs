//! Random link generation with Poisson-distributed degree targets.

use tracing::{Span, debug, info, instrument, warn};

use crate::{
    error::{Result, validate_mean_degree},
    random::RandomSource,
};

use super::Network;

impl<R: RandomSource> Network<R> {
    /// Discards every link, then links each node to randomly chosen partners.
    ///
    /// Nodes are visited in index order. Each draws a target from a Poisson
    /// distribution with mean `mean_degree` and gains that many new links.
    /// The target is clamped to `size() - 1` and to the partners the node
    /// can still acquire, since earlier nodes may already have linked to it.
    /// Partners are drawn uniformly over all indices and redrawn until a
    /// link succeeds. Returns the number of undirected links created.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::InvalidMeanDegree`] when `mean_degree`
    /// is negative or not finite. Existing links are kept in that case.
    ///
    /// # Examples
    /// ```
    /// use netgraph_core::Network;
    ///
    /// let mut network = Network::with_seed(42);
    /// network.resize(50);
    /// let edges = network.random_connect(3.0)?;
    /// let degree_sum: usize = (0..network.size()).map(|n| network.degree(n)).sum();
    /// assert_eq!(degree_sum, 2 * edges);
    /// # Ok::<(), netgraph_core::NetworkError>(())
    /// ```
    #[instrument(
        name = "network.random_connect",
        err,
        skip(self),
        fields(nodes = self.values.len(), edges = tracing::field::Empty),
    )]
    pub fn random_connect(&mut self, mean_degree: f64) -> Result<usize> {
        let mean = validate_mean_degree(mean_degree)?;
        self.links.clear();

        let size = self.size();
        if size == 0 {
            warn!("random_connect on an empty network creates no links");
        }
        for node in 0..size {
            let wanted = self.degree_target(node, mean);
            for _ in 0..wanted {
                self.link_to_random_partner(node, size);
            }
        }

        let edges = self.links.len();
        Span::current().record("edges", edges);
        info!(edges, "random connection complete");
        Ok(edges)
    }

    /// Number of new links `node` should gain. Poisson draws are unsigned,
    /// so only the upper bound needs enforcing. `available` never exceeds
    /// `size() - 1`, so clamping to it also applies the simple-graph
    /// degree limit.
    fn degree_target(&mut self, node: usize, mean: f64) -> usize {
        let drawn = self.rng.poisson(mean);
        let max_degree = self.size().saturating_sub(1);
        let available = max_degree.saturating_sub(self.links.degree(node));
        let requested = usize::try_from(drawn).unwrap_or(usize::MAX);
        let target = requested.min(available);
        if target < requested {
            debug!(node, drawn, target, max_degree, available, "degree draw clamped");
        }
        target
    }

    /// Redraws candidates until one links to `node`. Terminates because
    /// `degree_target` never asks for more links than `node` has free
    /// partners.
    fn link_to_random_partner(&mut self, node: usize, size: usize) {
        loop {
            let candidate = self.draw_candidate(size);
            if self.add_link(node, candidate) {
                return;
            }
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "node counts are far below 2^52"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "truncating a draw in [0, size) yields a node index"
    )]
    fn draw_candidate(&mut self, size: usize) -> usize {
        self.rng.uniform_double(0.0, size as f64) as usize
    }
}
