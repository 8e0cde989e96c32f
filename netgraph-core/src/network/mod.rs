//! The undirected network: node values plus symmetric links.

mod connect;
mod links;

use std::fmt;

use tracing::{instrument, trace};

use crate::random::{RandomSource, SeededRandom};

use self::links::LinkSet;

/// Why [`Network::try_link`] refused a link.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LinkRejection {
    /// An endpoint is not a current node index.
    OutOfRange,
    /// Both endpoints are the same node.
    SelfLink,
    /// The two nodes are already linked.
    Duplicate,
}

impl LinkRejection {
    /// Stable lowercase name, used as a log field and metric label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfRange => "out_of_range",
            Self::SelfLink => "self_link",
            Self::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for LinkRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed set of real-valued nodes joined by undirected links.
///
/// Node identity is the position in the value list. Links are simple: no
/// self-links and at most one link per pair of nodes. The random source is
/// owned by the network and drives [`Network::resize`] and
/// [`Network::random_connect`].
///
/// Link storage is independent of the node values. Shrinking the network
/// with [`Network::resize`] or [`Network::set_values`] leaves existing links
/// in place, so [`Network::degree`] and [`Network::neighbors`] can report
/// links to indices that no longer name a node until the links are rebuilt.
///
/// # Examples
/// ```
/// use netgraph_core::Network;
///
/// let mut network = Network::with_seed(7);
/// network.resize(4);
/// assert!(network.add_link(0, 1));
/// assert!(!network.add_link(1, 0));
/// assert!(!network.add_link(0, 5));
/// assert_eq!(network.neighbors(0), &[1]);
/// assert_eq!(network.neighbors(1), &[0]);
/// assert_eq!(network.degree(2), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Network<R = SeededRandom> {
    values: Vec<f64>,
    links: LinkSet,
    rng: R,
}

impl Network<SeededRandom> {
    /// Creates an empty network drawing from a [`SeededRandom`] seeded with
    /// `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SeededRandom::new(seed))
    }
}

impl<R: RandomSource> Network<R> {
    /// Creates an empty network drawing from `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self {
            values: Vec::new(),
            links: LinkSet::new(),
            rng,
        }
    }

    /// Replaces every node value with `n` fresh standard-normal draws.
    ///
    /// Links are left untouched.
    ///
    /// # Examples
    /// ```
    /// use netgraph_core::Network;
    ///
    /// let mut network = Network::with_seed(1);
    /// network.resize(5);
    /// assert_eq!(network.size(), 5);
    /// assert!(network.value(4).is_some());
    /// ```
    #[instrument(name = "network.resize", level = "debug", skip(self), fields(previous = self.values.len()))]
    pub fn resize(&mut self, n: usize) {
        self.values.clear();
        self.values.reserve(n);
        for _ in 0..n {
            self.values.push(self.rng.normal());
        }
    }

    /// Mutable access to the random source, e.g. to reseed or inspect it.
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R> Network<R> {
    /// Replaces the node values wholesale and returns the new node count.
    ///
    /// Links are left untouched.
    #[instrument(
        name = "network.set_values",
        level = "debug",
        skip(self, values),
        fields(previous = self.values.len(), nodes = values.len()),
    )]
    pub fn set_values(&mut self, values: Vec<f64>) -> usize {
        self.values = values;
        self.values.len()
    }

    /// Links `a` and `b`, returning whether a new link was created.
    ///
    /// Fails without changing anything when either index is out of range,
    /// when `a == b`, or when the two nodes are already linked in either
    /// direction. [`Network::try_link`] reports which.
    pub fn add_link(&mut self, a: usize, b: usize) -> bool {
        let outcome = self.try_link(a, b);
        record_link_outcome(outcome);
        match outcome {
            Ok(()) => true,
            Err(reason) => {
                trace!(a, b, %reason, "link rejected");
                false
            }
        }
    }

    /// Links `a` and `b`, reporting why the link was refused on failure.
    ///
    /// # Errors
    /// Returns the [`LinkRejection`] that prevented the link; the network is
    /// unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use netgraph_core::{LinkRejection, Network};
    ///
    /// let mut network = Network::with_seed(3);
    /// network.set_values(vec![0.0, 1.0, 2.0]);
    /// assert_eq!(network.try_link(0, 2), Ok(()));
    /// assert_eq!(network.try_link(2, 0), Err(LinkRejection::Duplicate));
    /// assert_eq!(network.try_link(1, 1), Err(LinkRejection::SelfLink));
    /// assert_eq!(network.try_link(1, 3), Err(LinkRejection::OutOfRange));
    /// ```
    pub fn try_link(&mut self, a: usize, b: usize) -> Result<(), LinkRejection> {
        let size = self.size();
        if a >= size || b >= size {
            return Err(LinkRejection::OutOfRange);
        }
        if a == b {
            return Err(LinkRejection::SelfLink);
        }
        if self.links.contains(a, b) {
            return Err(LinkRejection::Duplicate);
        }
        self.links.insert(a, b);
        Ok(())
    }

    /// Number of nodes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.values.len()
    }

    /// Whether the network has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of links at node `n`; zero for indices that were never linked.
    #[must_use]
    pub fn degree(&self, n: usize) -> usize {
        self.links.degree(n)
    }

    /// Value of node `n`, or `None` when `n` is not a node index.
    #[must_use]
    pub fn value(&self, n: usize) -> Option<f64> {
        self.values.get(n).copied()
    }

    /// Node values in index order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Copy of the node values, largest first.
    ///
    /// # Examples
    /// ```
    /// use netgraph_core::Network;
    ///
    /// let mut network = Network::with_seed(0);
    /// network.set_values(vec![3.0, 1.0, 2.0]);
    /// assert_eq!(network.sorted_values(), vec![3.0, 2.0, 1.0]);
    /// ```
    #[must_use]
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable_by(|left, right| right.total_cmp(left));
        sorted
    }

    /// Nodes linked to `n`, in the order the links were made.
    #[must_use]
    pub fn neighbors(&self, n: usize) -> &[usize] {
        self.links.neighbors(n)
    }

    /// Number of undirected links.
    #[must_use]
    pub const fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Every undirected link once, as `(low, high)` index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.links.edges()
    }
}

#[cfg(feature = "metrics")]
fn record_link_outcome(outcome: Result<(), LinkRejection>) {
    match outcome {
        Ok(()) => metrics::counter!("network_links_created").increment(1),
        Err(reason) => {
            metrics::counter!("network_link_rejections", "reason" => reason.as_str()).increment(1);
        }
    }
}

#[cfg(not(feature = "metrics"))]
const fn record_link_outcome(_outcome: Result<(), LinkRejection>) {}
