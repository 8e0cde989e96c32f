//! Netgraph core library.
//!
//! An in-memory undirected network: a fixed set of nodes, each carrying a
//! real value, joined by simple undirected links. Links can be added one at a
//! time or generated at random with Poisson-distributed degrees. All
//! randomness comes from an injected [`RandomSource`], so a seeded source
//! reproduces both node values and link layout exactly.
//!
//! # Instrumentation
//!
//! Operations emit `tracing` spans (`network.resize`, `network.set_values`,
//! `network.random_connect`, `network.build`) and events; the library never
//! installs a subscriber. With the `metrics` feature enabled, link attempts
//! increment `network_links_created` and `network_link_rejections` (labelled
//! by `reason`).

mod builder;
mod error;
mod network;
mod random;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::NetworkBuilder,
    error::{NetworkError, NetworkErrorCode, Result},
    network::{LinkRejection, Network},
    random::{DEFAULT_SEED, RandomSource, SeededRandom},
};
