/*!
# Graph Generators

This module provides the builder traits and the random edge generator used to produce
synthetic edge lists.

The typical usage workflow is:

1. Create a generator instance (e.g., `UniformEdges::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m)`).
3. Generate edges via `try_generate()` or `try_stream()`.

Supported models:
- Uniform loop-free directed multigraphs: `m` independent edges, each with a uniform source
  and a uniform target different from the source

Generators only consume a random source implementing [`Rng`]; reproducibility is up to the
caller (tests use a seeded `Pcg64Mcg`, the binary uses the thread-local generator).
*/

use rand::Rng;
use thiserror::Error;

use crate::prelude::*;

mod uniform;

pub use uniform::*;

/// Errors raised when a generator is configured with parameters it cannot satisfy.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// A loop-free edge requires two distinct endpoints.
    #[error("cannot generate {m} loop-free edge(s) on {n} node(s): at least 2 nodes are required")]
    TooFewNodes { n: NumNodes, m: NumEdges },
}

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen {
    /// Sets the number of edges in the graph generator.
    fn edges(self, m: NumEdges) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Creates a lazy iterator (stream) over generated edges.
    ///
    /// # Errors
    /// Returns an error if the configured parameters admit no valid edge list.
    fn try_stream<R>(&self, rng: &mut R) -> Result<impl Iterator<Item = Edge>, GeneratorError>
    where
        R: Rng;

    /// Generates a list of random edges.
    ///
    /// This collects the full result from `try_stream()` into a `Vec<Edge>` as default.
    fn try_generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>, GeneratorError>
    where
        R: Rng,
    {
        Ok(self.try_stream(rng)?.collect())
    }

    /// Like [`GraphGenerator::try_generate`] but panics on invalid parameters.
    ///
    /// # Panics
    /// If the configured parameters admit no valid edge list.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        match self.try_generate(rng) {
            Ok(edges) => edges,
            Err(err) => panic!("{err}"),
        }
    }
}
