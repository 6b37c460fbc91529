use tracing::debug;

use super::*;

/// Generator for directed multigraphs with `n` nodes and exactly `m` loop-free edges.
///
/// Every edge is drawn independently: the source is uniform over all `n` nodes, the target
/// is uniform over the remaining `n - 1` nodes. Parallel edges (and an edge together with
/// its reverse) may therefore occur; the edges are returned in generation order.
///
/// The generator can be parameterized via:
/// - `.nodes(n)`: total number of nodes
/// - `.edges(m)`: total number of edges
#[derive(Debug, Copy, Clone, Default)]
pub struct UniformEdges {
    n: NumNodes,
    m: NumEdges,
}

impl UniformEdges {
    /// Creates a new empty generator (no nodes, no edges)
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configured number of nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the configured number of edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.m
    }

    /// Checks whether `m` loop-free edges can be placed on `n` nodes.
    ///
    /// An empty edge list is always valid, otherwise at least two nodes are required.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.m > 0 && self.n < 2 {
            return Err(GeneratorError::TooFewNodes {
                n: self.n,
                m: self.m,
            });
        }

        Ok(())
    }
}

impl NumNodesGen for UniformEdges {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NumEdgesGen for UniformEdges {
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }
}

impl GraphGenerator for UniformEdges {
    /// Returns a streaming iterator over `m` random loop-free edges.
    fn try_stream<R>(&self, rng: &mut R) -> Result<impl Iterator<Item = Edge>, GeneratorError>
    where
        R: Rng,
    {
        self.validate()?;
        debug!(nodes = self.n, edges = self.m, "generating uniform loop-free edges");

        Ok(UniformEdgesIter {
            n: self.n as u64,
            end: Edge::num_loop_free(self.n),
            rem: self.m,
            rng,
        })
    }
}

/// Yields `rem` edges, each obtained from a single uniform draw over the `n(n-1)`
/// loop-free directed edges.
///
/// Drawing from the complement of the source avoids rejection sampling altogether: the
/// distribution equals "redraw the target until it differs from the source" but every
/// draw succeeds.
pub struct UniformEdgesIter<'a, R>
where
    R: Rng,
{
    n: u64,
    /// Number of loop-free edges on `n` nodes
    end: u64,
    rem: NumEdges,
    rng: &'a mut R,
}

impl<'a, R> Iterator for UniformEdgesIter<'a, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rem == 0 {
            return None;
        }
        self.rem -= 1;

        let x = self.rng.random_range(0..self.end);
        Some(Edge::from_u64_no_loop(x, self.n))
    }

    /// Returns the number of edges remaining to be generated.
    ///
    /// The upper bound is `None` if the remainder does not fit into `usize`.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = usize::try_from(self.rem).unwrap_or(usize::MAX);
        (rem, usize::try_from(self.rem).ok())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn exact_number_of_loop_free_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2 as NumNodes, 3, 5, 10, 100] {
            for m in [0 as NumEdges, 1, 10, 1000] {
                let edges = UniformEdges::new().nodes(n).edges(m).generate(rng);

                assert_eq!(edges.len() as NumEdges, m);
                assert!(edges.iter().all(|e| !e.is_loop()));
                assert!(edges.iter().all(|e| e.is_within(n)));
            }
        }
    }

    #[test]
    fn five_nodes_three_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let edges = UniformEdges::new().nodes(5).edges(3).try_generate(rng).unwrap();

        assert_eq!(edges.len(), 3);
        for Edge(u, v) in edges {
            assert!(u < 5 && v < 5);
            assert_ne!(u, v);
        }
    }

    #[test]
    fn stream_size_hint_counts_remaining() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let generator = UniformEdges::new().nodes(10).edges(42);
        assert_eq!(generator.number_of_nodes(), 10);
        assert_eq!(generator.number_of_edges(), 42);

        let mut stream = generator.try_stream(rng).unwrap();
        assert_eq!(stream.size_hint(), (42, Some(42)));
        stream.next();
        assert_eq!(stream.size_hint(), (41, Some(41)));
        assert_eq!(stream.count(), 41);
    }

    #[test]
    fn two_nodes_produce_both_directions() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let edges = UniformEdges::new().nodes(2).edges(200).generate(rng);

        assert!(edges.iter().all(|&e| e == Edge(0, 1) || e == Edge(1, 0)));
        assert!(edges.contains(&Edge(0, 1)));
        assert!(edges.contains(&Edge(1, 0)));
    }

    #[test]
    fn parallel_edges_are_kept() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let edges = UniformEdges::new().nodes(3).edges(100).generate(rng);

        // only 6 distinct loop-free edges exist on 3 nodes
        assert_eq!(edges.len(), 100);
        assert!(edges.iter().unique().count() <= 6);
    }

    #[test]
    fn endpoints_roughly_uniform() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);
        let n = 4 as NumNodes;
        let m = 40_000;
        let edges = UniformEdges::new().nodes(n).edges(m).generate(rng);

        let mut sources = vec![0u64; n as usize];
        let mut targets = vec![0u64; n as usize];
        for Edge(u, v) in edges {
            sources[u as usize] += 1;
            targets[v as usize] += 1;
        }

        let expected = m / n as u64;
        for count in sources.into_iter().chain(targets) {
            assert!(count.abs_diff(expected) < expected / 10, "{count} vs {expected}");
        }
    }

    #[test]
    fn too_few_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [0 as NumNodes, 1] {
            assert_eq!(
                UniformEdges::new().nodes(n).edges(1).try_generate(rng),
                Err(GeneratorError::TooFewNodes { n, m: 1 })
            );
        }
    }

    #[test]
    fn empty_edge_list_always_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [0 as NumNodes, 1, 2] {
            let edges = UniformEdges::new().nodes(n).edges(0).try_generate(rng);
            assert_eq!(edges, Ok(Vec::new()));
        }
    }

    #[test]
    #[should_panic]
    fn generate_panics_on_single_node() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        UniformEdges::new().nodes(1).edges(3).generate(rng);
    }

    #[test]
    #[traced_test]
    fn logs_parameters() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        UniformEdges::new().nodes(8).edges(2).generate(rng);

        assert!(logs_contain("generating uniform loop-free edges"));
        assert!(logs_contain("nodes=8"));
    }
}
