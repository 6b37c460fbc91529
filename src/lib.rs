/*!
`edgegen` generates synthetic edge lists for testing and benchmarking graph algorithms.

A generated graph is
- **directed** : `Edge(u, v)` points from `u` to `v`, and `Edge(v, u)` is a different edge
- **loop-free** : no edge has equal endpoints
- a **multigraph** : the same edge may be drawn more than once

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.
Files number nodes from `1` to `n`; the conversion happens in [`io`].

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes and edges,
- [`gens`] includes the random edge generators, configured with the *Builder* pattern,
- [`io`] includes the reader and writer for the plain-text edge-list format.

```no_run
use edgegen::{gens::*, io::*, prelude::*};

let edges = UniformEdges::new()
    .nodes(5)
    .edges(3)
    .try_generate(&mut rand::rng())
    .unwrap();

edges.try_write_edge_list_file("input.txt").unwrap();
```
*/

pub mod edge;
pub mod gens;
pub mod io;
pub mod node;

/// Output file written by the `edgegen` binary, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "input.txt";

/// `edgegen::prelude` includes definitions for nodes and edges.
pub mod prelude {
    pub use super::{edge::*, node::*};
}

pub use prelude::*;
