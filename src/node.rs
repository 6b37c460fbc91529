/*!
# Node Representation

We choose `Node = u32` as generated graphs practically never exceed `2^32` nodes.
In memory nodes are numbered `0` to `n - 1`; the edge-list format shifts them to `1..=n`
when writing and back when reading.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Converts an in-memory node into its 1-based representation in files
#[inline]
pub const fn to_external(u: Node) -> u64 {
    u as u64 + 1
}

/// Converts a 1-based node read from a file into its in-memory representation.
///
/// Returns `None` for `0` which has no in-memory counterpart.
#[inline]
pub const fn from_external(u: u64) -> Option<Node> {
    if u == 0 || u > Node::MAX as u64 {
        None
    } else {
        Some((u - 1) as Node)
    }
}
