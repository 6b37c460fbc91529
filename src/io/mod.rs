/*!
# IO

Utilities for writing generated edge lists to files and reading them back.

## Format

The **EdgeList** format is headerless: it consists of one line `u v` per directed edge
`Edge(u - 1, v - 1)`, with nodes numbered from `1` and separated by a single space.

When reading, empty lines and lines starting with a comment identifier are skipped.

## Traits

- [`EdgeListWrite`] is implemented for edge slices and writes them with default settings.
- [`EdgeListRead`] is implemented for `Vec<Edge>` and reads with default settings.

Use [`EdgeListWriter`] / [`EdgeListReader`] directly for non-default settings.
*/

pub mod edge_list;

pub use edge_list::*;

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        token.parse().map_err(|_| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Invalid value found. Cannot parse {}.", $name)
            )
        })?
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
