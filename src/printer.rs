use crate::list::List;
use std::fmt::Display;
use std::io::{self, Write};

/// Writes `label`, the rendered chain and a trailing newline to `sink`.
///
/// The chain reads left to right in append order, every value followed by
/// an arrow, closed by the terminal marker: `10 -> 20 -> 30 -> NULL`. The
/// empty list renders as the terminal marker alone.
pub fn render<T: Display>(list: &List<T>, label: &str, sink: &mut impl Write) -> io::Result<()> {
    writeln!(sink, "{label}{list}")
}
