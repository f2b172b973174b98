//! A singly linked list with append-to-tail, rendering and explicit
//! release.
//!
//! [`List`] keeps its nodes as a uniquely owned chain: every node owns its
//! successor and the list owns the head. Appends walk to the tail, renders
//! read the chain left to right, and [`List::clear`] (or dropping the
//! list) releases every node exactly once.
//!
//! The `maillon` binary reproduces the classic teaching fixture: append
//! 10, 20 and 30, print the chain, release it.

pub mod error;
pub mod list;
pub mod printer;

pub use error::{Error, Result};
pub use list::List;
