pub mod common;
mod error;
pub mod graph;
pub mod query;
pub mod search;
#[cfg(test)]
mod test_utils;

pub use error::{LinkGraphError, LinkGraphResult};
