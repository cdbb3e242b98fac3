mod path;
mod random;
mod stats;

use itertools::Itertools;
use log::warn;
pub use path::*;
use percent_encoding::percent_decode_str;
pub use random::*;
pub use stats::*;

/// Vertex names stay percent-encoded while they are graph keys; they
/// are only decoded here, at the point of display.
pub(crate) fn decode(name: &str) -> String {
    match percent_decode_str(name).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            warn!("cannot decode {name:?}: {e}");
            name.to_string()
        }
    }
}

pub(crate) fn print_report(banner: &str, path: Option<Vec<String>>) {
    println!("{banner}:");
    match path {
        Some(path) => {
            println!("Length = {}", path.len() - 1);
            println!("{}", path.iter().map(|name| decode(name)).join(" --> "));
        }
        None => println!("No path found"),
    }
}
