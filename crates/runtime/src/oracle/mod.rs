//! Oracle adapters backed by loaded content.
mod map;

pub use map::HexMapOracle;
