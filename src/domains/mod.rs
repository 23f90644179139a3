//! Concrete domains that plug into the search core.

pub mod grid;
