//! Memory statistics types

mod pages;
mod snapshot;

pub use pages::*;
pub use snapshot::*;
