//! PDF text extraction

mod extract;

pub use extract::*;
