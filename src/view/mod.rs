//!
//! HTML pages rendered by the routing handlers
//!

mod layout;
mod pages;

pub use pages::*;
