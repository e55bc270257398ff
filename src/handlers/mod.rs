// This file declares the handler modules and re-exports their contents
// so routes can use `crate::handlers::function_name`

pub mod grid;

pub use grid::*;
