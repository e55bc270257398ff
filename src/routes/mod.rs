// This file declares the route modules and re-exports their contents
// This allows other parts of the code to use `use crate::routes::grid_router`

pub mod grid;

pub use grid::*;
