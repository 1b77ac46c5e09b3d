mod matrix;
mod mvp;
mod utils;
mod vector;

pub use matrix::*;
pub use vector::*;
