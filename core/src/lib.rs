mod color;
mod pick;

pub mod error;

pub use color::{ChromaPoint, Lab, Rgb, Srgb, Xyz};
pub use error::{Error, Result};
pub use pick::{most_distinct, nearest};
