pub mod error;
pub mod math;
pub mod operations;
pub mod selection;
pub mod stored;
pub mod topology;

pub use error::{PolywallError, Result};
