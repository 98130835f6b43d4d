pub mod character;
pub mod error;
pub mod message;

pub use character::*;
pub use error::*;
pub use message::*;
