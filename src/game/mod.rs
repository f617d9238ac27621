pub mod board;
pub mod error;
pub mod movegen;
pub mod pieces;
pub mod square;

pub use board::*;
pub use error::*;
pub use pieces::*;
pub use square::*;
