pub mod health;
pub mod hello;
pub mod error;

pub use health::*;
pub use hello::*;
pub use error::*;
