pub mod health;
pub mod hello;
pub mod fallback;

pub use health::*;
pub use hello::*;
pub use fallback::*;
