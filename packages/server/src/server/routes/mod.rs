// HTTP routes
pub mod health;
pub mod hello;
pub mod students;

pub use health::*;
pub use hello::*;
pub use students::*;
