pub mod block;
pub mod buffer;
pub mod config;
pub mod task;

pub use block::*;
pub use buffer::*;
pub use config::*;
pub use task::*;
