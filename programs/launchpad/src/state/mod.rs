pub mod bid;
pub mod config;
pub mod enums;
pub mod product;

pub use bid::*;
pub use config::*;
pub use enums::*;
pub use product::*;
