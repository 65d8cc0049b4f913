pub mod catalog;
pub mod export;
pub mod model;

pub use catalog::*;
pub use export::*;
pub use model::*;
