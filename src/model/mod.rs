pub mod category;
pub mod resource;
pub mod word;
pub mod word_list;

pub use category::*;
pub use resource::*;
pub use word::*;
pub use word_list::*;
