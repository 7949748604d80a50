pub mod r#box;
pub mod item;
pub mod item_photo;
pub mod item_type;

pub use item::*;
pub use item_photo::*;
pub use item_type::*;
pub use r#box::*;
