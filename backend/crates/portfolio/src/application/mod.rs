pub mod add_item;
pub mod list_items;

pub use add_item::{AddItemInput, AddItemOutput, AddItemUseCase};
pub use list_items::ListItemsUseCase;
