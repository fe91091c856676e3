pub mod item_type;
