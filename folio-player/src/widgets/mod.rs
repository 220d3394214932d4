pub mod cards;

pub use cards::{icon_for, shelf_item, truncate};
