pub mod item;

pub use item::{Item, ItemCreated, ItemDetail, NewItem};
