mod item_slot;

pub use item_slot::*;
