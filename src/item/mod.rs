pub mod builder;
pub mod item_stack;

pub use builder::ItemBuilder;
pub use item_stack::{ItemStack, Material, MAX_STACK_SIZE};
