pub mod cart;
pub mod order;
pub(crate) mod transaction;
