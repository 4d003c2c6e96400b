pub mod blocks;
pub mod numeric;
