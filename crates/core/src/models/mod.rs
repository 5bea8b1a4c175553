pub mod product;
pub mod registry;
pub mod sample;
pub mod supplier;
