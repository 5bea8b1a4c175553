pub mod input;
pub mod inventory_service;
