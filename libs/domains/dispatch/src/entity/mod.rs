//! Sea-ORM entities for couriers and tasks

pub mod courier;
pub mod task;
