//! HTTP handlers for `/couriers` and `/tasks`

pub mod couriers;
pub mod tasks;
