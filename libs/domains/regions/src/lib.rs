//! Regions Domain
//!
//! Delivery regions. A region is created once and never changes; couriers
//! and tasks reference it by id.
//!
//! ```text
//! Handlers → RegionService → RegionRepository (InMemory | Pg) → entity
//! ```
//!
//! ```rust,no_run
//! use domain_regions::{handlers, InMemoryRegionRepository, RegionService};
//!
//! let service = RegionService::new(InMemoryRegionRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{RegionError, RegionResult};
pub use models::{CreateRegion, Region};
pub use postgres::PgRegionRepository;
pub use repository::{InMemoryRegionRepository, RegionRepository};
pub use service::RegionService;
