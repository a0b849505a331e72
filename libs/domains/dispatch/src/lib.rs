//! Dispatch Domain
//!
//! Couriers and the delivery tasks assigned to them. Every task write goes
//! through the assignment rules in [`rules`]: a task must be in its
//! courier's region and must fit in the courier's free cells.
//!
//! ```text
//! Handlers → CourierService / TaskService → repositories (InMemory | Pg) → entity
//!                                                 └── rules::validate_assignment
//! ```
//!
//! ```rust,no_run
//! use domain_dispatch::{handlers, InMemoryDispatchRepository, TaskService};
//! use domain_regions::InMemoryRegionRepository;
//!
//! let repo = InMemoryDispatchRepository::new(InMemoryRegionRepository::new());
//! let router = handlers::tasks::router(TaskService::new(repo));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod rules;
pub mod service;

pub use error::{DispatchError, DispatchResult};
pub use models::{Courier, CourierWithTasks, CreateCourier, CreateTask, Task, TransferTask};
pub use postgres::{PgCourierRepository, PgTaskRepository};
pub use repository::{CourierRepository, InMemoryDispatchRepository, TaskRepository};
pub use rules::{AssignmentRejection, validate_assignment};
pub use service::{CourierService, TaskService};
