//! Postgres access for the Crewly HR API.
//!
//! Entity models with their queries, pool bootstrap, and embedded
//! migrations. Higher layers compose these into role-scoped operations;
//! nothing in this crate knows about actors or HTTP.

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;

pub use error::{is_unique_violation, DbError};
pub use migrations::run_migrations;
pub use models::{Company, Employee, EmployeeChanges, EmployeeState, InvitationToken, NewEmployee};
pub use pool::connect_pool;

pub use sqlx::PgPool;
