//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! YAML file (--config-path)
//!     → loader.rs (read + parse)
//!     → validation.rs (semantic checks, all errors collected)
//!     → schema.rs types consumed by the rest of the system
//! ```
//!
//! # Design Decisions
//! - Entities and channel specs are immutable after load
//! - Configuration errors are fatal at startup, never at runtime
//! - Channel params are an opaque string map; each channel kind pulls
//!   the parameters it needs at construction time

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, ChannelSpec, MonitoredEntity};
pub use validation::{validate_config, ValidationError};
