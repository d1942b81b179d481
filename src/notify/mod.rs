//! Notification subsystem.
//!
//! # Data Flow
//! ```text
//! Probe worker (probe/worker.rs):
//!     Fail/Success observation
//!     → notifier.rs entry points
//!     → debounce.rs consults/updates the counter store
//!     → if an alert is warranted, fan out to every channel
//!
//! Channels (channel.rs):
//!     console.rs  → stdout
//!     telegram.rs → Bot API, bounded timeout
//! ```
//!
//! # Design Decisions
//! - Channel kinds form a closed set resolved once at startup
//! - Fan-out is best-effort and independent per channel
//! - Debounce state lives in the counter store, not in memory, so the
//!   process can restart mid-streak without re-alerting

pub mod channel;
pub mod console;
pub mod debounce;
pub mod notifier;
pub mod telegram;

pub use channel::{build_channels, Channel};
pub use console::ConsoleChannel;
pub use debounce::{DebounceEngine, Verdict};
pub use notifier::Notifier;
pub use telegram::TelegramChannel;
