//! # State Module
//!
//! Application state for one console session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         Session                                 │   │
//! │  │  ┌──────────────────────────┐  ┌──────────────────────────┐    │   │
//! │  │  │      CatalogStore        │  │      ConfigState         │    │   │
//! │  │  │  the only product list   │  │  store name, currency,   │    │   │
//! │  │  │  mutated by handlers     │  │  seed path, log filter   │    │   │
//! │  │  └──────────────────────────┘  └──────────────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Single-threaded: handlers borrow the session for one operation.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState};
pub use session::Session;
