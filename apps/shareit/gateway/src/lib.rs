//! ShareIt gateway
//!
//! Public entry point in front of the ShareIt server. Requests are checked
//! here (field rules, caller header, paging, booking dates, state filter) and
//! only valid ones are forwarded; the server's status and body come back
//! untouched.
//!
//! ```text
//! client ─▶ gateway ──validate──▶ ShareItClient ─▶ server
//!              │                                     │
//!              └◀────────── status + body ◀──────────┘
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod openapi;
pub mod state;

pub use client::{ShareItClient, UpstreamResponse};
pub use config::{Config, UpstreamConfig};
pub use error::{GatewayError, GatewayResult};
pub use state::AppState;
