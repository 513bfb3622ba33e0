//! ShareIt server
//!
//! Owns the database and serves the users, items, bookings and requests
//! domains at the root path, plus `/health`, `/ready` and the OpenAPI UIs.
//!
//! ```text
//! main ─▶ Config::from_env ─▶ connect + migrate ─▶ AppState
//!                                                    │
//!                     api::routes(&state) ◀──────────┘
//!                          │
//!          create_router::<ApiDoc> + health + ready ─▶ create_production_app
//! ```

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

pub use config::Config;
pub use state::AppState;
