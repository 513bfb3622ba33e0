//! # Axum Helpers
//!
//! Shared HTTP plumbing for the ShareIt server and gateway.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`middleware`]**: Security headers
//! - **[`errors`]**: `AppError` and the `{"error": ...}` response body
//! - **[`extractors`]**: Validated JSON/query, positive id path, caller header, paging
//! - **[`validation`]**: Custom validator functions
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{close_database, create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api::routes(&state))
//!     .await?
//!     .merge(health_router(core_config::app_info!()));
//!
//! let cleanup = close_database(state.db.clone(), "shareit");
//! create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;
pub mod validation;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_database, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use middleware::security_headers;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{
    IdPath, PageParams, SHARER_USER_ID_HEADER, SharerUserId, ValidatedJson, ValidatedQuery,
};
