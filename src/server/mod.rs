//! Server-side API backend and business logic.
//!
//! This module contains the backend for both binaries: the shop (users, catalogue, carts,
//! checkout, addresses) and the bookstore. The backend uses Axum as the web framework and
//! SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, checkout service)
//! - **Startup** (`startup`) - Tracing, database, migration and session initialization
//! - **Router** (`router`) - Axum route configuration and OpenAPI documentation
//!
//! # Checkout
//!
//! Order placement lives in `service::checkout`. It runs against the `CheckoutBackend`
//! trait; `data::checkout` provides the SeaORM implementation, where each checkout is one
//! database transaction taken under a per-user lock.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
