//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the front desk: API endpoints, the
//! reservation lifecycle, availability and pricing rules, data access, and startup
//! infrastructure. The backend uses Axum as the web framework and SeaORM over SQLite
//! for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Booking rules, locking and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, room locks, booking limits)
//! - **Startup** (`startup`) - Database connection, migrations and tracing
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Seed** (`seed`) - Demo data for an empty database
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params and calls the service
//! 3. **Service** validates against the request's booking context, takes the room lock
//!    where needed and runs the data operations in one transaction
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
