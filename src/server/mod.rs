//! Server-side API backend and business logic.
//!
//! This module contains the guild import backend: the HTTP endpoint, the archive
//! validator, the import orchestrator and the persistence it writes through. The backend
//! uses Axum as the web framework, SeaORM for database operations, and Serenity's HTTP
//! client for Discord lookups.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Import orchestration and its collaborators
//! - **Validator** (`validator/`) - Signature and size checks of uploaded archives
//! - **Data Layer** (`data/`) - Repositories over the SeaORM entities
//! - **Model Layer** (`model/`) - Archive document and operation parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Acting user resolution
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database and dependency initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the upload and routes it to the import controller
//! 2. **Controller** resolves the acting user and reads the multipart archives
//! 3. **Service** verifies the archives, checks ownership and runs the import stages
//! 4. **Data** writes the remapped records and their id mappings
//! 5. **Controller** converts the outcome report to a DTO

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
pub mod validator;
