//! Server-side webhook backend and business logic.
//!
//! This module contains the complete backend: the Discord interaction webhook,
//! the public whitelist endpoint, the scheduled guild refresh, and the data
//! access underneath them. The backend uses Axum as the web framework, SeaORM
//! for database operations, and Serenity's REST client for Discord API calls.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Registration rules, listings, refresh orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, command names and the role-rank table
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Webhook signature verification
//! - **Discord** (`discord/`) - Guild API client and message paging
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, Discord client, role table)
//! - **Startup** (`startup`) - Initialization of database, role table and Discord client
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron job refreshing guild snapshots
//! - **Util** (`util/`) - Parsing of role-channel messages

pub mod config;
pub mod controller;
pub mod data;
pub mod discord;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
