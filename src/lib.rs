//! Tasklist: projects, tasks and deadlines.
//!
//! This crate tracks tasks grouped into named projects, lets tasks be checked
//! off, assigns optional due dates, and reports tasks grouped by project or
//! by due date. The same core is driven by an interactive console and by a
//! small HTTP API.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and identity
//! - **Adapters**: Concrete implementations of ports and user-facing surfaces
//!
//! # Modules
//!
//! - [`task`]: Domain model, stores and the task list service
//! - [`console`]: Line-oriented command loop
//! - [`http`]: JSON API over the task list service
//! - [`config`]: Layered server settings
//! - [`telemetry`]: Tracing subscriber set-up

pub mod config;
pub mod console;
pub mod http;
pub mod task;
pub mod telemetry;
