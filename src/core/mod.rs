//! # Core Application Logic
//!
//! This module contains sutility's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Menu (cursor)        │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  sysinfo   │
//!     │  Adapter   │                          │ (statvfs,  │
//!     │ (ratatui)  │                          │   sysfs)   │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`]: `MenuState`: entries and the clamped cursor
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`panel`]: `ResultPanel`: what a finished query displays
//! - [`config`]: File/env/CLI settings

pub mod action;
pub mod config;
pub mod menu;
pub mod panel;
pub mod state;
