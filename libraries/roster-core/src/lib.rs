//! Roster Core
//!
//! Domain types, validation and CRUD operations for the Roster user service.
//!
//! This crate has no HTTP knowledge. The server crate owns a [`UserStore`],
//! runs request bodies through the [`validation`] functions, and calls the
//! [`operations`] with the store it holds.
//!
//! # Architecture
//!
//! - **Domain Types**: `User`, `UserId`, `CreateUser`, `UpdateUser`
//! - **User Store**: ordered in-memory collection of users
//! - **Validators**: pure payload checks producing typed requests
//! - **Operations**: list/get/create/update/delete against the store
//! - **Error Handling**: `RosterError`, `ValidationError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use roster_core::{operations, validation, UserStore};
//! use serde_json::json;
//!
//! let mut store = UserStore::new();
//!
//! let input = validation::validate_create(&json!({
//!     "name": "Ann",
//!     "email": "ann@example.com",
//! }))
//! .unwrap();
//!
//! let user = operations::create_user(&mut store, input, Utc::now()).unwrap();
//! assert_eq!(operations::get_user(&store, &user.id).unwrap(), &user);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod operations;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, RosterError, ValidationError};
pub use store::UserStore;
pub use types::{CreateUser, UpdateUser, User, UserId};
