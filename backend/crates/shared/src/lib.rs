//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest vocabulary every bounded context agrees on:
//! - Unified error type and result alias
//! - Typed entity IDs
//! - The authenticated request context
//!
//! **Design Principle**: only things that are hard to change and mean the
//! same thing in every crate belong here.

pub mod context;
pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
