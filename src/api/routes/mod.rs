//! API Routes
//!
//! Route handlers organized by functionality.

pub mod areas;
pub mod callbacks;
pub mod health;
pub mod page;
