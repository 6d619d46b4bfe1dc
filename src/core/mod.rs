//! Core data structures for flexgen.
//!
//! This module contains the foundational types used throughout flexgen:
//! - Name casing (UPPER_SNAKE constants, lower-hyphen external names)
//! - The declarative enum table
//! - The native build target set (platforms, architectures, install layout)

pub mod naming;
pub mod platform;
pub mod table;

pub use naming::{split_words, to_lower_hyphen, to_upper_snake};
pub use platform::{BuildTarget, InstallLayout, Platform, PlatformError};
pub use table::{EnumDefinition, EnumTable, MemberSpec, TableError};
