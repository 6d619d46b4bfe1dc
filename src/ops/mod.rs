//! High-level operations.
//!
//! This module contains the implementation of flexgen commands.

pub mod generate;

pub use generate::{
    generate_outputs, load_table, GenerateOptions, GenerateReport, OutputReport, OutputSpec,
    OutputState,
};
