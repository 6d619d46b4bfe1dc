//! flexgen - enum binding generator for the Yoga layout engine
//!
//! This crate turns a declarative table of layout enums into source code for
//! a target language (Go or Rust), with stable lower-hyphen string forms and
//! typed parse failures. It also describes the native build targets the
//! generated bindings link against.

pub mod codegen;
pub mod core;
pub mod ops;
pub mod util;


pub use codegen::{generate, GenerateError, Header, Language, Renderer};
pub use crate::core::{
    platform::{BuildTarget, Platform},
    table::{EnumDefinition, EnumTable, MemberSpec},
};
pub use ops::{generate_outputs, GenerateOptions, GenerateReport, OutputSpec};
