//! Shroud Core - Keep-Rule Model
//!
//! Data structures produced by the configuration parser: access-flag sets,
//! member and keep specifications, class paths and the aggregate
//! [`Configuration`]. Also hosts the class-name and descriptor conversions the
//! parser and printer share, and the [`ParserSettings`] knobs.
//!
//! This crate contains no parsing; see `shroud-dsl` for the grammar.

pub mod access;
pub mod class_util;
pub mod classpath;
pub mod config;
pub mod error;
pub mod keep;
pub mod settings;

pub use access::{AccessFlagSet, AccessFlags};
pub use classpath::{ClassPath, ClassPathEntry};
pub use config::Configuration;
pub use error::{ValidationError, ValidationResult};
pub use keep::{KeepIntent, KeepSpec, MemberSpec};
pub use settings::{ParserSettings, DEFAULT_MAX_INCLUDE_DEPTH, DEFAULT_PATH_SEPARATOR};
