//! Go composite-literal generation for kubelit.
//!
//! The pipeline: raw input is split into documents ([`split_documents`]),
//! each document is decoded through the [`Decode`] boundary, the decoded
//! value graph is encoded into a Go construction expression ([`encode`])
//! while package dependencies are collected ([`PackageSet`]), and the
//! assembled buffer is canonicalised through the [`Format`] boundary.
//! [`generate`] drives one full run.
//!
//! [`Decode`]: kubelit_value::Decode

mod alias;
mod encode;
mod format;
mod generate;
mod namespace;
mod split;

pub use alias::{import_entry, render_type_name, resolve_alias};
pub use encode::encode;
pub use format::{Format, FormatError, GoFormatter};
pub use generate::{Error, GenerateOptions, generate};
pub use namespace::{PackageRef, PackageSet};
pub use split::{DOCUMENT_DELIMITER, split_documents};
