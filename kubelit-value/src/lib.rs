//! Typed value model and YAML decoding for kubelit.
//!
//! This crate provides the runtime representation of decoded Kubernetes
//! objects and everything needed to produce one from a YAML document:
//!
//! - [`TypedValue`] - The tagged value graph the encoder walks
//! - [`StructSchema`] / [`TypeRef`] - Structural type descriptions
//! - [`TypeRegistry`] - Kind-to-schema lookup
//! - [`scheme`] - Built-in registrations for common Kubernetes kinds
//! - [`Decode`] - The decoder boundary, with [`SchemeDecoder`] behind it

mod decode;
mod error;
mod registry;
mod schema;
pub mod scheme;
mod value;

pub use decode::{Decode, Decoded, SchemeDecoder};
pub use error::{Error, Result};
pub use registry::TypeRegistry;
pub use schema::{FieldSchema, GroupVersionKind, StructSchema, TypeRef};
pub use value::{DeclaredType, StructField, TypedValue, ValueKind};
