//! The recursive literal encoder.
//!
//! Walks a [`TypedValue`] and appends a Go construction expression for it to
//! the output buffer, recording every package the expression depends on.
//! Output is emitted raw; the formatter pass is responsible for indentation
//! and final layout.

use kubelit_value::{TypedValue, ValueKind};

use crate::{alias::render_type_name, namespace::PackageSet};

/// Append the Go literal expression for `value` to `out`.
///
/// Type names of sequences, mappings, and structs are rewritten through the
/// package alias and their packages recorded in `packages`. Zero-valued
/// struct fields and unexported fields are elided.
pub fn encode(value: &TypedValue, out: &mut String, packages: &mut PackageSet) {
    match &value.kind {
        ValueKind::Invalid => {}

        // Nil pointers only occur as zero values; nothing to reconstruct.
        ValueKind::Pointer(None) => {}

        ValueKind::Pointer(Some(pointee)) => {
            out.push('&');
            if matches!(pointee.kind, ValueKind::Struct(_)) {
                encode(pointee, out, packages);
                return;
            }
            // Go has no literal syntax for the address of a scalar, so
            // synthesize one: &[]T{v}[0].
            out.push_str("[]");
            out.push_str(&pointee.declared.name);
            out.push('{');
            encode(pointee, out, packages);
            out.push('}');
            out.push_str("[0]");
        }

        ValueKind::String(s) => out.push_str(&quote(s)),

        ValueKind::Bool(b) => out.push_str(if *b { "true" } else { "false" }),

        ValueKind::Int(n) => out.push_str(&n.to_string()),

        ValueKind::Uint(n) => out.push_str(&n.to_string()),

        ValueKind::Float32(f) => out.push_str(&f.to_string()),

        ValueKind::Float64(f) => out.push_str(&f.to_string()),

        ValueKind::Sequence(items) => {
            packages.insert(&value.declared.namespace);
            out.push_str(&render_type_name(
                &value.declared.name,
                &value.declared.namespace,
            ));
            out.push_str("{\n");
            for item in items {
                encode(item, out, packages);
                out.push_str(",\n");
            }
            out.push_str("\n}");
        }

        ValueKind::Mapping(pairs) => {
            packages.insert(&value.declared.namespace);
            out.push_str(&render_type_name(
                &value.declared.name,
                &value.declared.namespace,
            ));
            out.push_str("{\n");
            for (key, map_value) in pairs {
                encode(key, out, packages);
                out.push(':');
                encode(map_value, out, packages);
                out.push_str(",\n");
            }
            out.push_str("\n}");
        }

        ValueKind::Struct(fields) => {
            packages.insert(&value.declared.namespace);
            out.push_str(&render_type_name(
                &value.declared.name,
                &value.declared.namespace,
            ));
            out.push_str("{\n");
            for field in fields {
                if !field.exported {
                    continue;
                }
                if field.value.is_zero() {
                    continue;
                }
                out.push_str(&field.name);
                out.push(':');
                encode(&field.value, out, packages);
                out.push_str(",\n");
            }
            out.push_str("\n}");
        }
    }
}

/// Quote a string as a Go string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
