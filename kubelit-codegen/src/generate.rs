//! The generation driver: one full input-to-formatted-source run.

use kubelit_value::Decode;
use miette::Diagnostic;
use thiserror::Error;

use crate::{
    encode::encode,
    format::{Format, FormatError},
    namespace::PackageSet,
    split::split_documents,
};

/// Fatal errors aborting a generation run.
///
/// Both variants abort at first occurrence; literals already encoded are
/// discarded, never flushed.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] Box<kubelit_value::Error>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatError),
}

/// Options for one generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Wrap the emitted literals into a full compilable file with a package
    /// header and import list, and bind each literal to a variable. When off
    /// the output is a bare fragment.
    pub verbose: bool,
}

/// Run the full pipeline: split, decode, encode, assemble, format.
///
/// The first decode failure aborts the whole run. In verbose mode each
/// document's literal is bound to a variable named from its kind and
/// zero-based document index, so same-kind documents get unique names.
pub fn generate(
    input: &str,
    decoder: &impl Decode,
    formatter: &impl Format,
    options: GenerateOptions,
) -> Result<String, Error> {
    let mut buffer = String::new();
    let mut packages = PackageSet::new();

    for (index, document) in split_documents(input).into_iter().enumerate() {
        let decoded = decoder.decode(document)?;
        tracing::info!(kind = %decoded.kind, index, "generating literal");

        if options.verbose {
            buffer.push_str(&format!("var {}DocumentIndex{} = ", decoded.kind, index));
        }
        encode(&decoded.value, &mut buffer, &mut packages);
        buffer.push('\n');
    }

    let assembled = if options.verbose {
        let imports = packages
            .iter()
            .map(|package| package.import_entry())
            .collect::<Vec<_>>()
            .join("\n");
        format!("package main\n\nimport (\n{imports}\n)\n\n{buffer}")
    } else {
        buffer
    };

    Ok(formatter.format(&assembled)?)
}
