use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for kubelit-value operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse YAML document")]
    #[diagnostic(code(kubelit::yaml_parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document is missing '{field}'")]
    #[diagnostic(
        code(kubelit::missing_field),
        help("every document must declare 'apiVersion' and 'kind'")
    )]
    MissingField { field: &'static str },

    #[error("no type registered for {gvk}")]
    #[diagnostic(
        code(kubelit::unknown_kind),
        help("registered kinds: {registered}")
    )]
    UnknownKind { gvk: String, registered: String },

    #[error("field '{path}' expects {expected}, got {found}")]
    #[diagnostic(code(kubelit::type_mismatch))]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    #[error("schema references unregistered type '{name}'")]
    #[diagnostic(
        code(kubelit::unknown_type),
        help("register the type before any schema that references it")
    )]
    UnknownType { name: String },
}

impl Error {
    /// Create a parse error from a serde_yaml error, pointing at its location.
    pub fn parse(source: serde_yaml::Error, document: &str) -> Box<Self> {
        let span = source
            .location()
            .map(|loc| SourceSpan::from((loc.index(), 1)));
        Box::new(Error::Parse {
            src: NamedSource::new("document", document.to_string()),
            span,
            source,
        })
    }

    /// Create a type mismatch error for a field path.
    pub fn mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        })
    }
}
