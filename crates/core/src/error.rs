use std::path::PathBuf;
use thiserror::Error;

/// 构建过程中的所有致命错误
///
/// 任何一个错误都会中止整次构建，不产生部分输出。
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed token document {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for token `{token}` in {}: {message}", path.display())]
    InvalidValue {
        token: String,
        path: PathBuf,
        message: String,
    },

    #[error("invalid glob pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("unresolved reference `{{{reference}}}` in token `{token}` ({})", path.display())]
    UnresolvedReference {
        reference: String,
        token: String,
        path: PathBuf,
    },

    #[error("circular reference: {}", chain.join(" -> "))]
    CircularReference { chain: Vec<String> },

    #[error("root theme: {0}")]
    RootTheme(String),

    #[error(
        "duplicate output name `{name}` in {category}: {} and {}",
        first.display(),
        second.display()
    )]
    DuplicateOutputName {
        category: String,
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TokenError>;
