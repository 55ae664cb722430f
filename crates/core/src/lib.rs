pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod naming;
pub mod reference;
pub mod resolve;
pub mod set;
pub mod types;

// Re-export commonly used types
pub use config::{BuildConfig, FormattingMode, Patterns, TAILWIND_TYPES};
pub use document::{parse_document, TokenDocument};
pub use error::{Result, TokenError};
pub use format::{FormatterRegistry, ValueFormatter};
pub use naming::{create_naming_strategy, NameCase, NamingStrategy};
pub use resolve::{is_renderable, Resolver};
pub use set::{merge_sets, TokenSet};
pub use types::{Declaration, Token, TokenType, TokenValue};
