pub mod emit;
pub mod ir;
pub mod tailwind;
pub mod typography;
pub mod variables;

// Re-export main functions
pub use emit::emit_css;
pub use ir::{create_class_rule, create_rule, create_stylesheet, Rule, Stylesheet};
pub use tailwind::{fragment_destination, tailwind_fragments, TailwindFragment};
pub use typography::typography_classes;
pub use variables::css_variables;
