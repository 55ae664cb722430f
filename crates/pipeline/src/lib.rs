pub mod artifact;
pub mod build;
pub mod loader;
pub mod output;
pub mod plan;
pub mod project;

// Re-export main types
pub use artifact::{Artifact, Format};
pub use build::{build, build_documents, BuildOutput};
pub use loader::{discover, load_documents, Category, Discovery, Documents};
pub use output::{check_artifacts, write_artifacts, StaleArtifact, Staleness, WriteReport};
pub use plan::{find_root_theme, BuildTarget};
pub use project::{Project, CONFIG_FILE};
