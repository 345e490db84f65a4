//! Command-line interface modules.

pub mod actions;
pub mod common;
pub mod export;
pub mod import;
pub mod presets;
pub mod profiles;
pub mod resolve;
pub mod validate;

// Re-export types used by main.rs and tests
pub use actions::ActionsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use export::ExportArgs;
pub use import::ImportArgs;
pub use presets::PresetsArgs;
pub use profiles::ProfilesArgs;
pub use resolve::ResolveArgs;
pub use validate::ValidateArgs;
