//! External processes: the editor and the platform file manager.

pub mod explorer;
pub mod process;

pub use explorer::{file_manager, show_in_explorer};
pub use process::{build_command, launch, LaunchMode, LaunchOutcome, PROJECT_PATH_FLAG};
