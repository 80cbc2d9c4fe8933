pub mod console;
pub mod tutor;

pub use console::Console;
pub use tutor::{is_exit_command, TutorSession, EXIT_COMMANDS};
