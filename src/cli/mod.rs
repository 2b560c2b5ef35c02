pub mod codes;

pub use codes::{handle_codes_command, CodesCmd, CommandStatus};
