pub mod args;
pub mod commands;
pub mod prompt;

pub use args::{Args, ReceiptFormat};
pub use commands::{CliApp, ShopApp};
pub use prompt::{LinePrompter, Prompter, TerminalPrompter};
