mod args;
mod config;
mod run;
mod terminal;

pub use args::Cli;
pub use config::{ApiConfig, Config, I18nConfig};
pub use run::{prompt_fields, run_screen, ScreenExit};
pub use terminal::{render_screen, TerminalNavigator, TerminalNotifier};
