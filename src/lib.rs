// BMI Calculator - Core Library
// Exposes all modules for use in the CLI and tests

pub mod bmi;
pub mod category;
pub mod cli;
pub mod error;
pub mod input;
pub mod messages;
pub mod presenter;
pub mod session;

// Re-export commonly used types
pub use bmi::{body_mass_index, Assessment};
pub use category::{Advice, Category};
pub use cli::{Cli, Settings};
pub use error::{InputError, Rejection};
pub use input::{parse_number, read_number, RetryPolicy};
pub use messages::{Locale, Messages};
pub use presenter::{JsonPresenter, OutputFormat, Presenter, TextPresenter};
pub use session::{wants_another, Session, SessionState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
