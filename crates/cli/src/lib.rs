pub mod cli;
pub mod error;
pub mod limit;
pub mod target;
pub mod validate;

pub use cli::{Cli, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use limit::SizeLimit;
pub use target::Target;
pub use validate::{SizeReport, WheelCheck, check_wheel, validate};
