pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod result;
pub mod selection;
pub mod traits;

pub use config::AppConfig;
pub use error::TaskdashError;
pub use input::InputState;
pub use logging::{LogEntry, LogLevel, Loggable};
pub use result::TaskdashResult;
pub use selection::SelectionState;
pub use traits::Editable;
