pub mod action;
pub mod config;
pub mod error;
pub mod options;
pub mod tool;

pub use action::{ActionContext, run};
pub use error::GcovrError;
pub use options::{GcovrParams, OptionValue};
