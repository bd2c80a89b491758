mod application;
mod assignment;
pub mod data;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use assignment::{Assignment, AssignmentError};
pub use runtime_config::RuntimeConfig;
