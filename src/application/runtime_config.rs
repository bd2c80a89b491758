use std::path::PathBuf;

use crate::application::data::ColorChoice;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// `None` selects the built-in demo document
    pub document: Option<PathBuf>,
    pub assignments: Vec<String>,
    pub color: ColorChoice,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            document: cli.document,
            assignments: cli.assignments,
            color: cli.color,
        }
    }
}
