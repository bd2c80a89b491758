use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Mirror a YAML document as a dirty-tracking proxy tree, assign values
/// through it and report which nodes changed.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// YAML document to mirror. The built-in demo is used when omitted
    pub document: Option<PathBuf>,

    /// Assign a value through the proxy, e.g. `x.y.z=8`. Values are parsed as YAML.
    /// Dots inside a key are escaped with a backslash, e.g. `app\.name=demo`
    #[clap(long = "set", short = 's', value_name = "PATH=VALUE")]
    pub assignments: Vec<String>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}
