use clap::ValueEnum;
use supports_color::Stream;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(&self) -> bool {
        match self {
            ColorChoice::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// Applies the choice to every `colored` string printed afterwards.
    pub fn apply(&self) {
        colored::control::set_override(self.enabled());
    }
}
