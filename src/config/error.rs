/// Errors raised while loading or validating [`super::Settings`].
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read config: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid config: {0}")]
    Invalid(String),
}
