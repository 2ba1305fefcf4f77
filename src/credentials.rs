//! API token resolution.
//!
//! The token is looked up through an ordered list of providers; the first one
//! that yields a non-empty token wins. Without a token, lookups are anonymous.

use std::path::PathBuf;

use ::config::{Config as Settings, File, FileFormat};
use log::debug;

use crate::config::{TOKEN_CONFIG_FILE, TOKEN_CONFIG_KEY, TOKEN_CONFIG_SECTION, TOKEN_ENV_VAR};

/// A source of API tokens.
pub trait TokenProvider {
    /// Short description used in log messages.
    fn name(&self) -> String;

    /// The token, if this source has one.
    fn token(&self) -> Option<String>;
}

/// Token given explicitly (the `--token` flag).
#[derive(Debug, Clone)]
pub struct ExplicitToken(pub Option<String>);

impl TokenProvider for ExplicitToken {
    fn name(&self) -> String {
        "--token".to_string()
    }

    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Token read from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    /// Reads the token from `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(TOKEN_ENV_VAR)
    }
}

impl TokenProvider for EnvToken {
    fn name(&self) -> String {
        format!("${}", self.var)
    }

    fn token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Token read from the `DEFAULT` section of an INI file.
#[derive(Debug, Clone)]
pub struct ConfigFileToken {
    path: Option<PathBuf>,
}

impl ConfigFileToken {
    /// Reads the token from the INI file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `~/.ipinfo.cfg`, or nothing if the home directory is unknown.
    pub fn in_home_dir() -> Self {
        Self {
            path: dirs_next::home_dir().map(|home| home.join(TOKEN_CONFIG_FILE)),
        }
    }
}

impl TokenProvider for ConfigFileToken {
    fn name(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => TOKEN_CONFIG_FILE.to_string(),
        }
    }

    fn token(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        if !path.is_file() {
            return None;
        }
        let settings = Settings::builder()
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Ini).required(false))
            .build();
        let settings = match settings {
            Ok(settings) => settings,
            Err(e) => {
                debug!("Ignoring unreadable token file {}: {}", path.display(), e);
                return None;
            }
        };

        // Some `config` releases lowercase section names on load.
        [
            format!("{TOKEN_CONFIG_SECTION}.{TOKEN_CONFIG_KEY}"),
            format!("{}.{TOKEN_CONFIG_KEY}", TOKEN_CONFIG_SECTION.to_lowercase()),
        ]
        .iter()
        .find_map(|key| settings.get_string(key).ok())
    }
}

/// Providers in priority order: explicit flag, environment, home-directory file.
pub fn default_providers(explicit: Option<String>) -> Vec<Box<dyn TokenProvider>> {
    vec![
        Box::new(ExplicitToken(explicit)),
        Box::new(EnvToken::default()),
        Box::new(ConfigFileToken::in_home_dir()),
    ]
}

/// Returns the first non-empty token, or `None` for anonymous lookups.
pub fn resolve_token(providers: &[Box<dyn TokenProvider>]) -> Option<String> {
    providers.iter().find_map(|provider| {
        let token = provider.token().filter(|token| !token.is_empty())?;
        debug!("Using API token from {}", provider.name());
        Some(token)
    })
}
