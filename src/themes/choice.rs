use std::str::FromStr;

use dark_light::Mode;
use egui::{Context, Theme, ThemePreference};

use super::{clay_dark, clay_light};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`, expected one of: system, light, dark")]
pub struct UnknownTheme(pub String);

/// Which clay style a host installs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeChoice {
    #[default]
    System,
    Light,
    Dark,
}

impl FromStr for ThemeChoice {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" | "" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(s.to_owned())),
        }
    }
}

impl ThemeChoice {
    pub const ENV_VAR: &'static str = "CLAY_THEME";

    /// Read the choice from `CLAY_THEME`. Unset means `System`; garbage is
    /// logged and treated as `System`.
    pub fn from_env() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|err: UnknownTheme| {
                log::warn!("{}: {err}; falling back to system theme", Self::ENV_VAR);
                Self::System
            }),
            Err(_) => Self::System,
        }
    }

    pub fn preference(self) -> ThemePreference {
        match self {
            Self::Light => ThemePreference::Light,
            Self::Dark => ThemePreference::Dark,
            Self::System => match dark_light::detect() {
                Ok(Mode::Dark) => ThemePreference::Dark,
                Ok(Mode::Light) => ThemePreference::Light,
                Ok(Mode::Unspecified) | Err(_) => ThemePreference::Light,
            },
        }
    }

    /// Install both clay styles on `ctx` and select one of them.
    pub fn install(self, ctx: &Context) {
        ctx.set_style_of(Theme::Light, clay_light());
        ctx.set_style_of(Theme::Dark, clay_dark());
        let preference = self.preference();
        log::debug!("installing clay theme {self:?} as {preference:?}");
        ctx.set_theme(preference);
    }
}
