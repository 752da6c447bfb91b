//! Window settings: defaults, optional `student_roster.toml`, then `ROSTER__*`
//! environment overrides. None of this touches roster data.

use std::{fs, io, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "student_roster.toml";

const MIN_WINDOW_WIDTH: f32 = 480.0;
const MIN_WINDOW_HEIGHT: f32 = 360.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Student Management App".into(),
            window_width: 700.0,
            window_height: 500.0,
        }
    }
}

impl Settings {
    pub fn inner_size(&self) -> [f32; 2] {
        [self.window_width, self.window_height]
    }

    pub fn min_inner_size() -> [f32; 2] {
        [MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]
    }

    fn clamped(mut self) -> Self {
        let defaults = Settings::default();
        if !self.window_width.is_finite() {
            tracing::warn!(value = self.window_width, "window_width is not a finite number");
            self.window_width = defaults.window_width;
        }
        if !self.window_height.is_finite() {
            tracing::warn!(value = self.window_height, "window_height is not a finite number");
            self.window_height = defaults.window_height;
        }
        self.window_width = self.window_width.max(MIN_WINDOW_WIDTH);
        self.window_height = self.window_height.max(MIN_WINDOW_HEIGHT);
        if self.window_title.trim().is_empty() {
            self.window_title = defaults.window_title;
        }
        self
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

fn load_settings_from(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = match read_settings_file(path) {
        Ok(Some(settings)) => settings,
        Ok(None) => Settings::default(),
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "ignoring settings file");
            Settings::default()
        }
    };
    apply_env_overrides(&mut settings, lookup);
    settings.clamped()
}

fn read_settings_file(path: &Path) -> anyhow::Result<Option<Settings>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let settings = toml::from_str::<Settings>(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Some(settings))
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ROSTER__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = lookup("ROSTER__WINDOW_WIDTH") {
        match parse_dimension(&v) {
            Some(width) => settings.window_width = width,
            None => tracing::warn!(value = %v, "ROSTER__WINDOW_WIDTH is not a number"),
        }
    }
    if let Some(v) = lookup("ROSTER__WINDOW_HEIGHT") {
        match parse_dimension(&v) {
            Some(height) => settings.window_height = height,
            None => tracing::warn!(value = %v, "ROSTER__WINDOW_HEIGHT is not a number"),
        }
    }
}

fn parse_dimension(raw: &str) -> Option<f32> {
    raw.parse::<f32>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = load_settings_from(&dir.path().join(SETTINGS_FILE), no_env);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_values_fill_only_what_they_name() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "window_width = 900\n").expect("write settings");

        let settings = load_settings_from(&path, no_env);
        assert_eq!(settings.window_width, 900.0);
        assert_eq!(settings.window_height, 500.0);
        assert_eq!(settings.window_title, "Student Management App");
    }

    #[test]
    fn env_overrides_file_and_sizes_are_clamped() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "window_title = \"Roster\"\nwindow_height = 800.0\n")
            .expect("write settings");

        let env: HashMap<&str, &str> = [
            ("ROSTER__WINDOW_TITLE", "Class of 2026"),
            ("ROSTER__WINDOW_WIDTH", "100"),
            ("ROSTER__WINDOW_HEIGHT", "tall"),
        ]
        .into_iter()
        .collect();
        let settings = load_settings_from(&path, |name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.window_title, "Class of 2026");
        assert_eq!(settings.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(settings.window_height, 800.0);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "window_width = [").expect("write settings");

        assert!(read_settings_file(&path).is_err());
        assert_eq!(load_settings_from(&path, no_env), Settings::default());
    }

    #[test]
    fn non_finite_sizes_are_ignored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "window_height = inf\n").expect("write settings");

        let env: HashMap<&str, &str> = [("ROSTER__WINDOW_WIDTH", "inf")].into_iter().collect();
        let settings = load_settings_from(&path, |name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.window_width, 700.0);
        assert_eq!(settings.window_height, 500.0);
        assert_eq!(parse_dimension("NaN"), None);
        assert_eq!(parse_dimension("-inf"), None);
        assert_eq!(parse_dimension("640"), Some(640.0));
    }
}
