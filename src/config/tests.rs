use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::error::SettingsError;
use crate::style::{Color, SliderStyle};
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, body).unwrap();
    cfg_path
}

#[test]
fn resolve_config_path_prefers_explicit_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MEDIASLIDER_CONFIG_PATH", "/tmp/mediaslider-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/mediaslider-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("mediaslider")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("mediaslider")
            .join("config.toml")
    );
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "MEDIASLIDER_CONFIG_PATH",
        dir.path().join("absent.toml").to_str().unwrap(),
    );
    let _g2 = EnvGuard::remove("MEDIASLIDER__CONTROLS__DRAG_CAPTURE_DELTA");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.drag_capture_delta, None);
    assert_eq!(s.controls.drag_capture_delta_or(22.0), 22.0);
    assert_eq!(s.style, SliderStyle::default());
    assert_eq!(s.demo.tick_ms, 250);
    assert!(s.logging.file.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_style_and_controls_from_file() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(
        &dir,
        r##"
[style]
elapsed_region_color = "#336699"
knob_color = "white"
remaining_text_color = "light-gray"

[style.label_font]
family = "Menlo"
size = 14.0
bold = true

[controls]
drag_capture_delta = 30.0

[demo]
total_seconds = 3725.0
autoplay = false

[logging]
level = "debug"
file = "/tmp/mediaslider.log"
"##,
    );

    let _g1 = EnvGuard::set("MEDIASLIDER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MEDIASLIDER__CONTROLS__DRAG_CAPTURE_DELTA");

    let s = Settings::load().unwrap();
    assert_eq!(s.style.elapsed_region_color, Color::rgb(0x33, 0x66, 0x99));
    assert_eq!(s.style.knob_color, Color::WHITE);
    assert_eq!(s.style.remaining_text_color, Color::LIGHT_GRAY);
    // Unset options keep their defaults.
    assert_eq!(s.style.elapsed_text_color, Color::WHITE);
    assert_eq!(s.style.label_font.family.as_deref(), Some("Menlo"));
    assert_eq!(s.style.label_font.size, 14.0);
    assert!(s.style.label_font.bold);
    assert_eq!(s.controls.drag_capture_delta, Some(30.0));
    assert_eq!(s.demo.total_seconds, 3725.0);
    assert!(!s.demo.autoplay);
    assert_eq!(s.logging.level, "debug");
    assert_eq!(
        s.logging.file,
        Some(std::path::PathBuf::from("/tmp/mediaslider.log"))
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(
        &dir,
        r#"
[controls]
drag_capture_delta = 30.0
"#,
    );

    let _g1 = EnvGuard::set("MEDIASLIDER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MEDIASLIDER__CONTROLS__DRAG_CAPTURE_DELTA", "12.5");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.drag_capture_delta, Some(12.5));
}

#[test]
fn unknown_color_fails_to_load() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(
        &dir,
        r#"
[style]
knob_color = "chartreuse-ish"
"#,
    );

    let _g1 = EnvGuard::set("MEDIASLIDER_CONFIG_PATH", cfg_path.to_str().unwrap());
    assert!(matches!(Settings::load(), Err(SettingsError::Load(_))));
}

#[test]
fn settings_parse_directly_from_toml() {
    let s: Settings = toml::from_str(
        r#"
[style]
top_separator_color = "red"

[demo]
tick_ms = 100
"#,
    )
    .unwrap();
    assert_eq!(s.style.top_separator_color, Color::RED);
    assert_eq!(s.demo.tick_ms, 100);
    assert_eq!(s.demo.label_width, DemoSettings::default().label_width);
}

#[test]
fn validate_rejects_bad_values() {
    let mut s = Settings::default();
    s.controls.drag_capture_delta = Some(-1.0);
    assert!(matches!(
        s.validate(),
        Err(SettingsError::Invalid {
            key: "controls.drag_capture_delta",
            ..
        })
    ));

    let mut s = Settings::default();
    s.demo.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.demo.total_seconds = f64::INFINITY;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.style.label_font.size = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.style.label_font.size = f32::NAN;
    assert!(matches!(
        s.validate(),
        Err(SettingsError::Invalid {
            key: "style.label_font.size",
            ..
        })
    ));

    let mut s = Settings::default();
    s.style.label_font.size = f32::INFINITY;
    assert!(s.validate().is_err());
}
