use mediaslider::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(e) = s.validate() {
                eprintln!("mediaslider: invalid config, using defaults: {e}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the demo from starting.
            eprintln!("mediaslider: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
