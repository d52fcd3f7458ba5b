use std::{collections::HashMap, fs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub routes: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".into(),
            routes: "classic".into(),
        }
    }
}

pub fn load_settings(path: &str) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("server_url") {
                settings.server_url = v.clone();
            }
            if let Some(v) = file_cfg.get("routes") {
                settings.routes = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("CONSOLE_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Ok(v) = std::env::var("CONSOLE_ROUTES") {
        settings.routes = v;
    }
    if let Ok(v) = std::env::var("APP__ROUTES") {
        settings.routes = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn file_then_env_override_defaults() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();

        let missing = env::temp_dir().join(format!("console_missing_{suffix}.toml"));
        let defaults = load_settings(missing.to_str().expect("path"));
        assert_eq!(defaults, Settings::default());

        let config_path = env::temp_dir().join(format!("console_test_{suffix}.toml"));
        fs::write(
            &config_path,
            "server_url = \"http://10.0.0.5:9090\"\nroutes = \"rest\"\n",
        )
        .expect("write config");

        let from_file = load_settings(config_path.to_str().expect("path"));
        assert_eq!(from_file.server_url, "http://10.0.0.5:9090");
        assert_eq!(from_file.routes, "rest");

        env::set_var("CONSOLE_SERVER_URL", "http://127.0.0.1:7070");
        env::set_var("APP__ROUTES", "classic");
        let from_env = load_settings(config_path.to_str().expect("path"));
        env::remove_var("CONSOLE_SERVER_URL");
        env::remove_var("APP__ROUTES");

        assert_eq!(from_env.server_url, "http://127.0.0.1:7070");
        assert_eq!(from_env.routes, "classic");

        fs::remove_file(config_path).expect("cleanup");
    }
}
