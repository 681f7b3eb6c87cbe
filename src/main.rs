use std::path::PathBuf;

use serde::Deserialize;
use service::{compiler::Compiler, Service};

#[macro_use]
extern crate log;

mod service;

/// Environment configuration. Every field has a default, so any subset of
/// variables may be set; the defaults reproduce the fixed paths and port the
/// service has always used.
#[derive(Deserialize, Debug)]
struct Config {
    #[serde(default = "default_address")]
    address: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_compiler_path")]
    compiler_path: PathBuf,
    #[serde(default = "default_input_path")]
    input_path: PathBuf,
    #[serde(default)]
    unique_inputs: bool,
}

fn default_address() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_compiler_path() -> PathBuf {
    "./toy_compiler".into()
}

fn default_input_path() -> PathBuf {
    "input.txt".into()
}

impl Default for Config {
    fn default() -> Config {
        Config {
            address: default_address(),
            port: default_port(),
            compiler_path: default_compiler_path(),
            input_path: default_input_path(),
            unique_inputs: false,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::env::set_var("RUST_LOG", "playground");
    env_logger::init();

    // Env config
    let config = match envy::from_env::<Config>() {
        Ok(config) => config,
        Err(e) => {
            warn!("Unreadable environment configuration ({}), using defaults", e);
            Config::default()
        }
    };
    trace!("Resolved configuration: {:?}", &config);

    // The compiler binary itself is an opaque collaborator; all we hold is
    // where it lives and where its input goes.
    let compiler = Compiler::new(config.compiler_path, config.input_path, config.unique_inputs);

    // Run until finished
    Service::new(config.address, config.port, compiler).run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        envy::from_iter(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .expect("configuration should deserialize")
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]);
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.compiler_path, PathBuf::from("./toy_compiler"));
        assert_eq!(config.input_path, PathBuf::from("input.txt"));
        assert!(!config.unique_inputs);
    }

    #[test]
    fn port_variable_overrides_default() {
        let config = config_from(&[("PORT", "8080")]);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn paths_and_unique_mode_are_configurable() {
        let config = config_from(&[
            ("COMPILER_PATH", "/opt/toyc/bin/toyc"),
            ("INPUT_PATH", "/tmp/submissions/input.txt"),
            ("UNIQUE_INPUTS", "true"),
        ]);
        assert_eq!(config.compiler_path, PathBuf::from("/opt/toyc/bin/toyc"));
        assert_eq!(config.input_path, PathBuf::from("/tmp/submissions/input.txt"));
        assert!(config.unique_inputs);
    }
}
