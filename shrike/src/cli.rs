use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Set the path to the configuration file (e.g., "shrike.yaml").
    #[arg(short, long, value_name = "FILE", env = "SHRIKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Network interface to attach the filter to.
    #[arg(short, long, value_name = "IFACE", env = "SHRIKE_INTERFACE")]
    pub interface: Option<String>,

    /// Set the application's log level (e.g., "debug", "warn").
    #[arg(short, long, value_name = "LEVEL", env = "SHRIKE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf};

    use clap::Parser as _;
    use serial_test::serial;

    use super::Cli;

    fn clear_env_vars() {
        // This helper ensures a clean slate before each test.
        env::remove_var("SHRIKE_CONFIG");
        env::remove_var("SHRIKE_INTERFACE");
        env::remove_var("SHRIKE_LOG_LEVEL");
    }

    #[test]
    #[serial]
    fn parses_long_flags() {
        clear_env_vars();
        let cli = Cli::parse_from([
            "shrike",
            "--config",
            "/etc/shrike/shrike.yaml",
            "--interface",
            "eth0",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/shrike/shrike.yaml")));
        assert_eq!(cli.interface.as_deref(), Some("eth0"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    #[serial]
    fn defaults_to_nothing_set() {
        clear_env_vars();
        let cli = Cli::parse_from(["shrike"]);
        assert_eq!(cli.config, None);
        assert_eq!(cli.interface, None);
        assert_eq!(cli.log_level, None);
    }

    #[test]
    #[serial]
    fn reads_env_fallbacks() {
        clear_env_vars();
        env::set_var("SHRIKE_INTERFACE", "wlan0");
        env::set_var("SHRIKE_LOG_LEVEL", "trace");
        let cli = Cli::parse_from(["shrike"]);
        assert_eq!(cli.interface.as_deref(), Some("wlan0"));
        assert_eq!(cli.log_level.as_deref(), Some("trace"));
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn flags_win_over_env() {
        clear_env_vars();
        env::set_var("SHRIKE_INTERFACE", "wlan0");
        let cli = Cli::parse_from(["shrike", "--interface", "eth1"]);
        assert_eq!(cli.interface.as_deref(), Some("eth1"));
        clear_env_vars();
    }
}
