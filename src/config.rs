//! Generator settings.
//!
//! Read from `ARM_MIGRATE_*` environment variables (a `.env` file is loaded by
//! the binary first) with defaults for everything.

use crate::error::{Error, Result};
use std::path::PathBuf;

pub const ENV_BUILD_MODE: &str = "ARM_MIGRATE_BUILD_MODE";
pub const ENV_GATEWAY_SUFFIX: &str = "ARM_MIGRATE_GATEWAY_SUFFIX";
pub const ENV_PUBLIC_IP_SUFFIX: &str = "ARM_MIGRATE_PUBLIC_IP_SUFFIX";
pub const ENV_OUTPUT_DIR: &str = "ARM_MIGRATE_OUTPUT_DIR";
pub const ENV_INSTALL_PATH: &str = "ARM_MIGRATE_INSTALL_PATH";
pub const ENV_INSTRUCTIONS_TEMPLATE: &str = "ARM_MIGRATE_INSTRUCTIONS_TEMPLATE";

/// How target disks come into existence. One value for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Attach vhd blobs copied from the source disks.
    #[default]
    Attach,
    /// Provision fresh machines from platform images with empty data disks.
    Empty,
}

impl std::str::FromStr for BuildMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<BuildMode> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attach" => Ok(BuildMode::Attach),
            "empty" => Ok(BuildMode::Empty),
            _ => Err(Error::Setting {
                name: ENV_BUILD_MODE.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub build_mode: BuildMode,
    /// Appended to a virtual network name to name its gateway.
    pub gateway_suffix: String,
    /// Appended to a gateway name to name its public IP.
    pub public_ip_suffix: String,
    pub local_gateway_suffix: String,
    pub connection_suffix: String,
    pub output_directory: PathBuf,
    /// Where the tool's helper scripts live, quoted in the instructions.
    pub install_path: PathBuf,
    /// Instructions template to use instead of the built-in one.
    pub instructions_template: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            build_mode: BuildMode::Attach,
            gateway_suffix: "-gw".to_string(),
            public_ip_suffix: "-pip".to_string(),
            local_gateway_suffix: "-LocalGateway".to_string(),
            connection_suffix: "-connection".to_string(),
            output_directory: PathBuf::from("."),
            install_path: default_install_path(),
            instructions_template: None,
        }
    }
}

fn default_install_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Settings {
    /// Settings from the process environment.
    pub fn from_env() -> Result<Settings> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(mode) = lookup(ENV_BUILD_MODE) {
            settings.build_mode = mode.parse()?;
        }
        if let Some(suffix) = lookup(ENV_GATEWAY_SUFFIX) {
            settings.gateway_suffix = suffix;
        }
        if let Some(suffix) = lookup(ENV_PUBLIC_IP_SUFFIX) {
            settings.public_ip_suffix = suffix;
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            settings.output_directory = PathBuf::from(dir);
        }
        if let Some(path) = lookup(ENV_INSTALL_PATH) {
            settings.install_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_INSTRUCTIONS_TEMPLATE) {
            settings.instructions_template = Some(PathBuf::from(path));
        }
        log::debug!("Settings: {:?}", settings);
        Ok(settings)
    }

    pub fn gateway_name(&self, virtual_network: &str) -> String {
        format!("{virtual_network}{}", self.gateway_suffix)
    }

    pub fn gateway_public_ip_name(&self, virtual_network: &str) -> String {
        format!(
            "{virtual_network}{}{}",
            self.gateway_suffix, self.public_ip_suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None).expect("Error building settings");
        assert_eq!(settings.build_mode, BuildMode::Attach);
        assert_eq!(settings.gateway_name("vnet01"), "vnet01-gw");
        assert_eq!(settings.gateway_public_ip_name("vnet01"), "vnet01-gw-pip");
    }

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_BUILD_MODE, "Empty"),
            (ENV_GATEWAY_SUFFIX, "-vgw"),
            (ENV_OUTPUT_DIR, "/tmp/out"),
        ]);
        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()))
            .expect("Error building settings");
        assert_eq!(settings.build_mode, BuildMode::Empty);
        assert_eq!(settings.gateway_public_ip_name("net"), "net-vgw-pip");
        assert_eq!(settings.output_directory, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_invalid_build_mode() {
        let err = Settings::from_lookup(|k| (k == ENV_BUILD_MODE).then(|| "clone".to_string()))
            .expect_err("Expected invalid setting");
        assert_eq!(err.to_string(), "invalid setting ARM_MIGRATE_BUILD_MODE=clone");
    }
}
