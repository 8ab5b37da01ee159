use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::PreReleasePolicy;
use crate::error::{ApkNamerError, Result};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "apknamer.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".apknamer.toml";

/// Represents the complete configuration for apk-namer.
///
/// Contains the product lines that can be named, keyed by a short product id,
/// and behavior options for the rename hook.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub products: BTreeMap<String, ProductConfig>,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// One product line and the way its artifacts are named.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProductConfig {
    pub app_name: String,

    #[serde(default)]
    pub pre_release: PreReleasePolicy,
}

impl ProductConfig {
    pub fn new(app_name: impl Into<String>, pre_release: PreReleasePolicy) -> Self {
        ProductConfig {
            app_name: app_name.into(),
            pre_release,
        }
    }
}

/// Configuration for behavior customization.
///
/// Controls what the rename hook is allowed to do on disk.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        let mut products = BTreeMap::new();
        products.insert(
            "suite".to_string(),
            ProductConfig::new("CoffeaSuite", PreReleasePolicy::ZeroMajor),
        );
        products.insert(
            "pos".to_string(),
            ProductConfig::new("CoffeaPOS", PreReleasePolicy::Never),
        );

        Config {
            products,
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Look up a product by id.
    ///
    /// With no id, the only configured product is used.
    pub fn resolve_product(&self, product: Option<&str>) -> Result<(&str, &ProductConfig)> {
        match product {
            Some(id) => self
                .products
                .get_key_value(id)
                .map(|(k, v)| (k.as_str(), v))
                .ok_or_else(|| {
                    ApkNamerError::config(format!(
                        "Product '{}' is not configured (available: {})",
                        id,
                        self.product_ids().join(", ")
                    ))
                }),
            None => {
                let mut iter = self.products.iter();
                match (iter.next(), iter.next()) {
                    (Some((k, v)), None) => Ok((k.as_str(), v)),
                    (None, _) => Err(ApkNamerError::config("No products configured")),
                    (Some(_), Some(_)) => Err(ApkNamerError::config(format!(
                        "Several products configured, choose one with --product ({})",
                        self.product_ids().join(", ")
                    ))),
                }
            }
        }
    }

    /// Configured product ids in sorted order
    pub fn product_ids(&self) -> Vec<String> {
        self.products.keys().cloned().collect()
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `apknamer.toml` in current directory
/// 3. `.apknamer.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    let Some(path) = path else {
        debug!("no config file found, using built-in products");
        return Ok(Config::default());
    };

    debug!("loading config from {}", path.display());
    let config_str = fs::read_to_string(&path).map_err(|e| {
        ApkNamerError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_products() {
        let config = Config::default();
        assert_eq!(config.product_ids(), vec!["pos", "suite"]);
        assert_eq!(config.products["suite"].app_name, "CoffeaSuite");
        assert_eq!(
            config.products["suite"].pre_release,
            PreReleasePolicy::ZeroMajor
        );
        assert_eq!(config.products["pos"].pre_release, PreReleasePolicy::Never);
        assert!(!config.behavior.overwrite);
    }

    #[test]
    fn test_parse_policy_defaults_to_zero_major() {
        let config: Config = toml::from_str(
            r#"
[products.kiosk]
app_name = "CoffeaKiosk"
"#,
        )
        .unwrap();
        assert_eq!(
            config.products["kiosk"].pre_release,
            PreReleasePolicy::ZeroMajor
        );
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let result = toml::from_str::<Config>(
            r#"
[products.kiosk]
app_name = "CoffeaKiosk"
pre_release = "sometimes"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_explicit_product() {
        let config = Config::default();
        let (id, product) = config.resolve_product(Some("pos")).unwrap();
        assert_eq!(id, "pos");
        assert_eq!(product.app_name, "CoffeaPOS");
    }

    #[test]
    fn test_resolve_unknown_product() {
        let err = Config::default().resolve_product(Some("kiosk")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("kiosk"));
        assert!(msg.contains("pos, suite"));
    }

    #[test]
    fn test_resolve_requires_choice_with_several_products() {
        assert!(Config::default().resolve_product(None).is_err());
    }

    #[test]
    fn test_resolve_single_product_without_choice() {
        let mut config = Config::default();
        config.products.remove("pos");
        let (id, _) = config.resolve_product(None).unwrap();
        assert_eq!(id, "suite");
    }

    #[test]
    fn test_resolve_no_products() {
        let config = Config {
            products: BTreeMap::new(),
            behavior: BehaviorConfig::default(),
        };
        let err = config.resolve_product(None).unwrap_err();
        assert!(err.to_string().contains("No products configured"));
    }
}
