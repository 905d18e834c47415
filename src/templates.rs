use crate::device::config::DeviceConfig;
use crate::errors::ConfigError;
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const LAB_ROUTER_TEMPLATE_YAML: &str = include_str!("assets/lab_router.yaml");
const MINIMAL_ROUTER_TEMPLATE_YAML: &str = include_str!("assets/minimal_router.yaml");
const BRANCH_ROUTER_TEMPLATE_YAML: &str = include_str!("assets/branch_router.yaml");

/// Returns a `HashMap` wherein template names are keys and the included yaml template (asset) data
/// string is the value.
pub fn get_templates() -> &'static HashMap<&'static str, &'static str> {
    static TEMPLATES: OnceCell<HashMap<&str, &str>> = OnceCell::new();

    TEMPLATES.get_or_init(|| {
        HashMap::from([
            ("lab_router", LAB_ROUTER_TEMPLATE_YAML),
            ("minimal_router", MINIMAL_ROUTER_TEMPLATE_YAML),
            ("branch_router", BRANCH_ROUTER_TEMPLATE_YAML),
        ])
    })
}

/// Returns the names of all embedded templates, sorted.
#[must_use]
pub fn template_names() -> Vec<&'static str> {
    let mut names = get_templates().keys().copied().collect::<Vec<_>>();
    names.sort_unstable();

    names
}

impl DeviceConfig {
    /// Returns a `DeviceConfig` deserialized (and validated) from yaml data.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Yaml` if the data does not deserialize, or `ConfigError::Invalid` if
    /// it does but fails validation.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;

        config.validate()?;

        Ok(config)
    }

    /// Returns a `DeviceConfig` loaded from the yaml file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file can not be read, otherwise the same errors as
    /// `from_yaml_str`.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        debug!("loading device config from '{}'", path.as_ref().display());

        let data = fs::read_to_string(path)?;

        Self::from_yaml_str(&data)
    }

    /// Returns the embedded template named `template_name`, for example "lab_router".
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownTemplate` if there is no such template.
    pub fn from_template(template_name: &str) -> Result<Self, ConfigError> {
        get_templates().get(template_name).map_or_else(
            || Err(ConfigError::UnknownTemplate(template_name.to_owned())),
            |template_str| {
                debug!("loading embedded template '{template_name}'");

                Self::from_yaml_str(template_str)
            },
        )
    }
}
