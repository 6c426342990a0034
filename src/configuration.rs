use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub vault: VaultSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Endpoint and service credential for the scrape-record store. Both
/// are expected from the environment in deployment
/// (APP_VAULT__API_URL, APP_VAULT__SERVICE_KEY).
#[derive(serde::Deserialize, Clone)]
pub struct VaultSettings {
    pub api_url: String,
    pub service_key: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_file = base_path.join("configuration.yaml");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_file))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
