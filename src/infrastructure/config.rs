use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub analytics: AnalyticsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    pub rest_url: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsSettings {
    #[serde(default = "default_storage_capacity_mb")]
    pub storage_capacity_mb: f64,
    #[serde(default = "default_trailing_months")]
    pub trailing_months: u32,
}

fn default_storage_capacity_mb() -> f64 {
    1000.0
}

fn default_trailing_months() -> u32 {
    6
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
