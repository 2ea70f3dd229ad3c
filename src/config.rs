use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Boot with the demo dataset (`SEED_DEMO_DATA`, default true).
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(raw) => parse_flag(&raw)
                .ok_or_else(|| anyhow::anyhow!("invalid SEED_DEMO_DATA value: {raw}"))?,
            Err(_) => true,
        };
        Ok(Self { seed_demo_data })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
