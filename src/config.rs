use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: String,
    /// Remote row store; `None` keeps everything in process.
    pub supabase: Option<SupabaseConfig>,
    /// JSON file replacing the built-in exercise catalog.
    pub catalog_path: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT").ok_or_else(|| anyhow::anyhow!("PORT is not set"))?;

        let supabase = match lookup("SUPABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => {
                let api_key = lookup("SUPABASE_API_KEY").ok_or_else(|| {
                    anyhow::anyhow!("SUPABASE_API_KEY is required when SUPABASE_URL is set")
                })?;
                Some(SupabaseConfig { url, api_key })
            }
            None => None,
        };

        let catalog_path = lookup("CATALOG_PATH").filter(|v| !v.trim().is_empty());

        Ok(Self {
            port,
            supabase,
            catalog_path,
        })
    }
}
