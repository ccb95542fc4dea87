use std::{fmt, str::FromStr};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Missing API key for {provider_name}: {env_var} environment variable is not set")]
    MissingApiKey {
        provider_name: String,
        env_var: String,
    },

    #[error("Unknown provider: {0}")]
    Unknown(String),
}

/// Summarization backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    HuggingFace,
    Grok,
    Openai,
    Gemini,
}

pub struct ProviderConfig {
    pub api_url: &'static str,
    pub model: &'static str,
    pub env_var: &'static str,
}

impl Provider {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Provider::HuggingFace => ProviderConfig {
                api_url: "https://router.huggingface.co/hf-inference/models/sshleifer/distilbart-cnn-12-6",
                model: "sshleifer/distilbart-cnn-12-6",
                env_var: "HF_API_TOKEN",
            },
            Provider::Grok => ProviderConfig {
                api_url: "https://api.x.ai/v1/chat/completions",
                model: "grok-4-fast",
                env_var: "XAI_API_KEY",
            },
            Provider::Openai => ProviderConfig {
                api_url: "https://api.openai.com/v1/chat/completions",
                model: "gpt-5.1",
                env_var: "OPENAI_API_KEY",
            },
            Provider::Gemini => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
                model: "gemini-3-pro",
                env_var: "GEMINI_API_KEY",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::HuggingFace => "Hugging Face",
            Provider::Grok => "Grok",
            Provider::Openai => "OpenAI",
            Provider::Gemini => "Gemini",
        }
    }

    /// Whether the provider speaks the chat-completions protocol rather than
    /// a dedicated summarization endpoint.
    pub fn is_chat(&self) -> bool {
        !matches!(self, Provider::HuggingFace)
    }

    /// Validate that the API key is set for this provider
    pub fn validate_api_key(&self) -> Result<String, ProviderError> {
        let config = self.config();
        std::env::var(config.env_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ProviderError::MissingApiKey {
                provider_name: self.name().to_string(),
                env_var: config.env_var.to_string(),
            })
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Provider::HuggingFace),
            "grok" | "xai" => Ok(Provider::Grok),
            "openai" => Ok(Provider::Openai),
            "gemini" => Ok(Provider::Gemini),
            other => Err(ProviderError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_uses_distilbart() {
        let config = Provider::default().config();
        assert_eq!(config.model, "sshleifer/distilbart-cnn-12-6");
        assert!(config.api_url.ends_with(config.model));
        assert!(!Provider::default().is_chat());
    }

    #[test]
    fn parses_provider_names() {
        assert_eq!("hf".parse::<Provider>().unwrap(), Provider::HuggingFace);
        assert_eq!("Grok".parse::<Provider>().unwrap(), Provider::Grok);
        assert_eq!("OPENAI".parse::<Provider>().unwrap(), Provider::Openai);
        assert!("mistral".parse::<Provider>().is_err());
    }
}
