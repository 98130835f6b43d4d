use backend::config::{
    DEFAULT_API_BASE, DEFAULT_CHAT_MODEL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
};
use backend::ServiceConfig;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Serve the Muse frontend and character API")]
pub struct Cli {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,
    #[arg(long, default_value = "dist")]
    pub dist_dir: PathBuf,
    /// Credential for the hosted model service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,
    #[arg(long, env = "OPENAI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    #[arg(long, default_value = DEFAULT_TEXT_MODEL)]
    pub text_model: String,
    #[arg(long, default_value = DEFAULT_IMAGE_MODEL)]
    pub image_model: String,
    #[arg(long, default_value = DEFAULT_CHAT_MODEL)]
    pub chat_model: String,
}

impl Cli {
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            api_key: self.api_key.clone(),
            api_base: self.api_base.clone(),
            text_model: self.text_model.clone(),
            image_model: self.image_model.clone(),
            chat_model: self.chat_model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend() {
        let cli = Cli::try_parse_from(["muse-launcher", "--api-key", "sk-test"]).unwrap();
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.dist_dir, PathBuf::from("dist"));

        let config = cli.service_config();
        let mut expected = ServiceConfig::new("sk-test");
        // The environment may override the base url
        expected.api_base = cli.api_base.clone();
        assert_eq!(config, expected);
    }

    #[test]
    fn models_can_be_overridden() {
        let cli = Cli::try_parse_from([
            "muse-launcher",
            "--api-key",
            "sk-test",
            "--chat-model",
            "gpt-4o",
            "--port",
            "3000",
        ])
        .unwrap();
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.service_config().chat_model, "gpt-4o");
    }
}
