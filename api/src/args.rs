use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use ecoscan_core::domain::common::{EcoScanConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "ecoscan-api", version, about = "EcoScan image analysis service and scan client")]
pub struct Args {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the analysis HTTP service
    Serve(ServeArgs),
    /// Analyze image files against a running analysis service
    Scan(ScanArgs),
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServeArgs {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-metrics",
        env = "SERVER_METRICS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    #[arg(long = "openai-base-url", env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub base_url: String,

    #[arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = 800)]
    pub max_tokens: u32,

    #[arg(long = "openai-temperature", env = "OPENAI_TEMPERATURE", default_value_t = 0.1)]
    pub temperature: f32,

    #[arg(long = "openai-top-p", env = "OPENAI_TOP_P", default_value_t = 0.9)]
    pub top_p: f32,

    #[arg(long = "openai-image-detail", env = "OPENAI_IMAGE_DETAIL", default_value = "low")]
    pub image_detail: String,

    #[arg(long = "openai-structured-output", env = "OPENAI_STRUCTURED_OUTPUT", default_value_t = false)]
    pub structured_output: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ScanArgs {
    /// Image files to analyze
    #[arg(required = true, num_args = 1..)]
    pub images: Vec<PathBuf>,

    #[arg(
        long = "service-url",
        env = "ECOSCAN_SERVICE_URL",
        default_value = "http://localhost:3333/api/analyze-image"
    )]
    pub service_url: String,

    /// Directory receiving one JSON report per result
    #[arg(long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Print a share text pointing at this URL for every result
    #[arg(long = "share-url")]
    pub share_url: Option<String>,
}

impl From<ServeArgs> for EcoScanConfig {
    fn from(args: ServeArgs) -> Self {
        EcoScanConfig {
            llm: LLMConfig {
                openai_api_key: args.llm.api_key,
                openai_model: args.llm.model,
                openai_base_url: args.llm.base_url,
                max_tokens: args.llm.max_tokens,
                temperature: args.llm.temperature,
                top_p: args.llm.top_p,
                image_detail: args.llm.image_detail,
                structured_output: args.llm.structured_output,
            },
        }
    }
}
