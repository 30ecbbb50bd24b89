use chrono_tz::Tz;
use clap::Parser;
use mealscore_core::domain::{
    common::{LLMConfig, LLMProvider, MealScoreConfig},
    nutrition::PatientBaseline,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealscore", version, about = "Meal photo logging with a traffic-light score")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub app: AppArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/mealscore`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8080"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// `openai` or `gemini`.
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", default_value = "openai")]
    pub provider: LLMProvider,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_base_url: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AppArgs {
    /// IANA zone used for record timestamps.
    #[arg(long = "timezone", env = "APP_TZ", default_value = "America/Santiago")]
    pub timezone: Tz,

    #[arg(long, env = "BASELINE_FERRITIN", default_value_t = 10.5)]
    pub baseline_ferritin: f64,

    #[arg(long, env = "BASELINE_VITAMIN_D", default_value_t = 25.4)]
    pub baseline_vitamin_d: f64,

    #[arg(long, env = "BASELINE_HOMA_IR", default_value_t = 4.6)]
    pub baseline_homa_ir: f64,

    #[arg(long, env = "BASELINE_LDL", default_value_t = 97.0)]
    pub baseline_ldl: f64,

    #[arg(long, env = "BASELINE_HDL", default_value_t = 39.0)]
    pub baseline_hdl: f64,

    #[arg(long, env = "BASELINE_TRIGLYCERIDES", default_value_t = 193.0)]
    pub baseline_triglycerides: f64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set.
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl From<Args> for MealScoreConfig {
    fn from(args: Args) -> Self {
        let llm = match args.llm.provider {
            LLMProvider::OpenAI => LLMConfig {
                provider: LLMProvider::OpenAI,
                api_key: args.llm.openai_api_key,
                model: args.llm.openai_model,
                base_url: args.llm.openai_base_url,
                timeout_secs: args.llm.timeout_secs,
            },
            LLMProvider::Gemini => LLMConfig {
                provider: LLMProvider::Gemini,
                api_key: args.llm.gemini_api_key,
                model: args.llm.gemini_model,
                base_url: args.llm.gemini_base_url,
                timeout_secs: args.llm.timeout_secs,
            },
        };

        MealScoreConfig {
            llm,
            timezone: args.app.timezone,
            baseline: PatientBaseline {
                ferritin: args.app.baseline_ferritin,
                vitamin_d: args.app.baseline_vitamin_d,
                homa_ir: args.app.baseline_homa_ir,
                ldl: args.app.baseline_ldl,
                hdl: args.app.baseline_hdl,
                triglycerides: args.app.baseline_triglycerides,
            },
        }
    }
}
