use clap::{ArgAction, Args as ClapArgs, Parser};
use menuwise_core::domain::common::{
    EmbeddingConfig, MenuwiseConfig, RecommendationConfig, entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "menuwise-api", version, about = "Menu recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub embedding: EmbeddingArgs,

    #[command(flatten)]
    pub recommendation: RecommendationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8081"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct EmbeddingArgs {
    #[arg(
        long = "embedding-endpoint",
        env = "EMBEDDING_ENDPOINT",
        default_value = "http://localhost:8080/v1/embeddings"
    )]
    pub endpoint: String,

    #[arg(
        long = "embedding-model",
        env = "EMBEDDING_MODEL",
        default_value = "all-MiniLM-L6-v2"
    )]
    pub model: String,

    #[arg(long = "embedding-api-key", env = "EMBEDDING_API_KEY")]
    pub api_key: Option<String>,

    #[arg(
        long = "embedding-timeout-secs",
        env = "EMBEDDING_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecommendationArgs {
    #[arg(long = "top-k", env = "RECOMMEND_TOP_K", default_value_t = 3)]
    pub top_k: usize,

    #[arg(
        long = "similarity-threshold",
        env = "RECOMMEND_SIMILARITY_THRESHOLD",
        default_value_t = 0.3,
        allow_negative_numbers = true
    )]
    pub similarity_threshold: f32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub json: bool,
}

impl TryFrom<&Args> for MenuwiseConfig {
    type Error = CoreError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        Ok(Self {
            embedding: EmbeddingConfig {
                endpoint: args.embedding.endpoint.clone(),
                model: args.embedding.model.clone(),
                api_key: args.embedding.api_key.clone(),
                timeout_secs: args.embedding.timeout_secs,
            },
            recommendation: RecommendationConfig::new(
                args.recommendation.top_k,
                args.recommendation.similarity_threshold,
            )?,
        })
    }
}
