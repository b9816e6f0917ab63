/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub default_filter: String,
    pub json_format: bool,
}
