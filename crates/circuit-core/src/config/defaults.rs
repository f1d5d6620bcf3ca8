// Single source of truth for all default values.

// --- Dataset ---
pub const DEFAULT_DATASET_PATH: &str = "data/资料清单.csv";
pub const DEFAULT_DATASET_HAS_HEADERS: bool = true;

// --- Dialogue ---
pub const DEFAULT_MAX_RESULTS_DISPLAY: usize = 5;
pub const DEFAULT_MAX_RESULTS_ANALYSIS: usize = 20;
pub const DEFAULT_MAX_OPTIONS_DISPLAY: usize = 6;
pub const DEFAULT_UNDO_CAPACITY: usize = 10;
pub const DEFAULT_SUMMARY_PREVIEW: usize = 5;

// --- NLU ---
pub const DEFAULT_NLU_PROVIDER: &str = "llm";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_LLM_MODEL: &str = "deepseek-chat";
pub const DEFAULT_LLM_REASONER_MODEL: &str = "deepseek-reasoner";
pub const DEFAULT_LLM_API_KEY_ENV: &str = "LLM_API_KEY";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LLM_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_KEYWORD_CACHE_SIZE: u64 = 1_000;
pub const DEFAULT_MAX_DESIGNED_OPTIONS: usize = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
pub const DEFAULT_TURN_LOG_CAPACITY: usize = 1_000;
