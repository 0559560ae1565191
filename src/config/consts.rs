/// Node name used when the config does not give one
pub const DEFAULT_NODE_NAME: &str = "processor";
/// Default listen address for the Processor service
pub const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1:50051";
/// Default endpoint the command-line client dials
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:50051";
/// Default connect timeout for client channels (5 seconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;
/// Default per-request timeout for client calls (10 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
/// Default number of notifications per section
pub const DEFAULT_SECTION_SIZE: u64 = 10;
/// Largest section a node will serve in one reply
pub const MAX_SECTION_SIZE: u64 = 1_000;
/// Prompts buffered per subscriber before the slowest one starts lagging
pub const PROMPT_CHANNEL_CAPACITY: usize = 64;
