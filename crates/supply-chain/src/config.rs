use clap::Parser;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_CAS_ATTEMPTS: u32 = 3;
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

/// Runtime settings. Flags win over environment variables, which win over
/// the defaults.
#[derive(Debug, Clone, Parser)]
#[command(name = "supply-chain", about = "Role-based supply-chain ledger")]
pub struct Config {
    /// Request buffer of every collection actor.
    #[arg(long, env = "SUPPLY_CHAIN_CHANNEL_CAPACITY", default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    pub channel_capacity: usize,

    /// Log filter used when RUST_LOG is unset (e.g. "info,supply_chain=debug").
    #[arg(long, env = "SUPPLY_CHAIN_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// How often a quantity decrement is tried before giving up on conflicts.
    #[arg(long, env = "SUPPLY_CHAIN_CAS_ATTEMPTS", default_value_t = DEFAULT_CAS_ATTEMPTS)]
    pub cas_attempts: u32,

    /// Shortest password the local provider accepts at sign-up.
    #[arg(long, env = "SUPPLY_CHAIN_MIN_PASSWORD_LEN", default_value_t = DEFAULT_MIN_PASSWORD_LEN)]
    pub min_password_len: usize,
}

/// Same values as an empty command line, without reading the environment.
impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            cas_attempts: DEFAULT_CAS_ATTEMPTS,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::parse_from([
            "supply-chain",
            "--channel-capacity",
            "8",
            "--cas-attempts",
            "5",
        ]);
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.cas_attempts, 5);
    }

    #[test]
    fn test_rejects_non_numeric_capacity() {
        let parsed = Config::try_parse_from(["supply-chain", "--channel-capacity", "many"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_default_matches_declared_constants() {
        let config = Config::default();
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.min_password_len, 6);
    }
}
