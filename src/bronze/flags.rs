//! The flag set issued by the bronze tier.
//!
//! Built once at startup from `[flags]` in the config file and never
//! mutated afterwards.

use std::fmt;

use crate::config::FlagConfig;

/// Four check flags plus the final flag.
#[derive(Clone, PartialEq, Eq)]
pub struct FlagSet {
    hello: String,
    rest: String,
    echo: String,
    user_agent: String,
    final_flag: String,
}

impl FlagSet {
    pub fn new(
        hello: impl Into<String>,
        rest: impl Into<String>,
        echo: impl Into<String>,
        user_agent: impl Into<String>,
        final_flag: impl Into<String>,
    ) -> Self {
        Self {
            hello: hello.into(),
            rest: rest.into(),
            echo: echo.into(),
            user_agent: user_agent.into(),
            final_flag: final_flag.into(),
        }
    }

    pub fn hello(&self) -> &str {
        &self.hello
    }

    pub fn rest(&self) -> &str {
        &self.rest
    }

    pub fn echo(&self) -> &str {
        &self.echo
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn final_flag(&self) -> &str {
        &self.final_flag
    }

    /// The sequence the gate expects, in check definition order.
    pub fn expected_sequence(&self) -> [&str; 4] {
        [&self.hello, &self.rest, &self.echo, &self.user_agent]
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        Self::from(&FlagConfig::default())
    }
}

impl From<&FlagConfig> for FlagSet {
    fn from(config: &FlagConfig) -> Self {
        Self::new(
            config.hello.clone(),
            config.rest.clone(),
            config.echo.clone(),
            config.user_agent.clone(),
            config.final_flag.clone(),
        )
    }
}

// Flags are deployment secrets; keep them out of debug output.
impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet").finish_non_exhaustive()
    }
}
