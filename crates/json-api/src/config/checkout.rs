//! Checkout Config

use std::num::NonZeroU8;

use clap::Args;
use yori::orders::code::DEFAULT_PREFIX;
use yori_app::domain::checkout::data::{CheckoutSettings, DEFAULT_ORDER_CODE_ATTEMPTS};

/// Order code settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Prefix of generated order codes
    #[arg(long, env = "ORDER_CODE_PREFIX", default_value = DEFAULT_PREFIX)]
    pub order_code_prefix: String,

    /// Codes tried before a checkout fails with a conflict
    #[arg(long, env = "ORDER_CODE_ATTEMPTS", default_value_t = DEFAULT_ORDER_CODE_ATTEMPTS)]
    pub order_code_attempts: NonZeroU8,
}

impl From<&CheckoutConfig> for CheckoutSettings {
    fn from(config: &CheckoutConfig) -> Self {
        Self {
            order_code_prefix: config.order_code_prefix.clone(),
            order_code_attempts: config.order_code_attempts,
        }
    }
}
