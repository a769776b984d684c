//! `proxy-config list`: the redacted configuration listing.

use anyhow::Result;
use proxy_config::ConfigSnapshot;

use crate::formatters::Formatter;

pub fn run(config: &ConfigSnapshot, formatter: &dyn Formatter) -> Result<String> {
    formatter.format_listing(&config.list_config())
}
