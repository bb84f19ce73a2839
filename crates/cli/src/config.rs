use stockdesk_format::FormatOptions;
use stockdesk_observability::LogFormat;

use crate::args::Cli;

/// Process settings resolved from flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: FormatOptions,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: FormatOptions::default()
                .with_currency_symbol(cli.currency_symbol.clone())
                .with_placeholder(cli.placeholder.clone()),
            log_format: if cli.log_json { LogFormat::Json } else { LogFormat::Text },
        }
    }
}
