use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::desk::Collection;

#[derive(Debug, Parser)]
#[command(name = "stockdesk", version, about = "Inventory and purchasing desk")]
pub struct Cli {
    /// Prefix for currency amounts.
    #[arg(long, global = true, env = "STOCKDESK_CURRENCY_SYMBOL", default_value = "₹")]
    pub currency_symbol: String,

    /// Shown in place of empty values.
    #[arg(long, global = true, env = "STOCKDESK_PLACEHOLDER", default_value = "-")]
    pub placeholder: String,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true, env = "STOCKDESK_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the records of a collection.
    List {
        collection: Collection,
        /// Keep records whose field equals the value (repeatable).
        #[arg(long = "where", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        filters: Vec<(String, String)>,
        /// Case-insensitive text search across all text fields.
        #[arg(long)]
        search: Option<String>,
        /// Sort by a field instead of insertion order.
        #[arg(long)]
        sort: Option<String>,
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Print records as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show one record.
    Show { collection: Collection, id: String },
    /// Create a record from field=value pairs.
    Add {
        collection: Collection,
        #[arg(value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
    },
    /// Change fields of a record, keeping the others.
    Edit {
        collection: Collection,
        id: String,
        #[arg(value_name = "FIELD=VALUE", value_parser = parse_assignment, required = true)]
        fields: Vec<(String, String)>,
    },
    /// Delete a record.
    Remove { collection: Collection, id: String },
    /// Mark a purchase item as received.
    Receive {
        id: String,
        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Allocate units of a stock item.
    Allocate {
        stock_id: String,
        #[arg(long)]
        quantity: i64,
        /// Department or person receiving the stock.
        #[arg(long = "to")]
        allocated_to: String,
        #[arg(long)]
        location: Option<String>,
        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Split `field=value`; the value may be empty or contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim().to_string(), value.to_string())),
        _ => Err(format!("expected FIELD=VALUE, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assignment_splits_on_first_equals() {
        assert_eq!(parse_assignment("remarks=a=b").unwrap(), ("remarks".into(), "a=b".into()));
        assert_eq!(parse_assignment("location=").unwrap(), ("location".into(), String::new()));
        assert!(parse_assignment("quantity").is_err());
        assert!(parse_assignment("=5").is_err());
    }

    #[test]
    fn parses_list_with_filters() {
        let cli = Cli::try_parse_from([
            "stockdesk",
            "list",
            "stock",
            "--where",
            "category=electronics",
            "--sort",
            "quantity",
            "--desc",
        ])
        .unwrap();

        match cli.command {
            Command::List {
                collection,
                filters,
                sort,
                desc,
                json,
                ..
            } => {
                assert_eq!(collection, Collection::Stock);
                assert_eq!(filters, vec![("category".to_string(), "electronics".to_string())]);
                assert_eq!(sort.as_deref(), Some("quantity"));
                assert!(desc);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.currency_symbol, "₹");
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "stockdesk",
            "receive",
            "2",
            "--date",
            "2023-05-21",
            "--currency-symbol",
            "$",
        ])
        .unwrap();

        assert_eq!(cli.currency_symbol, "$");
        match cli.command {
            Command::Receive { id, date } => {
                assert_eq!(id, "2");
                assert_eq!(date, NaiveDate::from_ymd_opt(2023, 5, 21));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_collection() {
        assert!(Cli::try_parse_from(["stockdesk", "list", "invoices"]).is_err());
    }
}
