use anyhow::{bail, Result};
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::api::{HttpSource, Query};
use crate::config::Config;
use crate::models::Transaction;
use crate::ui::util::format_amount;
use crate::view::TransactionListView;

pub(crate) fn as_cli(args: &[String], config: &Config, runtime: &Runtime) -> Result<()> {
    match args[0].as_str() {
        "list" | "ls" => cli_list(&args[1..], config, runtime),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("txview {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("txview - transaction list client");
    println!();
    println!("Usage: txview [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  list                          Fetch once and print the transaction table");
    println!("    --category <name>           Only show this category (exact match)");
    println!("    --status <pending|complete> Only show this status (exact match)");
    println!("    --server                    Send the filters to the endpoint as query parameters");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --endpoint <url>              Transaction endpoint (env TXVIEW_ENDPOINT)");
    println!("  --timeout <secs>              Request timeout (env TXVIEW_TIMEOUT_SECS)");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ListOptions {
    category: String,
    status: String,
    server: bool,
}

impl ListOptions {
    fn mount_query(&self) -> Query {
        if self.server {
            Query::from_selection(&self.category, &self.status)
        } else {
            Query::default()
        }
    }
}

fn parse_list_options(args: &[String]) -> Result<ListOptions> {
    let mut opts = ListOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--category" | "-c" => {
                let Some(value) = iter.next() else {
                    bail!("Usage: txview list --category <name>");
                };
                opts.category = value.clone();
            }
            "--status" | "-s" => {
                let Some(value) = iter.next() else {
                    bail!("Usage: txview list --status <pending|complete>");
                };
                opts.status = value.clone();
            }
            "--server" => opts.server = true,
            other => bail!("Unknown option for list: {other}"),
        }
    }
    Ok(opts)
}

fn cli_list(args: &[String], config: &Config, runtime: &Runtime) -> Result<()> {
    let opts = parse_list_options(args)?;
    let source = HttpSource::new(config.endpoint.clone(), config.timeout)?;
    tracing::debug!(endpoint = %source.endpoint(), ?opts, "list command");

    let mut view = TransactionListView::new(Arc::new(source), opts.mount_query());
    view.set_category(opts.category);
    view.set_status(opts.status);

    runtime.block_on(async {
        view.mount();
        view.settle().await;
    });

    if let Some(err) = view.state().error() {
        bail!("{}", err.message);
    }

    let rows = view.visible();
    print!("{}", format_table(&rows));
    let pending = rows.iter().filter(|t| t.is_pending()).count();
    println!();
    println!(
        "{} of {} transactions shown ({pending} pending)",
        rows.len(),
        view.total()
    );
    Ok(())
}

/// Plain-text table: amount right-aligned, then category and status.
fn format_table(rows: &[&Transaction]) -> String {
    let amounts: Vec<String> = rows.iter().map(|t| format_amount(t.amount)).collect();
    let amount_w = amounts.iter().map(|a| a.chars().count()).fold(6, usize::max);
    let category_w = rows
        .iter()
        .map(|t| t.category.chars().count())
        .fold(8, usize::max);

    let mut out = format!("{:>amount_w$}  {:<category_w$}  Status\n", "Amount", "Category");
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(amount_w),
        "-".repeat(category_w),
        "-".repeat(8)
    ));
    for (txn, amount) in rows.iter().zip(&amounts) {
        out.push_str(&format!(
            "{amount:>amount_w$}  {:<category_w$}  {}\n",
            txn.category,
            txn.status.as_str()
        ));
    }
    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
