//! osbst-demo - builds a tree from `KEY=VALUE` pairs and prints its shape
//!
//! Usage:
//!   osbst-demo [PAIRS]... [--skip-balance] [--lookup <KEY>]

use anyhow::{Context, bail};
use clap::Parser;
use osbst::{OrderedTree, TreeError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SCRIPTED: [&str; 6] = ["10=TEN", "3=THREE", "1=ONE", "5=FIVE", "2=TWO", "7=SEVEN"];

#[derive(Parser)]
#[command(name = "osbst-demo")]
#[command(about = "Builds an order-statistic BST and prints it level by level before and after balancing")]
struct Cli {
    /// Bindings to insert, in order, as KEY=VALUE with an integer key
    #[arg(value_name = "PAIRS")]
    pairs: Vec<String>,

    /// Print only the shape produced by the insertions
    #[arg(long)]
    skip_balance: bool,

    /// Key to look up once the tree is built
    #[arg(long, default_value_t = 10)]
    lookup: i64,
}

fn parse_pair(pair: &str) -> anyhow::Result<(i64, String)> {
    let Some((key, value)) = pair.split_once('=') else {
        bail!("expected KEY=VALUE, got `{pair}`");
    };
    let key = key.trim().parse().with_context(|| format!("invalid key in `{pair}`"))?;
    Ok((key, value.to_owned()))
}

fn print_levels(tree: &OrderedTree<i64, String>) {
    let Some(&root) = tree.root_key() else {
        println!("(empty)");
        return;
    };
    for value in tree.level_order(&root) {
        println!("{value}");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,osbst=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let pairs = if cli.pairs.is_empty() {
        SCRIPTED.iter().map(|pair| (*pair).to_owned()).collect()
    } else {
        cli.pairs
    };

    let mut tree = OrderedTree::new();
    for pair in &pairs {
        let (key, value) = parse_pair(pair)?;
        if tree.put(key, value).is_some() {
            tracing::info!(key, "replaced existing binding");
        }
    }
    tracing::info!(len = tree.len(), height = tree.height(), "tree built");

    println!("Before balance:");
    print_levels(&tree);

    if !cli.skip_balance {
        tree.balance();
        println!("After balance:");
        print_levels(&tree);
    }

    println!("\nSize: {}\n", tree.len());

    match tree.get(&cli.lookup) {
        Some(value) => println!("{}: {value}", cli.lookup),
        None => println!("{}: (absent)", cli.lookup),
    }

    let mut empty: OrderedTree<i64, String> = OrderedTree::new();
    for line in contract_violations(&mut empty, tree.len()) {
        println!("{line}");
    }
    println!("{}", report("select", tree.select(tree.len())));

    Ok(())
}

fn report<T: std::fmt::Debug>(operation: &str, result: Result<T, TreeError>) -> String {
    match result {
        Ok(value) => format!("{operation}: {value:?}"),
        Err(error) => format!("{operation}: error: {error}"),
    }
}

/// Calls every operation that rejects an empty table or a bad position.
fn contract_violations(empty: &mut OrderedTree<i64, String>, index: usize) -> Vec<String> {
    vec![
        report("min", empty.min()),
        report("max", empty.max()),
        report("delete_min", empty.delete_min()),
        report("delete_max", empty.delete_max()),
        report("select", empty.select(index)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scripted_pairs() {
        let parsed: Vec<_> = SCRIPTED.iter().map(|pair| parse_pair(pair).unwrap()).collect();
        assert_eq!(parsed[0], (10, "TEN".to_owned()));
        assert_eq!(parsed[5], (7, "SEVEN".to_owned()));
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_pair("10").is_err());
        assert!(parse_pair("ten=TEN").is_err());
    }

    #[test]
    fn reports_each_contract_violation() {
        let mut empty = OrderedTree::new();
        assert_eq!(
            contract_violations(&mut empty, 3),
            vec![
                "min: error: min() called on an empty table",
                "max: error: max() called on an empty table",
                "delete_min: error: delete_min() called on an empty table",
                "delete_max: error: delete_max() called on an empty table",
                "select: error: index 3 is out of range for a table of 0 keys",
            ]
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
