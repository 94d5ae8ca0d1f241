mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use factfeed_app::Feed;
use factfeed_store::RestStore;
use factfeed_types::{CategoryFilter, CategoryTable, Fact, FactId, NewFact, VoteKind};

use config::Config;

/// Browse, submit, and vote on facts stored in a remote facts service.
#[derive(Parser)]
#[command(name = "factfeed", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the visible fact list
    List {
        /// Restrict the feed to one category
        #[arg(long)]
        category: Option<String>,
    },
    /// Submit a new fact
    Submit {
        /// The fact text (at most 1000 characters)
        #[arg(long)]
        text: String,
        /// Source URL backing the fact
        #[arg(long)]
        source: String,
        /// One of the known categories
        #[arg(long)]
        category: String,
    },
    /// Cast a vote on a visible fact
    Vote {
        /// Fact identifier
        id: FactId,
        /// interesting, mindblowing, or false
        kind: VoteKind,
    },
    /// Print the category table
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "factfeed=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    debug!(url = %config.base_url, "using facts service");

    let store = RestStore::new(config.base_url, config.api_key);
    let feed = Feed::new(store, CategoryTable::builtin());

    match cli.command {
        Command::List { category } => {
            let filter = match category {
                Some(name) => CategoryFilter::named(name),
                None => CategoryFilter::All,
            };
            feed.select_category(filter).await?;

            let facts = feed.facts();
            if facts.is_empty() {
                println!("No facts for this category yet.");
                return Ok(());
            }
            for fact in &facts {
                print_fact(fact);
            }
        }
        Command::Submit {
            text,
            source,
            category,
        } => {
            let stored = feed
                .submit_fact(NewFact {
                    text,
                    source,
                    category,
                })
                .await?;
            println!("Stored fact {}:", stored.id);
            print_fact(&stored);
        }
        Command::Vote { id, kind } => {
            // Votes go through the visible list, so bring it in first.
            feed.refresh().await?;
            let updated = feed.cast_vote(id, kind).await?;
            println!(
                "Fact {} now has {} {} votes.",
                updated.id,
                updated.votes(kind),
                kind
            );
        }
        Command::Categories => {
            for category in feed.categories().iter() {
                println!("{:<14} {}", category.name, category.color);
            }
        }
    }

    Ok(())
}

fn print_fact(fact: &Fact) {
    let disputed = if fact.is_disputed() { " [DISPUTED]" } else { "" };
    println!("#{:<5} [{}]{} {}", fact.id, fact.category, disputed, fact.text);
    println!(
        "       {} · 👍 {} · 🤯 {} · ⛔ {}",
        fact.source, fact.votes_interesting, fact.votes_mindblowing, fact.votes_false
    );
}
