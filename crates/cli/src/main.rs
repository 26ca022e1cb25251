use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use campus_agents::{CampusAssistant, ChatInput};
use campus_core::{AssistantConfig, Category, IntentResolver};
use campus_observability::{init_tracing, AppMetrics};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "campus-bot")]
#[command(about = "Campus assistant CLI")]
struct Cli {
    /// JSON file with rule and directory tables; the bundled campus data is used otherwise.
    #[arg(long, env = "CAMPUS_ASSISTANT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Chat,
    Ask {
        #[arg(required = true, num_args = 1..)]
        utterance: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    Contacts {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        query: String,
    },
}

fn main() -> Result<()> {
    init_tracing("campus_cli");
    let cli = Cli::parse();

    let assistant = build_assistant(cli.config.as_ref())?;

    match cli.command {
        Command::Chat => run_chat(&assistant)?,
        Command::Ask { utterance, json } => {
            let reply = assistant.reply(ChatInput {
                text: utterance.join(" "),
            });
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{}", reply.reply_text);
            }
        }
        Command::Contacts { category, query } => {
            let categories = match category {
                Some(raw) => vec![Category::parse(&raw)
                    .with_context(|| format!("invalid --category value: {raw}"))?],
                None => Category::ALL.to_vec(),
            };

            let records = categories
                .into_iter()
                .flat_map(|category| assistant.contacts(category, &query))
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

fn run_chat(assistant: &CampusAssistant) -> Result<()> {
    println!("{}", assistant.welcome_message());
    println!("type 'exit' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let reply = assistant.reply(ChatInput {
            text: message.to_string(),
        });
        println!("\n{}\n", reply.reply_text);
    }

    Ok(())
}

fn build_assistant(config_path: Option<&PathBuf>) -> Result<CampusAssistant> {
    let config = match config_path {
        Some(path) => AssistantConfig::from_path(path)
            .with_context(|| format!("failed loading assistant config from {}", path.display()))?,
        None => AssistantConfig::campus_default(),
    };

    let resolver = IntentResolver::new(config).context("assistant config rejected")?;

    Ok(CampusAssistant::new(Arc::new(resolver), AppMetrics::shared()))
}
