//! QuantumSpace CLI
//!
//! Terminal front end for the QuantumSpace backend:
//! - Show the landing page
//! - Chat with the research assistant
//! - Browse, add and delete research records

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use quantumspace::client::{ApiClient, ChatPanel, ResearchPanel};
use quantumspace::config::ClientConfig;
use quantumspace::content;
use quantumspace::init_tracing;
use quantumspace::models::{Category, ChatMessage, ResearchRecord, Role};

#[derive(Parser)]
#[command(name = "quantumspace")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "QuantumSpace research platform client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend base URL (overrides QS_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the landing page
    Landing,

    /// Chat with the research assistant
    Chat {
        /// Send a single message and exit; omit for an interactive session
        message: Option<String>,
    },

    /// Research database operations
    #[command(subcommand)]
    Research(ResearchCommands),
}

#[derive(Subcommand)]
pub enum ResearchCommands {
    /// List all research records
    List,

    /// Add a research record
    Add {
        /// Record title
        title: String,
        /// Category (space, quantum, ai, database)
        #[arg(short, long, default_value = "space", value_parser = parse_category)]
        category: Category,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Findings
        #[arg(short, long, default_value = "")]
        findings: String,
    },

    /// Delete a research record by id
    Delete {
        /// Record id
        id: String,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| format!("unknown category {:?}", s))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    init_tracing(&config.log_level);

    let backend_url = cli.backend_url.unwrap_or(config.backend_url);
    let client = ApiClient::new(backend_url);
    tracing::debug!("Using backend at {}", client.base_url());

    match cli.command.unwrap_or(Commands::Landing) {
        Commands::Landing => {
            print!("{}", content::render_landing(72));
        }

        Commands::Chat { message } => {
            let mut panel = ChatPanel::new();
            match message {
                Some(message) => {
                    panel.set_input(message);
                    if panel.send_message(&client).await {
                        print_last_reply(&panel);
                    }
                }
                None => chat_loop(&client, &mut panel).await?,
            }
        }

        Commands::Research(command) => {
            let mut panel = ResearchPanel::new();
            panel.list_records(&client).await;

            match command {
                ResearchCommands::List => {}
                ResearchCommands::Add {
                    title,
                    category,
                    description,
                    findings,
                } => {
                    let draft = panel.draft_mut();
                    draft.title = title;
                    draft.category = category;
                    draft.description = description;
                    draft.findings = findings;
                    panel.create_record(&client).await;
                }
                ResearchCommands::Delete { id } => {
                    panel.delete_record(&client, &id).await;
                }
            }

            print_records(panel.records());
        }
    }

    Ok(())
}

async fn chat_loop(
    client: &ApiClient,
    panel: &mut ChatPanel,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Ask about space research, quantum theory or AI. Empty line to skip, Ctrl-D to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };

        panel.set_input(line);
        if panel.send_message(client).await {
            print_last_reply(panel);
        }
    }

    Ok(())
}

fn print_last_reply(panel: &ChatPanel) {
    if let Some(ChatMessage {
        role: Role::Assistant,
        content,
    }) = panel.messages().last()
    {
        println!("{}\n", content);
    }
}

fn print_records(records: &[ResearchRecord]) {
    if records.is_empty() {
        println!("No research records.");
        return;
    }

    for record in records {
        println!("[{}] {} ({})", record.id, record.title, record.category.display_name());
        if !record.description.is_empty() {
            println!("    {}", record.description);
        }
        if !record.findings.is_empty() {
            println!("    Findings: {}", record.findings);
        }
    }
}
