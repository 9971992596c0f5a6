//! Tally CLI binary: run one turn of the arithmetic agent from the command line.
//!
//! Sends the message to the model (Ollama by default), executes any requested
//! tool calls, and prints the assistant reply plus tool results.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tally::{run_turn, AgentState, ArithmeticToolSource, ChatOllama, Message, ToolSource};

const DEFAULT_MESSAGE: &str = "What is 5 + 3?";

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Tally — run the arithmetic agent from CLI")]
struct Args {
    /// User message (or pass as first positional argument)
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Positional args: user message when -m/--message is not used
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,

    /// Model name on the Ollama server
    #[arg(long, value_name = "NAME", env = "TALLY_MODEL", default_value = "llama3.2:1b")]
    model: String,

    /// Base URL of the OpenAI-compatible endpoint
    #[arg(long, value_name = "URL", env = "OLLAMA_BASE_URL")]
    base_url: Option<String>,

    /// Verbose: log model requests and tool dispatch
    #[arg(short, long)]
    verbose: bool,
}

/// Initializes tracing to stderr so stdout stays clean for the reply.
///
/// `RUST_LOG` takes precedence; `-v` bumps the default to debug.
fn init_logging(verbose: bool) {
    let default = if verbose { "tally=debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logging(args.verbose);

    let message = args
        .message
        .clone()
        .or_else(|| {
            if args.rest.is_empty() {
                None
            } else {
                Some(args.rest.join(" "))
            }
        })
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    let tools: Arc<ArithmeticToolSource> = Arc::new(ArithmeticToolSource::new());
    let specs = tools.list_tools().await?;

    let llm = match &args.base_url {
        Some(url) => ChatOllama::with_base_url(url, &args.model),
        None => ChatOllama::new(&args.model),
    }
    .with_tools(specs);

    let state = AgentState::with_user_message(&message);
    let after = match run_turn(Arc::new(llm), tools, state, None).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("tally: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(reply) = after.last_assistant_reply() {
        if !reply.is_empty() {
            println!("{}", reply);
        }
    }
    for m in &after.messages {
        if let Message::Tool { call_id, content } = m {
            match call_id {
                Some(id) => println!("[tool {}] {}", id, content),
                None => println!("[tool] {}", content),
            }
        }
    }

    Ok(())
}
