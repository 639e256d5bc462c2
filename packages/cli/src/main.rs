use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cmd;
mod context;
mod view;

use context::AppContext;

#[derive(Parser)]
#[command(name = "storefront", about = "Storefront client from the terminal")]
struct Cli {
    /// Base URL of the storefront API (overrides STOREFRONT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Use the built-in demo backend instead of the network
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in or create an account
    Login,
    /// List the product catalog
    Products,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Interactive prompts and log lines share the terminal; keep logs quiet unless asked.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.api_url, cli.offline)?;

    print_banner(&ctx);

    match cli.command {
        Commands::Login => cmd::login::run(&ctx).await,
        Commands::Products => cmd::products::run(&ctx).await,
    }
}

fn print_banner(ctx: &AppContext) {
    println!("{}", "╔════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║            Storefront Client           ║".bright_cyan());
    println!("{}", "╚════════════════════════════════════════╝".bright_cyan());
    if ctx.api.transport().is_demo() {
        println!("{}", "   offline demo backend".dimmed());
    } else {
        println!("   {}", ctx.config.api_base_url.dimmed());
    }
    println!();
}
