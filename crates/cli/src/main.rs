use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookshelf", about = "Bookshelf service entrypoint", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => bookshelf_app::run().await,
    }
}
