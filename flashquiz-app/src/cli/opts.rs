use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[command(name = "flashquiz", version, about = "FlashQuiz deck server, client and TUI")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the HTTP deck and score server
    Serve(ServeCmd),
    /// Author and study decks in the terminal
    Tui(TuiCmd),
    /// Print saved deck names
    Decks(RemoteArgs),
    /// Print the cards of one deck
    Show(ShowCmd),
    /// Print saved scores
    Scores(RemoteArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ServeCmd {
    /// Bind address (host:port)
    #[arg(long, env = "FLASHQUIZ_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: String,
}

#[derive(Debug, Args, Clone)]
pub struct TuiCmd {
    /// Deck server base URL; decks are kept in this process when omitted
    #[arg(long, env = "FLASHQUIZ_SERVER")]
    pub server: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct RemoteArgs {
    /// Deck server base URL
    #[arg(long, env = "FLASHQUIZ_SERVER", default_value = "http://127.0.0.1:8080")]
    pub server: String,
}

#[derive(Debug, Args, Clone)]
pub struct ShowCmd {
    pub name: String,
    #[command(flatten)]
    pub remote: RemoteArgs,
}
