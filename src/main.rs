use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spanalyze::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List your playlists
    Playlists(PlaylistsOptions),

    /// Analyze a playlist
    Analyze(AnalyzeOptions),

    /// Run the local JSON API
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Use this access token instead of logging in
    #[clap(long)]
    pub access_token: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeOptions {
    /// Playlist id; pick from your playlists when omitted
    pub playlist_id: Option<String>,

    /// Use this access token instead of logging in
    #[clap(long)]
    pub access_token: Option<String>,

    /// Print the analysis as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, defaults to API_SERVER_ADDRESS or 127.0.0.1:3000
    #[clap(long)]
    pub addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Playlists(opt) => cli::list_playlists(opt.access_token).await,
        Command::Analyze(opt) => cli::analyze(opt.access_token, opt.playlist_id, opt.json).await,
        Command::Serve(opt) => cli::serve(opt.addr).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
