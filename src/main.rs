use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tunechart::{catalog::defaults::SEARCH_LIMIT, cli, config, error};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the current top artists and tracks
    Chart(ChartOptions),

    /// Show a single track
    Track(IdOptions),

    /// Show an artist profile with its top tracks
    Artist(IdOptions),

    /// Search tracks
    Search(SearchOptions),

    /// Find the preview clip of the best matching track
    Preview(PreviewOptions),

    /// Run the web front end
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ChartOptions {
    /// Number of chart tracks to show
    #[clap(long, default_value_t = 18)]
    pub limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct IdOptions {
    /// Catalog id
    pub id: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search terms
    pub query: String,

    /// Maximum number of results to show
    #[clap(long, default_value_t = SEARCH_LIMIT)]
    pub limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewOptions {
    /// Search terms, e.g. "Imagine John Lennon"
    pub query: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Open the index page in the default browser
    #[clap(long)]
    pub open: bool,
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
        Command::Chart(opt) => cli::chart(opt.limit).await,
        Command::Track(opt) => cli::track(opt.id).await,
        Command::Artist(opt) => cli::artist(opt.id).await,
        Command::Search(opt) => cli::search(opt.query, opt.limit).await,
        Command::Preview(opt) => cli::preview(opt.query).await,
        Command::Serve(opt) => cli::serve(opt.open).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
