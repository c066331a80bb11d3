use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lyrixcope_acquire::{ApiConfig, LyricsClient};

#[derive(Parser)]
#[command(name = "lyrixcope")]
#[command(about = "Look up songs on lyrics.com and fetch their lyrics")]
#[command(version)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(flatten)]
    api: ApiArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ApiArgs {
    /// Lyrics API user id
    #[arg(long, global = true, env = "LYRIXCOPE_USER_ID")]
    user_id: Option<String>,

    /// Lyrics API token
    #[arg(long, global = true, env = "LYRIXCOPE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Override the search endpoint
    #[arg(long, global = true, hide = true)]
    endpoint: Option<String>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a song and print the selected candidate
    Lookup {
        /// Song title to search for
        #[arg(short, long)]
        song: String,

        /// Artist name used to pick among results
        #[arg(short, long)]
        artist: Option<String>,
    },

    /// Scrape the lyric text from a lyrics.com song page
    Scrape {
        /// Song page URL
        url: String,
    },

    /// Look up a song and fetch its lyrics
    Lyrics {
        /// Song title to search for
        #[arg(short, long)]
        song: String,

        /// Artist name used to pick among results
        #[arg(short, long)]
        artist: Option<String>,

        /// Also write song.json, lyrics.txt and source.md to this directory
        #[arg(short = 'O', long)]
        output_dir: Option<String>,
    },
}

impl ApiArgs {
    fn client(&self) -> Result<LyricsClient> {
        let mut config = ApiConfig::default();
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint);
        }
        let mut client = LyricsClient::new(config)?;
        match (&self.user_id, &self.token) {
            (Some(user_id), Some(token)) => client.configure(user_id, token),
            _ => tracing::debug!("No API credentials given (--user-id/--token); lookups will fail"),
        }
        Ok(client)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn,hyper_util=info",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn,hyper_util=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // stdout carries results only
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let client = cli.api.client()?;

    match cli.command {
        Commands::Lookup { song, artist } => {
            tracing::info!(song = %song, artist = ?artist, "Looking up song");
            let result = client.lookup(&song, artist.as_deref()).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Scrape { url } => {
            let Some(lyrics) = client.scrape(&url).await else {
                anyhow::bail!("Could not scrape lyrics from {url}");
            };
            println!("{lyrics}");
        }
        Commands::Lyrics {
            song,
            artist,
            output_dir,
        } => {
            tracing::info!(song = %song, artist = ?artist, "Fetching lyrics");
            let result = client.aggregate(&song, artist.as_deref()).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if let Some(dir) = output_dir {
                lyrixcope_acquire::output::write_result(&result, &dir)?;
            }
        }
    }

    Ok(())
}
