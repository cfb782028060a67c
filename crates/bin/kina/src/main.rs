//! kina - talk to the desktop assistant backend
//!
//! usage:
//!   kina send buka notepad                 # one command, reply as JSON
//!   kina repl                              # commands from stdin
//!   kina text "jam berapa sekarang"        # dialogue reply only
//!   kina transcribe command.wav
//!   kina synthesize "selamat pagi" --out reply.wav
//!   kina converse command.wav --out reply.wav

mod repl;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use kina_client::constants::DEFAULT_FAILURE_MESSAGE;
use kina_client::{BackendEndpoint, ClientConfig, CommandClient};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kina")]
#[command(about = "Client for the kina desktop assistant backend")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// backend base url
    #[arg(long, env = "KINA_SERVER", default_value = "http://127.0.0.1:5000")]
    server: BackendEndpoint,

    /// message returned when the backend can't be reached
    #[arg(long, env = "KINA_FAILURE_MESSAGE", default_value = DEFAULT_FAILURE_MESSAGE)]
    failure_message: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send one command and print the reply
    Send {
        /// command words, joined with spaces
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
    },

    /// Read commands from stdin until EOF or `quit`
    Repl,

    /// Run text through the dialogue manager
    Text {
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
    },

    /// Transcribe a WAV recording
    Transcribe {
        /// recorded audio
        file: PathBuf,
    },

    /// Render text as speech
    Synthesize {
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,

        /// where to write the WAV output
        #[arg(short, long, default_value = "response.wav")]
        out: PathBuf,
    },

    /// Transcribe, answer and voice one recording
    Converse {
        /// recorded audio
        file: PathBuf,

        /// where to write the spoken reply
        #[arg(short, long, default_value = "response.wav")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kina=info,kina_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = ClientConfig::new(args.server).with_failure_message(args.failure_message);
    let client = CommandClient::new(config).context("building backend client")?;

    match args.command {
        Commands::Send { words } => {
            let payload = client.send_command(&words.join(" ")).await;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Commands::Repl => {
            info!("sending commands to {}", client.endpoint());
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let sent = repl::run(&client, stdin, &mut std::io::stdout()).await?;
            info!("{} commands sent", sent);
        }
        Commands::Text { words } => {
            let reply = client.process_text(&words.join(" ")).await?;
            println!("{}", reply);
        }
        Commands::Transcribe { file } => {
            let (audio, name) = read_audio(&file)?;
            let text = client.transcribe(audio, &name).await?;
            println!("{}", text);
        }
        Commands::Synthesize { words, out } => {
            let audio = client.synthesize(&words.join(" ")).await?;
            write_audio(&out, &audio)?;
        }
        Commands::Converse { file, out } => {
            let (audio, name) = read_audio(&file)?;
            let turn = client.converse(audio, &name).await?;
            println!("you:  {}", turn.transcript);
            println!("kina: {}", turn.reply);
            write_audio(&out, &turn.audio)?;
        }
    }

    Ok(())
}

fn read_audio(path: &Path) -> anyhow::Result<(Vec<u8>, String)> {
    let audio = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "command.wav".to_string());
    Ok((audio, name))
}

fn write_audio(path: &Path, audio: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, audio).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} bytes to {}", audio.len(), path.display());
    Ok(())
}
