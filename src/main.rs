use clap::Parser;

use firstcaps::DEFAULT_MAX_LINE_LEN;

#[derive(Parser)]
#[command(
    name = "firstcaps",
    about = "firstcaps — deduplicated uppercase letters of one line"
)]
struct Cli {
    /// Write debug logs to /tmp/firstcaps-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/firstcaps-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("firstcaps debug log started — tail -f /tmp/firstcaps-debug.log");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    firstcaps::run_with(&mut stdin.lock(), &mut stdout.lock(), DEFAULT_MAX_LINE_LEN)
}
