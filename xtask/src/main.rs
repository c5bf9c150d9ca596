use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for sigfft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt {
        /// Report unformatted files without rewriting them
        #[arg(long)]
        check: bool,
    },
    /// fmt followed by clippy
    Analyze,
    Bench,
    Demo {
        /// Name of a demo under demos/
        #[arg(default_value = "basic_usage")]
        name: String,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status(),
        Commands::Test => test_command(&cfg).status(),
        Commands::Clippy => clippy_command().status(),
        Commands::Fmt { check: false } => fmt_command().status(),
        Commands::Fmt { check: true } => fmt_check_command().status(),
        Commands::Analyze => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                Ok(fmt)
            } else {
                clippy_command().status()
            }
        }
        Commands::Bench => bench_command(&cfg).status(),
        Commands::Demo { name } => demo_command(&cfg, &name).status(),
    }?;

    if !status.success() {
        anyhow::bail!("command exited with {}", status);
    }
    Ok(())
}
