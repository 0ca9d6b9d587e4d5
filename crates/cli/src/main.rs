use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    amenities_observability::init();

    let cli = cli::Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let stdout = std::io::stdout();
    commands::run(cli, &mut stdout.lock())
}
