// src/main.rs
use descfill::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let params = cli::parse()?;
    cli::run(params)
}
