// src/cli.rs
use std::{env, path::PathBuf};

use color_eyre::eyre::{bail, Result};

use crate::params::Params;
use crate::report::ConsoleReport;
use crate::specs::DatasetKind;

pub fn parse() -> Result<Params> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--dataset" => {
                let v = args.next().ok_or_else(|| missing("--dataset"))?;
                params.dataset = Some(DatasetKind::parse(&v)?);
            }
            "-i" | "--in" => {
                let v = args.next().ok_or_else(|| missing("--in"))?;
                params.input = Some(PathBuf::from(v));
            }
            "-m" | "--mapping" => {
                let v = args.next().ok_or_else(|| missing("--mapping"))?;
                params.mapping_file = Some(PathBuf::from(v));
            }
            "--export-mapping" => {
                let v = args.next().ok_or_else(|| missing("--export-mapping"))?;
                params.export = Some(PathBuf::from(v));
            }
            "--list-datasets" => params.list_datasets = true,
            "-q" | "--quiet" => params.quiet = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }

    Ok(params)
}

pub fn run(params: Params) -> Result<()> {
    if params.list_datasets {
        for kind in DatasetKind::all() {
            println!("{:<16} {}", kind.name(), kind.describe());
        }
        return Ok(());
    }

    if let Some(out) = &params.export {
        let Some(kind) = params.dataset else {
            bail!("--export-mapping needs --dataset");
        };
        crate::runner::export_mapping(kind, out)?;
        println!("Wrote {}", out.display());
        return Ok(());
    }

    if params.input.is_none() {
        bail!("Specify a snapshot with --in <page.html> (see --help)");
    }
    if params.dataset.is_none() && params.mapping_file.is_none() {
        bail!("Specify --dataset <name> or --mapping <file.json>");
    }

    let mut report = ConsoleReport::stdout(params.quiet);
    crate::runner::run(&params, Some(&mut report))?;
    Ok(())
}

fn missing(flag: &str) -> color_eyre::eyre::Error {
    color_eyre::eyre::eyre!("Missing value for {flag}")
}
