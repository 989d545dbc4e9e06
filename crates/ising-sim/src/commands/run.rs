use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use ising_rg::render::{render_equations, render_table};
use ising_rg::{renormalize, verify_run};

use super::write_artifact;

const DEFAULT_OUT: &str = ".";
const DEFAULT_TABLE: &str = "cfg_out.txt";
const DEFAULT_EQUATIONS: &str = "renorm_out.txt";

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory receiving both artefacts.
    #[arg(long, default_value = DEFAULT_OUT)]
    pub out: PathBuf,
    /// File name of the per-configuration table.
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: PathBuf,
    /// File name of the coupling equations.
    #[arg(long, default_value = DEFAULT_EQUATIONS)]
    pub equations: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT),
            table: PathBuf::from(DEFAULT_TABLE),
            equations: PathBuf::from(DEFAULT_EQUATIONS),
        }
    }
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let run = renormalize();
    verify_run(&run)?;

    write_artifact(&args.out.join(&args.table), &render_table(&run))?;
    write_artifact(&args.out.join(&args.equations), &render_equations(run.table()))?;
    Ok(())
}
