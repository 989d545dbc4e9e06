use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use ising_rg::{build_report, renormalize, serde_io, verify_run};
use tracing::debug;

use super::write_artifact;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Destination of the JSON report; `-` writes to stdout.
    #[arg(long, default_value = "-")]
    pub out: PathBuf,
}

pub fn run(args: &ReportArgs) -> Result<(), Box<dyn Error>> {
    let run = renormalize();
    verify_run(&run)?;
    let report = build_report(&run)?;
    debug!(report_hash = %report.report_hash, "built report");

    let mut json = serde_io::report_to_json(&report)?;
    json.push('\n');
    if args.out.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.flush()?;
    } else {
        write_artifact(&args.out, &json)?;
    }
    Ok(())
}
