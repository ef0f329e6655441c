use ingstats::{
    config::Config,
    report::{all_reports, format::write_reports},
    stream_transactions,
};

use anyhow::Context;
use std::env;
use std::io::{stdout, BufWriter};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let Some(path) = parse_args() else {
        println!("No file provided, example: ingstats \"/path/to/ing-export.csv\"");
        return;
    };

    // Failures are reported on stdout and never change the exit code.
    if let Err(e) = run(&path, &Config::default()) {
        println!("{:#}", e);
    }
}

fn parse_args() -> Option<String> {
    env::args().nth(1)
}

fn run(path: &str, config: &Config) -> anyhow::Result<()> {
    let mut stream = stream_transactions(path, &config.parser)?;
    let txs: Vec<_> = stream.by_ref().collect();
    log::info!(
        "Parsed {} transactions, skipped {} lines",
        txs.len(),
        stream.skipped()
    );
    drop(stream);

    let reports = all_reports(&txs, &config.report);

    let mut out = BufWriter::new(stdout().lock());
    write_reports(&mut out, &reports, &config.report).context("could not write reports")?;

    Ok(())
}
