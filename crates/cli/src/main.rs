use geodist::harness::distance_suite;
use std::{io, time::Instant};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let suite = distance_suite();
    let now = Instant::now();
    let mut stdout = io::stdout().lock();
    let code = match suite.run(&mut stdout) {
        Ok(report) => report.exit_code(),
        Err(err) => {
            error!("Failed to write report: {err}");
            1
        }
    };
    info!("Running {} cases took {:?}", suite.len(), now.elapsed());
    std::process::exit(code);
}
