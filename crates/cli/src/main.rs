//! boj2md entry point.
//!
//! Fetches one problem page, converts it to Markdown and prints it on stdout.
//! Logging goes to stderr.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use boj2md_client::{FetchClient, FetchConfig};
use boj2md_core::AppConfig;

mod app;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match try_main(std::env::args_os(), &mut out).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn try_main<I>(args: I, out: &mut impl Write) -> Result<app::Outcome>
where
    I: IntoIterator<Item = OsString>,
{
    let outcome = app::run(args, connect, out).await?;
    out.flush()?;
    Ok(outcome)
}

fn connect() -> Result<Box<FetchClient>> {
    let config = AppConfig::load()?;
    logging::init_tracing(config.log_format);

    Ok(Box::new(FetchClient::new(FetchConfig::from(&config))?))
}
