//! The fetch → extract → render pipeline behind `boj2md <problem id>`.

use std::ffi::OsString;
use std::io::Write;
use std::ops::Deref;
use std::process::ExitCode;

use anyhow::{Context, Result};
use boj2md_client::{ProblemSource, parse_problem, to_markdown};
use clap::Parser;

/// Printed on stdout when the argument count is wrong.
pub const USAGE: &str = "Usage:\n  boj2md <problem id>";

/// Command-line arguments: exactly one problem identifier, no flags.
#[derive(Debug, Parser)]
#[command(name = "boj2md", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Problem identifier, e.g. 1000
    #[arg(allow_hyphen_values = true)]
    problem_id: String,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Markdown was written
    Printed,
    /// Wrong arguments; usage was written and nothing was fetched
    Usage,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Printed => ExitCode::SUCCESS,
            Outcome::Usage => ExitCode::from(1),
        }
    }
}

/// Extract the problem id from `args` (including the program name).
///
/// Exactly one argument must follow the program name. The raw count is
/// checked before clap sees the arguments, so `--` counts as an argument.
pub fn parse_args<I, T>(args: I) -> Option<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        tracing::debug!(count = args.len().saturating_sub(1), "wrong number of arguments");
        return None;
    }

    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli.problem_id),
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "rejected arguments");
            None
        }
    }
}

/// Check `args`, then build a source with `connect` and print one problem.
///
/// A usage error is reported before `connect` runs, so neither configuration
/// nor the network is touched for wrong arguments.
pub async fn run<I, T, F, S, W>(args: I, connect: F, out: &mut W) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FnOnce() -> Result<S>,
    S: Deref,
    S::Target: ProblemSource,
    W: Write,
{
    let Some(problem_id) = parse_args(args) else {
        writeln!(out, "{USAGE}")?;
        return Ok(Outcome::Usage);
    };

    let source = connect()?;
    print_problem(&problem_id, &*source, out).await?;
    Ok(Outcome::Printed)
}

/// Fetch, extract and print one problem.
///
/// Nothing is written to `out` unless the whole pipeline succeeds.
pub async fn print_problem<S, W>(problem_id: &str, source: &S, out: &mut W) -> Result<()>
where
    S: ProblemSource + ?Sized,
    W: Write,
{
    let url = source
        .problem_url(problem_id)
        .with_context(|| format!("invalid problem id {problem_id:?}"))?;

    tracing::info!(%url, "fetching problem");
    let html = source
        .fetch_problem(problem_id)
        .await
        .with_context(|| format!("failed to fetch {url}"))?;

    let problem = parse_problem(&html).with_context(|| format!("failed to parse problem page {url}"))?;

    writeln!(out, "{}", to_markdown(&problem, &url))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use boj2md_client::problem_url;
    use boj2md_core::{ConfigError, Error};
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use url::Url;

    const PAGE: &str = r#"<html><body>
        <span id="problem_title">A+B</span>
        <div id="problem_description"><p>Add two numbers.</p></div>
        <div id="problem_input"><p>Two integers.</p></div>
        <div id="problem_output"><p>Their sum.</p></div>
        <pre class="sampledata">1 2</pre><pre class="sampledata">3</pre>
        <pre class="sampledata">4 5</pre><pre class="sampledata">9</pre>
    </body></html>"#;

    struct FakeSource {
        html: Result<String, fn() -> Error>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn serving(html: &str) -> Self {
            Self { html: Ok(html.to_string()), calls: AtomicUsize::new(0) }
        }

        fn failing(err: fn() -> Error) -> Self {
            Self { html: Err(err), calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProblemSource for FakeSource {
        fn problem_url(&self, problem_id: &str) -> Result<Url, Error> {
            let base = Url::parse("https://www.acmicpc.net").map_err(|e| Error::InvalidUrl(e.to_string()))?;
            problem_url(&base, problem_id)
        }

        async fn fetch_problem(&self, _problem_id: &str) -> Result<String, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.html {
                Ok(html) => Ok(html.clone()),
                Err(make_err) => Err(make_err()),
            }
        }
    }

    async fn run_with(args: &[&str], source: &FakeSource) -> (Result<Outcome>, String) {
        let mut out = Vec::new();
        let result = run(args.iter().copied(), || Ok(source), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    fn broken_config() -> Result<&'static FakeSource> {
        Err(ConfigError::Invalid { field: "max_bytes".into(), reason: "must be greater than 0".into() }.into())
    }

    #[tokio::test]
    async fn test_no_arguments_prints_usage() {
        let source = FakeSource::serving(PAGE);
        let (result, out) = run_with(&["boj2md"], &source).await;

        assert_eq!(result.unwrap(), Outcome::Usage);
        assert_eq!(out, "Usage:\n  boj2md <problem id>\n");
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_two_arguments_prints_usage() {
        let source = FakeSource::serving(PAGE);
        let (result, out) = run_with(&["boj2md", "1000", "1001"], &source).await;

        assert_eq!(result.unwrap(), Outcome::Usage);
        assert_eq!(out.lines().count(), 2);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_flag_prints_usage() {
        let source = FakeSource::serving(PAGE);
        let (result, _) = run_with(&["boj2md", "1000", "--verbose"], &source).await;

        assert_eq!(result.unwrap(), Outcome::Usage);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_prints_markdown() {
        let source = FakeSource::serving(PAGE);
        let (result, out) = run_with(&["boj2md", "1000"], &source).await;

        assert_eq!(result.unwrap(), Outcome::Printed);
        assert_eq!(source.calls(), 1);
        assert!(out.starts_with("# A+B\n\nhttps://www.acmicpc.net/problem/1000\n\nAdd two numbers.\n"));
        assert!(out.contains("## 예제 입력 2\n\n```\n4 5\n```\n\n## 예제 출력 2\n\n```\n9\n```\n"));
        assert!(out.ends_with("```\n\n\n"));
    }

    #[tokio::test]
    async fn test_structure_error_produces_no_output() {
        let source = FakeSource::serving("<html><body><p>Moved</p></body></html>");
        let (result, out) = run_with(&["boj2md", "1000"], &source).await;

        let err = result.unwrap_err();
        let cause = err.downcast_ref::<Error>().unwrap();
        assert!(cause.is_structure_error());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let source = FakeSource::failing(|| Error::HttpError("status 404".into()));
        let (result, out) = run_with(&["boj2md", "31415926"], &source).await;

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("HTTP_ERROR: status 404"));
        assert!(format!("{err:#}").contains("https://www.acmicpc.net/problem/31415926"));
        assert!(out.is_empty());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_id_is_rejected_before_fetch() {
        let source = FakeSource::serving(PAGE);
        let (result, out) = run_with(&["boj2md", ""], &source).await;

        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::InvalidInput(_))));
        assert!(out.is_empty());
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_end_of_options_marker_counts_as_argument() {
        for args in [&["boj2md", "--", "1000"][..], &["boj2md", "1000", "--"][..]] {
            let source = FakeSource::serving(PAGE);
            let (result, out) = run_with(args, &source).await;

            assert_eq!(result.unwrap(), Outcome::Usage, "{args:?}");
            assert_eq!(out, "Usage:\n  boj2md <problem id>\n");
            assert_eq!(source.calls(), 0);
        }
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(["boj2md", "1000"]), Some("1000".to_string()));
        assert_eq!(parse_args(["boj2md", "-1"]), Some("-1".to_string()));
        assert_eq!(parse_args(["boj2md"]), None);
        assert_eq!(parse_args(["boj2md", "1000", "1001"]), None);
        assert_eq!(parse_args(["boj2md", "--", "1000"]), None);
    }

    #[tokio::test]
    async fn test_usage_is_reported_before_config_is_loaded() {
        let connected = Cell::new(false);
        let mut out = Vec::new();
        let result = run(
            ["boj2md"],
            || {
                connected.set(true);
                broken_config()
            },
            &mut out,
        )
        .await;

        assert_eq!(result.unwrap(), Outcome::Usage);
        assert_eq!(String::from_utf8(out).unwrap(), "Usage:\n  boj2md <problem id>\n");
        assert!(!connected.get());
    }

    #[tokio::test]
    async fn test_config_error_surfaces_for_valid_arguments() {
        let mut out = Vec::new();
        let result = run(["boj2md", "1000"], broken_config, &mut out).await;

        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::Invalid { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(format!("{:?}", Outcome::Printed.exit_code()), format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(format!("{:?}", Outcome::Usage.exit_code()), format!("{:?}", ExitCode::from(1)));
    }
}
