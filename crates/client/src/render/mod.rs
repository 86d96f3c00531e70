//! Markdown rendering of a parsed problem.
//!
//! Headings are the judge's own Korean section names. Extracted text is
//! written as scraped, without Markdown escaping.
//!
//! Document layout:
//! ```text
//! # <title>
//!
//! <problem url>
//!
//! <description>
//!
//! ## 입력
//!
//! <input spec>
//!
//! ## 출력
//!
//! <output spec>
//!
//! <sample blocks>
//! ```

use boj2md_core::{Problem, Sample};
use url::Url;

pub const INPUT_HEADING: &str = "입력";
pub const OUTPUT_HEADING: &str = "출력";
pub const SAMPLE_INPUT_HEADING: &str = "예제 입력";
pub const SAMPLE_OUTPUT_HEADING: &str = "예제 출력";

/// Render `problem` as Markdown, linking to `url`.
pub fn to_markdown(problem: &Problem, url: &Url) -> String {
    format!(
        "# {title}\n\n{url}\n\n{description}\n\n## {INPUT_HEADING}\n\n{input}\n\n## {OUTPUT_HEADING}\n\n{output}\n\n{samples}\n",
        title = problem.title,
        url = url.as_str(),
        description = problem.description,
        input = problem.input_spec,
        output = problem.output_spec,
        samples = samples_to_markdown(&problem.samples),
    )
}

/// One block per sample, numbered from 1, joined by a newline.
pub fn samples_to_markdown(samples: &[Sample]) -> String {
    samples
        .iter()
        .enumerate()
        .map(|(idx, sample)| sample_block(idx + 1, sample))
        .collect::<Vec<_>>()
        .join("\n")
}

fn sample_block(index: usize, sample: &Sample) -> String {
    format!(
        "## {SAMPLE_INPUT_HEADING} {index}\n\n```\n{input}\n```\n\n## {SAMPLE_OUTPUT_HEADING} {index}\n\n```\n{output}\n```\n",
        input = sample.input,
        output = sample.output,
    )
}
