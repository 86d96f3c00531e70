//! Problem extraction from the judge's problem page.
//!
//! ### Selectors
//! - `#problem_title`: trimmed text content.
//! - `#problem_description`, `#problem_input`, `#problem_output`: converted
//!   with the tag-to-text rules in [`blocks`].
//! - `.sampledata`: every match in document order, trimmed, paired two at a time.
//!
//! A required selector that matches nothing is an error. The page layout has
//! changed and an empty field would hide that.

pub mod blocks;
pub mod samples;

pub use blocks::{Block, render_children, text_content};
pub use samples::pair_samples;

use boj2md_core::{Error, Problem};
use scraper::{ElementRef, Html, Selector};

pub const TITLE_SELECTOR: &str = "#problem_title";
pub const DESCRIPTION_SELECTOR: &str = "#problem_description";
pub const INPUT_SELECTOR: &str = "#problem_input";
pub const OUTPUT_SELECTOR: &str = "#problem_output";
pub const SAMPLE_SELECTOR: &str = ".sampledata";

/// Parse a problem page into a [`Problem`].
pub fn parse_problem(html: &str) -> Result<Problem, Error> {
    let document = Html::parse_document(html);

    let title = text_content(select_first(&document, TITLE_SELECTOR)?)
        .trim()
        .to_string();
    let description = render_children(select_first(&document, DESCRIPTION_SELECTOR)?);
    let input_spec = render_children(select_first(&document, INPUT_SELECTOR)?);
    let output_spec = render_children(select_first(&document, OUTPUT_SELECTOR)?);

    let sample_selector = compile(SAMPLE_SELECTOR)?;
    let sample_texts: Vec<String> = document
        .select(&sample_selector)
        .map(|el| text_content(el).trim().to_string())
        .collect();
    let samples = pair_samples(sample_texts);

    let problem = Problem { title, description, input_spec, output_spec, samples };
    tracing::debug!(title = %problem.title, samples = problem.sample_count(), "parsed problem");

    Ok(problem)
}

fn compile(selector: &str) -> Result<Selector, Error> {
    Selector::parse(selector).map_err(|e| Error::ExtractFailed(format!("invalid selector {selector}: {e}")))
}

/// First element matching `selector`, or a missing-element error.
fn select_first<'a>(document: &'a Html, selector: &str) -> Result<ElementRef<'a>, Error> {
    let compiled = compile(selector)?;
    document
        .select(&compiled)
        .next()
        .ok_or_else(|| Error::MissingElement(selector.to_string()))
}
