//! Pairing of `.sampledata` elements into sample input/output pairs.

use boj2md_core::Sample;

/// Pair sample texts consecutively: 1st+2nd, 3rd+4th, and so on.
///
/// An odd count leaves the last input without an output; it is paired with an
/// empty string rather than dropped. That usually means the page markup
/// changed, so it is logged.
pub fn pair_samples(texts: Vec<String>) -> Vec<Sample> {
    if texts.len() % 2 == 1 {
        tracing::warn!(count = texts.len(), "odd number of sample blocks; last output left empty");
    }

    let mut texts = texts.into_iter();
    let mut samples = Vec::with_capacity(texts.len().div_ceil(2));
    while let Some(input) = texts.next() {
        let output = texts.next().unwrap_or_default();
        samples.push(Sample { input, output });
    }
    samples
}
