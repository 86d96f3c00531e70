//! The structured record scraped from one problem page.

/// One sample input/output pair shown on the problem page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    pub input: String,
    pub output: String,
}

impl Sample {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self { input: input.into(), output: output.into() }
    }
}

/// A parsed problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Trimmed problem title
    pub title: String,
    /// Problem statement
    pub description: String,
    /// Input specification
    pub input_spec: String,
    /// Output specification
    pub output_spec: String,
    /// Samples in page order
    pub samples: Vec<Sample>,
}

impl Problem {
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
