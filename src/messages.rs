//! Catalog of terminal-style message templates.
//!
//! Every template carries exactly one `{}` placeholder which receives the
//! current item number. Templates are picked uniformly at random per item.

use crate::{DriverError, RandomSource};

const PLACEHOLDER: &str = "{}";

const DEFAULT_TEMPLATES: [&str; 10] = [
    "Processing record {}.................................................",
    "Encrypting file {}.............................................................",
    "Hashing object {}...........................................................",
    "Uploading chunk {}.......................................................",
    "Compressing segment {}.........................................................",
    "Analyzing packet {}....................................................",
    "Syncing module {}.....................................................................",
    "Compiling kernel {}...........................................................",
    "Verifying block {}...............................................",
    "Storing value {}.........................................................",
];

/// Ordered, immutable set of message templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    templates: Vec<String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl MessageCatalog {
    /// Build a catalog from custom templates.
    ///
    /// Fails when the list is empty or a template does not contain exactly
    /// one `{}` placeholder.
    pub fn new<I, S>(templates: I) -> Result<Self, DriverError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates: Vec<String> = templates.into_iter().map(Into::into).collect();
        if templates.is_empty() {
            return Err(DriverError::EmptyCatalog);
        }
        for (index, template) in templates.iter().enumerate() {
            let placeholders = template.matches(PLACEHOLDER).count();
            if placeholders != 1 {
                return Err(DriverError::InvalidTemplate {
                    index,
                    placeholders,
                });
            }
        }
        Ok(Self { templates })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Render the template at `index` with `value` in place of `{}`.
    ///
    /// Out-of-range indices wrap around the catalog.
    pub fn render(&self, index: usize, value: u64) -> String {
        let template = &self.templates[index % self.templates.len()];
        template.replacen(PLACEHOLDER, &value.to_string(), 1)
    }

    /// Pick one template uniformly at random.
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.next_index(self.templates.len());
        &self.templates[index % self.templates.len()]
    }

    pub fn render_random<R: RandomSource + ?Sized>(&self, rng: &mut R, value: u64) -> String {
        let index = rng.next_index(self.templates.len());
        self.render(index, value)
    }
}
