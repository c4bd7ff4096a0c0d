//! Search patterns compiled from user supplied regular expressions.

use crate::error::{Result, TodosError};
use regex_lite::{Regex, RegexBuilder};
use std::fmt;

/// One search pattern: the text given by the user and its compiled form.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub text: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(text: &str, ignore_case: bool) -> Result<Self> {
        let regex = RegexBuilder::new(text)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|source| TodosError::InvalidPattern {
                pattern: text.to_string(),
                source,
            })?;
        Ok(Pattern {
            text: text.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Compile all patterns, keeping their order. Repeated texts are compiled once.
pub fn compile_patterns(texts: &[String], ignore_case: bool) -> Result<Vec<Pattern>> {
    let mut patterns: Vec<Pattern> = Vec::with_capacity(texts.len());
    for text in texts {
        if patterns.iter().any(|p| &p.text == text) {
            continue;
        }
        patterns.push(Pattern::new(text, ignore_case)?);
    }
    Ok(patterns)
}
