// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use crate::errors::SrrError;
use crate::platform::Platform;

pub const DEFAULT_THREADS: &str = "4";

/// Everything the script generator needs. Only [`JobConfig::from_form`] builds one, so a
/// `JobConfig` always satisfies the form's invariants: at least one identifier, a positive thread
/// count and a chosen output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct JobConfig {
    pub identifiers: Vec<String>,
    pub thread_count: u32,
    pub output_directory: PathBuf,
    pub platform: Platform,
}

impl JobConfig {
    /// Validates raw form input. Checks run in a fixed order (identifiers, threads, directory) and
    /// the first failure is returned.
    pub fn from_form(
        identifier_text: &str,
        thread_text: &str,
        output_directory: Option<&PathBuf>,
        platform: Platform,
    ) -> Result<JobConfig, SrrError> {
        let identifiers = parse_identifiers(identifier_text);
        if identifiers.is_empty() {
            return Err(SrrError::Input(String::from(
                "Please paste SRR accession codes.",
            )));
        }
        let thread_count = parse_thread_count(thread_text).ok_or_else(|| {
            SrrError::Input(String::from("Please enter a valid number for threads."))
        })?;
        let output_directory = match output_directory {
            Some(dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => {
                return Err(SrrError::Directory(String::from(
                    "Please select an output directory.",
                )))
            }
        };
        Ok(JobConfig {
            identifiers,
            thread_count,
            output_directory,
            platform,
        })
    }
}

// Every Unicode line boundary ends a line, not just '\n': pasted text may use bare '\r'.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

// One identifier per line; surrounding whitespace is dropped and blank lines are skipped. No
// attempt is made to check the accession format.
pub fn parse_identifiers(text: &str) -> Vec<String> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

// Digits only (no sign, no whitespace), and not zero.
pub fn parse_thread_count(text: &str) -> Option<u32> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match text.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers_skips_blank_lines() {
        let ids = parse_identifiers("SRR000001\n\n   \nSRR000002\n");
        assert_eq!(ids, vec!["SRR000001", "SRR000002"]);
    }

    #[test]
    fn test_parse_identifiers_other_line_breaks() {
        assert_eq!(
            parse_identifiers("SRR000001\rSRR000002\r"),
            vec!["SRR000001", "SRR000002"]
        );
        assert_eq!(
            parse_identifiers("SRR1\x0bSRR2\x0cSRR3\x1cSRR4\x1dSRR5\x1eSRR6"),
            vec!["SRR1", "SRR2", "SRR3", "SRR4", "SRR5", "SRR6"]
        );
        assert_eq!(
            parse_identifiers("SRR7\u{85}SRR8\u{2028}SRR9\u{2029}"),
            vec!["SRR7", "SRR8", "SRR9"]
        );
    }

    #[test]
    fn test_parse_identifiers_trims_and_keeps_order() {
        let ids = parse_identifiers("  SRR3\r\nERR2  \n\tDRR1");
        assert_eq!(ids, vec!["SRR3", "ERR2", "DRR1"]);
    }

    #[test]
    fn test_parse_identifiers_accepts_any_token() {
        // No format check: anything non-blank is an identifier.
        let ids = parse_identifiers("not-an-accession");
        assert_eq!(ids, vec!["not-an-accession"]);
    }

    #[test]
    fn test_parse_thread_count() {
        assert_eq!(parse_thread_count("4"), Some(4));
        assert_eq!(parse_thread_count("16"), Some(16));
        assert_eq!(parse_thread_count("abc"), None);
        assert_eq!(parse_thread_count(""), None);
        assert_eq!(parse_thread_count("-2"), None);
        assert_eq!(parse_thread_count("+2"), None);
        assert_eq!(parse_thread_count(" 4"), None);
        assert_eq!(parse_thread_count("0"), None);
        assert_eq!(parse_thread_count("99999999999999999999"), None);
    }

    #[test]
    fn test_from_form_ok() {
        let dir = PathBuf::from("/tmp/out");
        let job = JobConfig::from_form("SRR000001\nSRR000002", "4", Some(&dir), Platform::Posix)
            .unwrap();
        assert_eq!(job.identifiers, vec!["SRR000001", "SRR000002"]);
        assert_eq!(job.thread_count, 4);
        assert_eq!(job.output_directory, dir);
    }

    #[test]
    fn test_from_form_validation_order() {
        let dir = PathBuf::from("/tmp/out");
        // Everything is wrong: the identifiers are reported first.
        let err = JobConfig::from_form(" \n ", "abc", None, Platform::Posix).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input Error: Please paste SRR accession codes."
        );
        let err = JobConfig::from_form("SRR1", "abc", None, Platform::Posix).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input Error: Please enter a valid number for threads."
        );
        let err = JobConfig::from_form("SRR1", "4", None, Platform::Posix).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Directory Error: Please select an output directory."
        );
        let empty = PathBuf::new();
        let err = JobConfig::from_form("SRR1", "4", Some(&empty), Platform::Posix).unwrap_err();
        assert!(matches!(err, SrrError::Directory(_)));
        assert!(JobConfig::from_form("SRR1", "4", Some(&dir), Platform::Windows).is_ok());
    }
}
