//! Entry selection by name pattern.

use std::path::Path;

/// Decides which file entries take part in an extraction.
///
/// With no include patterns every entry is selected. An include pattern
/// containing `*` or `?` is glob-matched against the full path; otherwise it
/// must equal the full path or the basename. Exclude patterns drop an entry
/// when they occur as a substring of its path or glob-match it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl EntryFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        if !self.include.is_empty() {
            let included = self.include.iter().any(|f| {
                if has_glob_chars(f) {
                    glob_match(f, name)
                } else {
                    f == name || basename(name) == f.as_str()
                }
            });
            if !included {
                return false;
            }
        }

        !self
            .exclude
            .iter()
            .any(|x| name.contains(x.as_str()) || glob_match(x, name))
    }
}

/// Final path component of an archive entry name.
pub fn basename(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

fn has_glob_chars(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Glob matching supporting `*` (any run) and `?` (one character).
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let text_chars: Vec<char> = text.chars().collect();

    fn do_match(pattern: &[char], text: &[char]) -> bool {
        match (pattern.first(), text.first()) {
            (None, None) => true,
            (Some('*'), _) => {
                do_match(&pattern[1..], text) || (!text.is_empty() && do_match(pattern, &text[1..]))
            }
            (Some('?'), Some(_)) => do_match(&pattern[1..], &text[1..]),
            (Some(p), Some(t)) if *p == *t => do_match(&pattern[1..], &text[1..]),
            _ => false,
        }
    }

    do_match(&pattern_chars, &text_chars)
}
