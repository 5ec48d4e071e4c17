//! Book Search Filter
//!
//! Each supplied field is an independent case-insensitive substring
//! predicate; the predicates are AND'ed. Blank values impose nothing.

use kernel::validation::optional_filter;

use crate::domain::entity::book::Book;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub genre: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookFilter {
    pub fn new(genre: Option<&str>, title: Option<&str>, author: Option<&str>) -> Self {
        Self {
            genre: optional_filter(genre),
            title: optional_filter(title),
            author: optional_filter(author),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.title.is_none() && self.author.is_none()
    }

    /// In-process evaluation, equivalent to `ILIKE '%value%'`
    pub fn matches(&self, book: &Book) -> bool {
        contains_ci(&book.genre, self.genre.as_deref())
            && contains_ci(&book.title, self.title.as_deref())
            && contains_ci(&book.author, self.author.as_deref())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// `%value%` with LIKE metacharacters escaped (escape character `\`)
pub fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
