//! New Book Details
//!
//! 出品時に入力される書誌情報。前後の空白を除去した上で必須。

use kernel::error::app_error::AppResult;
use kernel::validation::required_text;

pub const TITLE_MAX_LENGTH: usize = 255;
pub const AUTHOR_MAX_LENGTH: usize = 255;
pub const GENRE_MAX_LENGTH: usize = 100;

/// Validated title / author / genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl NewBook {
    pub fn new(title: &str, author: &str, genre: &str) -> AppResult<Self> {
        Ok(Self {
            title: required_text("title", title, TITLE_MAX_LENGTH)?,
            author: required_text("author", author, AUTHOR_MAX_LENGTH)?,
            genre: required_text("genre", genre, GENRE_MAX_LENGTH)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed() {
        let book = NewBook::new(" Dune ", "Herbert", " SciFi").unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.genre, "SciFi");
    }

    #[test]
    fn test_each_field_required() {
        for (t, a, g, field) in [
            ("", "Herbert", "SciFi", "title"),
            ("Dune", " ", "SciFi", "author"),
            ("Dune", "Herbert", "", "genre"),
        ] {
            let err = NewBook::new(t, a, g).unwrap_err();
            assert!(err.message().contains(field), "{field}");
        }
    }

    #[test]
    fn test_title_too_long() {
        let title = "x".repeat(TITLE_MAX_LENGTH + 1);
        assert!(NewBook::new(&title, "a", "b").is_err());
    }
}
