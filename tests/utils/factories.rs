/// Test data factories using builder pattern
use bookshelf_lib::modules::book::Book;
use bookshelf_lib::modules::provider::domain::{IndustryIdentifier, RawBook};

pub struct RawBookFactory {
    raw: RawBook,
}

impl RawBookFactory {
    pub fn new(id: &str) -> Self {
        let mut raw = RawBook::new(id, Some(format!("Livre {}", id).as_str()));
        raw.authors = vec!["Albert Camus".to_string()];
        raw.languages = vec!["fr".to_string()];
        Self { raw }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.raw.title = Some(title.to_string());
        self
    }

    pub fn untitled(mut self) -> Self {
        self.raw.title = None;
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.raw.authors = vec![author.to_string()];
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.raw.languages = vec![language.to_string()];
        self
    }

    pub fn isbn13(mut self, isbn: &str) -> Self {
        self.raw
            .industry_identifiers
            .push(IndustryIdentifier::isbn13(isbn));
        self
    }

    pub fn build(self) -> RawBook {
        self.raw
    }
}

/// `count` French books by distinct authors, ids `{prefix}{n}`
pub fn raw_books(prefix: &str, count: usize) -> Vec<RawBook> {
    (0..count)
        .map(|n| {
            RawBookFactory::new(&format!("{}{}", prefix, n))
                .author(&format!("Auteur {}{}", prefix, n))
                .build()
        })
        .collect()
}

pub fn saved_book(id: &str, title: &str, author: &str) -> Book {
    Book::new(id, title).with_authors(vec![author.to_string()])
}
