use std::collections::HashSet;

use crate::modules::book::domain::Book;

/// Remove books that collide on [`Book::identity_key`].
///
/// The first occurrence wins and the relative order of the survivors is kept,
/// so applying the filter twice is the same as applying it once.
pub fn remove_duplicate_books(books: Vec<Book>) -> Vec<Book> {
    let mut seen = HashSet::with_capacity(books.len());
    books
        .into_iter()
        .filter(|book| seen.insert(book.identity_key()))
        .collect()
}
