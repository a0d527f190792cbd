use crate::modules::book::domain::Book;

/// Language codes accepted for the French catalogue view
pub const FRENCH_LANGUAGE_CODES: [&str; 3] = ["fr", "fre", "fra"];

/// Title/subject keywords that flag reports, theses and other non-books
const TECHNICAL_KEYWORDS: [&str; 20] = [
    "manuel",
    "guide",
    "prospection",
    "minier",
    "minière",
    "géologie",
    "scientifique",
    "technique",
    "rapport",
    "étude",
    "ingénierie",
    "document",
    "actes",
    "conférence",
    "colloque",
    "symposium",
    "proceedings",
    "thèse",
    "mémoire",
    "doctorat",
];

/// True when one of the book's language codes is in `accepted`.
/// Books without language metadata never match.
pub fn matches_language(book: &Book, accepted: &[&str]) -> bool {
    book.language.iter().any(|code| {
        let code = code.trim();
        accepted.iter().any(|wanted| code.eq_ignore_ascii_case(wanted))
    })
}

pub fn retain_languages(books: Vec<Book>, accepted: &[&str]) -> Vec<Book> {
    books
        .into_iter()
        .filter(|book| matches_language(book, accepted))
        .collect()
}

/// Drop manuals, reports, conference proceedings and the like.
pub fn filter_non_book_results(books: Vec<Book>) -> Vec<Book> {
    books
        .into_iter()
        .filter(|book| !looks_technical(book))
        .collect()
}

fn looks_technical(book: &Book) -> bool {
    let haystack = format!(
        "{} {} {} {}",
        book.title,
        book.author.join(" "),
        book.subjects.join(" "),
        book.description
    )
    .to_lowercase();

    TECHNICAL_KEYWORDS
        .iter()
        .any(|keyword| haystack.contains(keyword))
}
