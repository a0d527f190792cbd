use crate::modules::book::Book;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

const MONTHS_SHOWN: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReading {
    /// `YYYY-MM`
    pub month: String,
    pub books: usize,
    pub pages: u64,
}

/// Reading figures over completed books that carry a completion date
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStatistics {
    pub total_books: usize,
    pub total_pages: u64,
    pub average_pages_per_book: u64,
    /// Most recent month first
    pub monthly: Vec<MonthlyReading>,
}

impl ReadingStatistics {
    pub fn from_books(books: &[Book]) -> Self {
        let finished: Vec<(DateTime<Utc>, u64)> = books
            .iter()
            .filter(|book| book.is_completed())
            .filter_map(|book| {
                book.completion_date
                    .map(|date| (date, book.number_of_pages.unwrap_or(0) as u64))
            })
            .collect();

        if finished.is_empty() {
            return Self::default();
        }

        let total_books = finished.len();
        let total_pages: u64 = finished.iter().map(|(_, pages)| pages).sum();
        let average_pages_per_book =
            (total_pages as f64 / total_books as f64).round() as u64;

        let mut by_month: BTreeMap<String, (usize, u64)> = BTreeMap::new();
        for (date, pages) in &finished {
            let entry = by_month.entry(date.format("%Y-%m").to_string()).or_default();
            entry.0 += 1;
            entry.1 += pages;
        }

        let monthly = by_month
            .into_iter()
            .rev()
            .take(MONTHS_SHOWN)
            .map(|(month, (books, pages))| MonthlyReading {
                month,
                books,
                pages,
            })
            .collect();

        Self {
            total_books,
            total_pages,
            average_pages_per_book,
            monthly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::book::ReadingStatus;
    use chrono::TimeZone;

    fn read_in(id: &str, year: i32, month: u32, pages: Option<u32>) -> Book {
        let mut book = Book::new(id, id);
        book.number_of_pages = pages;
        book.mark_completed(Utc.with_ymd_and_hms(year, month, 15, 0, 0, 0).unwrap());
        book
    }

    #[test]
    fn test_empty_library() {
        assert_eq!(ReadingStatistics::from_books(&[]), ReadingStatistics::default());
    }

    #[test]
    fn test_totals_skip_unfinished_and_missing_pages() {
        let mut reading = Book::new("r", "En cours").with_pages(900);
        reading.status = ReadingStatus::Reading;

        let books = vec![
            read_in("a", 2024, 1, Some(200)),
            read_in("b", 2024, 1, Some(101)),
            read_in("c", 2024, 2, None),
            reading,
        ];

        let stats = ReadingStatistics::from_books(&books);
        assert_eq!(stats.total_books, 3);
        assert_eq!(stats.total_pages, 301);
        assert_eq!(stats.average_pages_per_book, 100);
        assert_eq!(stats.monthly[0].month, "2024-02");
        assert_eq!(stats.monthly[1].books, 2);
        assert_eq!(stats.monthly[1].pages, 301);
    }

    #[test]
    fn test_monthly_keeps_six_most_recent() {
        let books: Vec<Book> = (1..=9)
            .map(|month| read_in(&month.to_string(), 2023, month, Some(100)))
            .collect();

        let stats = ReadingStatistics::from_books(&books);
        let months: Vec<_> = stats.monthly.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(
            months,
            vec!["2023-09", "2023-08", "2023-07", "2023-06", "2023-05", "2023-04"]
        );
    }
}
