//! Book model, field validation and the ordered in-memory catalog store.
//!
//! The store itself is a plain value type without any internal locking;
//! [`crate::state::AppState`] wraps it in a `tokio::sync::RwLock` so that
//! concurrent requests cannot lose updates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single catalog entry. The `id` is caller-assigned and unique within
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
}

/// A rejected book due to failing field constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("year out of range")]
    YearOutOfRange,
    #[error("isbn invalid length")]
    IsbnInvalidLength,
}

impl Book {
    /// Checks the field constraints: non-empty title, year within
    /// 1000..=2026, ISBN of exactly 10 or 13 characters. ISBN content is
    /// deliberately not checked (no checksum validation).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if !(1000..=2026).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange);
        }
        let isbn_len = self.isbn.chars().count();
        if isbn_len != 10 && isbn_len != 13 {
            return Err(ValidationError::IsbnInvalidLength);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("book with this id already exists")]
    DuplicateId,
    #[error("book not found")]
    NotFound,
}

/// Ordered collection of books, insertion order preserved. Identifier
/// equality is the sole key.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Returns a cloned snapshot in insertion order.
    pub fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    pub fn get(&self, id: i64) -> Option<Book> {
        self.books.iter().find(|b| b.id == id).cloned()
    }

    /// Appends the book, rejecting an already-present id.
    pub fn create(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.books.iter().any(|b| b.id == book.id) {
            return Err(CatalogError::DuplicateId);
        }
        self.books.push(book);
        Ok(())
    }

    /// Wholesale replacement; the stored id always stays `id`, regardless
    /// of what the new value carries.
    pub fn update(&mut self, id: i64, mut book: Book) -> Result<(), CatalogError> {
        let slot = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CatalogError::NotFound)?;
        book.id = id;
        *slot = book;
        Ok(())
    }

    /// Removes the matching entry, keeping the relative order of the rest.
    pub fn delete(&mut self, id: i64) -> Result<(), CatalogError> {
        let pos = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(CatalogError::NotFound)?;
        self.books.remove(pos);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
