#[cfg(test)]
mod tests {
    use crate::catalog::{Book, Catalog, CatalogError, ValidationError};

    fn book(id: i64) -> Book {
        Book {
            id,
            title: format!("Book {}", id),
            author: "Author".to_string(),
            year: 2000,
            isbn: "0441172717".to_string(),
        }
    }

    #[test]
    fn validate_accepts_a_well_formed_book() {
        assert_eq!(book(1).validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_title() {
        let mut b = book(1);
        b.title = String::new();
        assert_eq!(b.validate(), Err(ValidationError::EmptyTitle));
        assert_eq!(b.validate().unwrap_err().to_string(), "title must not be empty");
    }

    #[test]
    fn validate_year_boundaries() {
        for (year, expected) in [
            (999, Err(ValidationError::YearOutOfRange)),
            (1000, Ok(())),
            (2026, Ok(())),
            (2027, Err(ValidationError::YearOutOfRange)),
        ] {
            let mut b = book(1);
            b.year = year;
            assert_eq!(b.validate(), expected, "year {}", year);
        }
        let mut b = book(1);
        b.year = 2030;
        assert_eq!(b.validate().unwrap_err().to_string(), "year out of range");
    }

    #[test]
    fn validate_isbn_lengths() {
        for len in [9usize, 11, 12, 14] {
            let mut b = book(1);
            b.isbn = "x".repeat(len);
            assert_eq!(b.validate(), Err(ValidationError::IsbnInvalidLength), "len {}", len);
        }
        // Length is the only constraint; content is deliberately unchecked.
        for isbn in ["abcdefghij", "abc-def-ghijk"] {
            let mut b = book(1);
            b.isbn = isbn.to_string();
            assert_eq!(b.validate(), Ok(()), "isbn {:?}", isbn);
        }
    }

    #[test]
    fn create_then_get_returns_equal_book() {
        let mut catalog = Catalog::new();
        let b = book(7);
        catalog.create(b.clone()).unwrap();
        assert_eq!(catalog.get(7), Some(b));
        assert_eq!(catalog.get(8), None);
    }

    #[test]
    fn create_rejects_duplicate_id_and_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.create(book(1)).unwrap();
        let mut dup = book(1);
        dup.title = "Other".to_string();
        assert_eq!(catalog.create(dup), Err(CatalogError::DuplicateId));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().title, "Book 1");
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut catalog = Catalog::new();
        for id in [3, 1, 2] {
            catalog.create(book(id)).unwrap();
        }
        let ids: Vec<i64> = catalog.list().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn update_replaces_wholesale_and_forces_id() {
        let mut catalog = Catalog::new();
        catalog.create(book(1)).unwrap();
        let replacement = Book {
            id: 99,
            title: "Rewritten".to_string(),
            author: "Someone Else".to_string(),
            year: 2026,
            isbn: "1234567890123".to_string(),
        };
        catalog.update(1, replacement).unwrap();
        let stored = catalog.get(1).unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.title, "Rewritten");
        assert_eq!(stored.author, "Someone Else");
        assert_eq!(catalog.get(99), None);
    }

    #[test]
    fn update_missing_id_fails_and_catalog_is_unchanged() {
        let mut catalog = Catalog::new();
        catalog.create(book(1)).unwrap();
        assert_eq!(catalog.update(2, book(2)), Err(CatalogError::NotFound));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap(), book(1));
    }

    #[test]
    fn delete_removes_exactly_one_entry_preserving_order() {
        let mut catalog = Catalog::new();
        for id in [1, 2, 3, 4] {
            catalog.create(book(id)).unwrap();
        }
        catalog.delete(2).unwrap();
        let ids: Vec<i64> = catalog.list().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(catalog.delete(2), Err(CatalogError::NotFound));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.list().is_empty());
        assert_eq!(catalog.get(1), None);
    }
}
