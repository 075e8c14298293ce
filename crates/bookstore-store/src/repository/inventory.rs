//! # In-Memory Inventory
//!
//! Book records keyed by title.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RwLock<HashMap<title, Arc<Mutex<Book>>>>                               │
//! │                                                                         │
//! │  find / update an existing title:                                      │
//! │     read-lock index ──► clone Arc ──► release index ──► lock record    │
//! │                                                                         │
//! │  register a new title:                                                 │
//! │     write-lock index ──► insert                                        │
//! │                                                                         │
//! │  Two carts touching different titles never wait on each other.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use bookstore_core::{Book, Inventory};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

type BookRecord = Arc<Mutex<Book>>;

/// Inventory held in process memory.
///
/// ## Usage
/// ```rust
/// use bookstore_core::{Book, Inventory, Money};
/// use bookstore_store::InMemoryInventory;
///
/// let inventory = InMemoryInventory::new();
/// inventory.add(Book::new("Clean Code", Money::from_units(60), 10).unwrap());
///
/// let book = inventory.find_by_title("Clean Code").unwrap();
/// assert_eq!(book.copies(), 10);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    books: RwLock<HashMap<String, BookRecord>>,
}

impl InMemoryInventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory pre-loaded with `books`.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let inventory = Self::new();
        for book in books {
            inventory.add(book);
        }
        inventory
    }

    fn record(&self, title: &str) -> Option<BookRecord> {
        self.books
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(title)
            .cloned()
    }

    /// Takes `quantity` copies of `title` out of stock and returns the
    /// updated record.
    ///
    /// # Errors
    /// - `NotFound` if the title is unknown
    /// - `Core(InsufficientStock)` if fewer copies remain; stock is unchanged
    pub fn remove_copies(&self, title: &str, quantity: i64) -> StoreResult<Book> {
        let record = self
            .record(title)
            .ok_or_else(|| StoreError::not_found("Book", title))?;

        let mut book = record.lock().unwrap_or_else(PoisonError::into_inner);
        book.take_copies(quantity)?;

        debug!(title, quantity, remaining = book.copies(), "Removed copies from stock");
        Ok(book.clone())
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.books.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Checks if the inventory holds no titles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All titles, sorted.
    pub fn titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self
            .books
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        titles.sort();
        titles
    }
}

impl Inventory for InMemoryInventory {
    fn add(&self, book: Book) {
        if let Some(record) = self.record(book.title()) {
            debug!(title = book.title(), copies = book.copies(), "Replacing book");
            *record.lock().unwrap_or_else(PoisonError::into_inner) = book;
            return;
        }

        debug!(title = book.title(), copies = book.copies(), "Registering book");
        let mut books = self.books.write().unwrap_or_else(PoisonError::into_inner);
        match books.get(book.title()) {
            // Registered by someone else between the read and the write lock
            Some(record) => *record.lock().unwrap_or_else(PoisonError::into_inner) = book,
            None => {
                books.insert(book.title().to_string(), Arc::new(Mutex::new(book)));
            }
        }
    }

    fn find_by_title(&self, title: &str) -> Option<Book> {
        self.record(title)
            .map(|record| record.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }
}
