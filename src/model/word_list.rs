use serde::Serialize;

use crate::model::{Category, Word};

/// The words of one category, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordList {
    category: Category,
    words: Vec<Word>,
}

impl WordList {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            words: Vec::new(),
        }
    }

    pub fn from_words(category: Category, words: Vec<Word>) -> Self {
        Self { category, words }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    pub fn get(&self, position: usize) -> Option<&Word> {
        self.words.get(position)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn with_images(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| w.has_image())
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
