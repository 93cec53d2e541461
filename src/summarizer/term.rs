use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// FrequencyTable struct
/// Raw occurrence count of every normalized term in one sentence.
///
/// Terms keep first-seen order, so every matrix derived from a table
/// enumerates its terms in the same order.
///
/// # Examples
/// ```
/// use tfidf_summarizer::FrequencyTable;
/// let mut table = FrequencyTable::new();
/// table.add_term("term1");
/// table.add_term("term2");
/// table.add_term("term1");
///
/// assert_eq!(table.term_count("term1"), 2);
/// assert_eq!(table.term_num(), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<Box<str>, u64>,
    total_term_count: u64,
}

/// Adding terms
impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(Box::from(term)).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> From<&[T]> for FrequencyTable
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut table = FrequencyTable::new();
        table.add_terms(terms);
        table
    }
}

/// Reading counts
impl FrequencyTable {
    /// Iterate terms and their counts in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (&**term, count))
    }

    /// Iterate the distinct terms
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|term| &**term)
    }

    /// Occurrence count for `term`, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// Total number of counted tokens
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// True when nothing countable survived normalization
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}
