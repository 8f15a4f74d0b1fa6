use crate::catalog::{default_records, validate_records, CatalogError, ImageRecord};

/// Owns the ordered catalog. The order only changes through [`GridController::reorder`].
#[derive(Clone, Debug, PartialEq)]
pub struct GridController {
    records: Vec<ImageRecord>,
}

impl GridController {
    pub fn new(records: Vec<ImageRecord>) -> Result<Self, CatalogError> {
        let records = validate_records(records)?;
        Ok(Self { records })
    }

    pub fn with_default_catalog() -> Self {
        Self {
            records: default_records(),
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&ImageRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Moves `source_id` into the slot held by `target_id`, shifting the records
    /// in between by one. Returns false and leaves the order alone when the ids
    /// are equal or either one is missing.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> bool {
        if source_id == target_id {
            return false;
        }
        let Some(from) = self.position(source_id) else {
            return false;
        };
        let Some(to) = self.position(target_id) else {
            return false;
        };
        let moved = self.records.remove(from);
        self.records.insert(to, moved);
        true
    }

    pub fn filtered_view<'a>(&'a self, query: &str) -> FilteredView<'a> {
        FilteredView {
            records: self.records.iter(),
            needle: query.to_lowercase(),
        }
    }

    pub fn has_matches(&self, query: &str) -> bool {
        self.filtered_view(query).next().is_some()
    }
}

impl Default for GridController {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

pub fn tag_matches(tag: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || tag.to_lowercase().contains(needle_lower)
}

/// Records whose tag contains the query, case-insensitively, in catalog order.
/// Cloning restarts from the current position.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    records: std::slice::Iter<'a, ImageRecord>,
    needle: String,
}

impl<'a> Iterator for FilteredView<'a> {
    type Item = &'a ImageRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.records.find(|record| tag_matches(&record.tag, needle))
    }
}
