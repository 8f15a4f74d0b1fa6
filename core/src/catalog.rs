use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub tag: &'static str,
    pub src: &'static str,
}

pub const DEFAULT_CATALOG: &[CatalogEntry] = &[
    CatalogEntry { id: "0", label: "About", tag: "Thinker", src: "assets/about.jpg" },
    CatalogEntry { id: "1", label: "Paint", tag: "Paint", src: "assets/1.jpg" },
    CatalogEntry { id: "2", label: "City", tag: "City", src: "assets/2.jpg" },
    CatalogEntry { id: "3", label: "Tree", tag: "Tree", src: "assets/3.jpg" },
    CatalogEntry { id: "4", label: "Black", tag: "Black", src: "assets/4.jpg" },
    CatalogEntry { id: "5", label: "Fire", tag: "Fire", src: "assets/5.jpg" },
    CatalogEntry { id: "6", label: "Africa", tag: "Africa", src: "assets/6.jpeg" },
    CatalogEntry { id: "7", label: "Beach", tag: "Beach", src: "assets/7.jpeg" },
    CatalogEntry { id: "8", label: "Picnic", tag: "Picnic", src: "assets/8.jpeg" },
    CatalogEntry { id: "9", label: "Kitchen", tag: "Kitchen", src: "assets/9.jpeg" },
    CatalogEntry { id: "10", label: "Women", tag: "Women", src: "assets/10.jpeg" },
    CatalogEntry { id: "11", label: "Temi", tag: "Temi", src: "assets/temi.jpg" },
];

/// One image shown in the grid. Only its position in the catalog ever changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    /// Asset reference handed to the page as-is.
    pub src: String,
    pub label: String,
    pub tag: String,
}

impl ImageRecord {
    pub fn new(id: &str, src: &str, label: &str, tag: &str) -> Self {
        Self {
            id: id.to_string(),
            src: src.to_string(),
            label: label.to_string(),
            tag: tag.to_string(),
        }
    }
}

impl From<&CatalogEntry> for ImageRecord {
    fn from(entry: &CatalogEntry) -> Self {
        Self::new(entry.id, entry.src, entry.label, entry.tag)
    }
}

pub fn default_records() -> Vec<ImageRecord> {
    DEFAULT_CATALOG.iter().map(ImageRecord::from).collect()
}

/// Rejects record lists that reuse an id; returns them untouched otherwise.
pub fn validate_records(records: Vec<ImageRecord>) -> Result<Vec<ImageRecord>, CatalogError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if let Some(first) = seen.insert(record.id.as_str(), index) {
            return Err(CatalogError::DuplicateId {
                id: record.id.clone(),
                first,
                second: index,
            });
        }
    }
    Ok(records)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateId { id: String, first: usize, second: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateId { id, first, second } => {
                write!(f, "image id '{id}' used at positions {first} and {second}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
