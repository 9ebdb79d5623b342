use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, ShowcaseError};

/// A single displayable record: an asset, a service or a gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Opaque token the rendering side uses to pick a visual representation.
    pub visual_key: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        visual_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            visual_key: visual_key.into(),
        }
    }
}

/// Immutable ordered list of items with at least one entry and unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Validates and wraps the provided items.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(ShowcaseError::InvalidCatalogSize(0));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(ShowcaseError::DuplicateItemId(item.id.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Parses a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Reads a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Items sharing a visual key, in catalog order.
    pub fn by_visual_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.visual_key == key)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<Item>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item::new(id, id.to_uppercase(), "", "box")
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidCatalogSize(0)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![item("a"), item("b"), item("a")]).unwrap_err();
        assert!(format!("{err}").contains("`a`"));
    }

    #[test]
    fn parses_json_items() {
        let json = r#"[
            {"id": "hangar", "title": "Hangar", "description": "Big", "visual_key": "hangar"},
            {"id": "stalls", "title": "Stalls", "description": "Booths", "visual_key": "stalls"}
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title, "Stalls");
        assert_eq!(catalog.position_of("hangar"), Some(0));
    }

    #[test]
    fn deserialising_applies_validation() {
        let err = serde_json::from_str::<Catalog>("[]").unwrap_err();
        assert!(err.to_string().contains("at least one item"));
    }

    #[test]
    fn groups_by_visual_key() {
        let catalog = Catalog::new(vec![
            Item::new("a", "A", "", "red"),
            Item::new("b", "B", "", "blue"),
            Item::new("c", "C", "", "red"),
        ])
        .unwrap();

        let ids: Vec<_> = catalog.by_visual_key("red").map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("showcase-catalog-{}.json", std::process::id()));
        fs::write(&path, r#"[{"id": "x", "title": "X", "description": "", "visual_key": "x"}]"#)
            .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(catalog.items()[0].id, "x");
    }
}
