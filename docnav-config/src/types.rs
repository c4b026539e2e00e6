//! Sidebar data structures

use crate::{Result, SidebarError};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque identifier of a content document (e.g. `overview/quick-start`)
///
/// Nothing here gives the id structural meaning; the docs generator
/// resolves it against its own content tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A labeled group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display label; not required to be unique
    pub label: String,
    pub items: Vec<Entry>,
}

/// One node of a sidebar tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Direct reference to a document
    Doc(DocId),
    /// Labeled category of further entries
    Category(Category),
}

impl Entry {
    pub fn doc(id: impl Into<DocId>) -> Self {
        Entry::Doc(id.into())
    }

    pub fn category(label: impl Into<String>, items: Vec<Entry>) -> Self {
        Entry::Category(Category {
            label: label.into(),
            items,
        })
    }

    pub fn as_doc(&self) -> Option<&DocId> {
        match self {
            Entry::Doc(id) => Some(id),
            Entry::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Entry::Doc(_) => None,
            Entry::Category(category) => Some(category),
        }
    }

    /// Nesting depth of this entry: 1 for a doc, 1 + deepest child for a category
    pub fn depth(&self) -> usize {
        match self {
            Entry::Doc(_) => 1,
            Entry::Category(category) => {
                1 + category.items.iter().map(Entry::depth).max().unwrap_or(0)
            }
        }
    }

    /// Decode an entry from its structured form.
    ///
    /// Accepted shapes:
    /// - `"some/doc-id"`
    /// - `{ type = "doc", id = "some/doc-id" }`
    /// - `{ type = "category", label = "...", items = [...] }`
    ///
    /// `path` names the entry's position and prefixes every error message.
    pub fn from_value(value: &serde_json::Value, path: &str) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::String(id) => doc_from_str(id, path),
            Value::Object(map) => {
                let kind = match map.get("type") {
                    Some(Value::String(kind)) => kind.as_str(),
                    Some(_) => return Err(malformed(path, "`type` must be a string")),
                    None => return Err(malformed(path, "missing `type` key")),
                };

                match kind {
                    "doc" => {
                        reject_unknown_keys(map, &["type", "id"], path)?;
                        match map.get("id") {
                            Some(Value::String(id)) => doc_from_str(id, path),
                            Some(_) => Err(malformed(path, "`id` must be a string")),
                            None => Err(malformed(path, "doc entry is missing `id`")),
                        }
                    }
                    "category" => {
                        reject_unknown_keys(map, &["type", "label", "items"], path)?;
                        let label = match map.get("label") {
                            Some(Value::String(label)) if !label.trim().is_empty() => label,
                            Some(Value::String(_)) => {
                                return Err(malformed(path, "category label is empty"))
                            }
                            Some(_) => return Err(malformed(path, "`label` must be a string")),
                            None => return Err(malformed(path, "category is missing `label`")),
                        };
                        let items = match map.get("items") {
                            Some(Value::Array(items)) => items
                                .iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    Entry::from_value(item, &format!("{}.items[{}]", path, i))
                                })
                                .collect::<Result<Vec<_>>>()?,
                            Some(_) => return Err(malformed(path, "`items` must be an array")),
                            None => Vec::new(),
                        };
                        Ok(Entry::category(label.clone(), items))
                    }
                    other => Err(malformed(
                        path,
                        &format!("unknown entry type `{}` (expected `doc` or `category`)", other),
                    )),
                }
            }
            other => Err(malformed(
                path,
                &format!(
                    "expected a document id or a category table, found {}",
                    value_kind(other)
                ),
            )),
        }
    }
}

fn doc_from_str(id: &str, path: &str) -> Result<Entry> {
    if id.trim().is_empty() {
        return Err(malformed(path, "document id is empty"));
    }
    Ok(Entry::doc(id))
}

fn reject_unknown_keys(
    map: &serde_json::Map<String, serde_json::Value>,
    allowed: &[&str],
    path: &str,
) -> Result<()> {
    match map.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(malformed(path, &format!("unknown key `{}`", key))),
        None => Ok(()),
    }
}

fn malformed(path: &str, message: &str) -> SidebarError {
    SidebarError::MalformedEntry(format!("{}: {}", path, message))
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Entry::Doc(id) => id.serialize(serializer),
            Entry::Category(category) => {
                let mut state = serializer.serialize_struct("Category", 3)?;
                state.serialize_field("type", "category")?;
                state.serialize_field("label", &category.label)?;
                state.serialize_field("items", &category.items)?;
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Entry::from_value(&value, "entry").map_err(serde::de::Error::custom)
    }
}

/// A document reference together with the category labels leading to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLocation<'a> {
    pub id: &'a DocId,
    pub breadcrumbs: Vec<&'a str>,
}

impl fmt::Display for DocLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.breadcrumbs {
            write!(f, "{} / ", label)?;
        }
        write!(f, "{}", self.id)
    }
}

/// An ordered navigation tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebar(Vec<Entry>);

impl Sidebar {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Entry> {
        self.0.first()
    }

    /// Deepest nesting level (0 for an empty sidebar)
    pub fn depth(&self) -> usize {
        self.0.iter().map(Entry::depth).max().unwrap_or(0)
    }

    /// Every document reference in depth-first order
    pub fn docs(&self) -> Vec<DocLocation<'_>> {
        let mut out = Vec::new();
        let mut trail = Vec::new();
        collect_docs(&self.0, &mut trail, &mut out);
        out
    }

    /// Every category in depth-first order, paired with its depth (top level is 0)
    pub fn categories(&self) -> Vec<(usize, &Category)> {
        let mut out = Vec::new();
        collect_categories(&self.0, 0, &mut out);
        out
    }

    /// First category with the given label, at any depth
    pub fn find_category(&self, label: &str) -> Option<&Category> {
        self.categories()
            .into_iter()
            .map(|(_, category)| category)
            .find(|category| category.label == label)
    }
}

impl<'de> Deserialize<'de> for Sidebar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
        crate::parser::sidebar_from_raw("sidebar", &values).map_err(serde::de::Error::custom)
    }
}

impl From<Vec<Entry>> for Sidebar {
    fn from(entries: Vec<Entry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a Sidebar {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn collect_docs<'a>(
    entries: &'a [Entry],
    trail: &mut Vec<&'a str>,
    out: &mut Vec<DocLocation<'a>>,
) {
    for entry in entries {
        match entry {
            Entry::Doc(id) => out.push(DocLocation {
                id,
                breadcrumbs: trail.clone(),
            }),
            Entry::Category(category) => {
                trail.push(&category.label);
                collect_docs(&category.items, trail, out);
                trail.pop();
            }
        }
    }
}

fn collect_categories<'a>(entries: &'a [Entry], depth: usize, out: &mut Vec<(usize, &'a Category)>) {
    for entry in entries {
        if let Entry::Category(category) = entry {
            out.push((depth, category));
            collect_categories(&category.items, depth + 1, out);
        }
    }
}

/// Named collection of sidebars
///
/// Constructed once and read-only afterwards. Names are kept sorted so
/// iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SidebarConfig {
    sidebars: BTreeMap<String, Sidebar>,
}

impl<'de> Deserialize<'de> for SidebarConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = crate::parser::RawConfig::deserialize(deserializer)?;
        crate::parser::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

impl SidebarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sidebar, replacing any sidebar of the same name
    pub fn insert(&mut self, name: impl Into<String>, sidebar: impl Into<Sidebar>) {
        self.sidebars.insert(name.into(), sidebar.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_sidebar(mut self, name: impl Into<String>, sidebar: impl Into<Sidebar>) -> Self {
        self.insert(name, sidebar);
        self
    }

    /// Look up a sidebar by name
    pub fn get(&self, name: &str) -> Result<&Sidebar> {
        self.sidebars
            .get(name)
            .ok_or_else(|| SidebarError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sidebars.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sidebar)> {
        self.sidebars.iter().map(|(name, sidebar)| (name.as_str(), sidebar))
    }

    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Total number of document references across all sidebars
    pub fn doc_count(&self) -> usize {
        self.sidebars.values().map(|sidebar| sidebar.docs().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Sidebar {
        Sidebar::new(vec![
            Entry::doc("intro"),
            Entry::category(
                "Guides",
                vec![
                    Entry::doc("guides/setup"),
                    Entry::category("Advanced", vec![Entry::doc("guides/advanced/tuning")]),
                ],
            ),
        ])
    }

    #[test]
    fn test_depth() {
        assert_eq!(Sidebar::default().depth(), 0);
        assert_eq!(Sidebar::new(vec![Entry::doc("a")]).depth(), 1);
        assert_eq!(sample().depth(), 3);
        assert_eq!(Entry::category("Empty", vec![]).depth(), 1);
    }

    #[test]
    fn test_docs_breadcrumbs() {
        let sidebar = sample();
        let docs = sidebar.docs();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["intro", "guides/setup", "guides/advanced/tuning"]);
        assert!(docs[0].breadcrumbs.is_empty());
        assert_eq!(docs[2].breadcrumbs, ["Guides", "Advanced"]);
        assert_eq!(docs[2].to_string(), "Guides / Advanced / guides/advanced/tuning");
    }

    #[test]
    fn test_categories_and_find() {
        let sidebar = sample();
        let categories = sidebar.categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].0, 0);
        assert_eq!(categories[1].0, 1);
        assert_eq!(categories[1].1.label, "Advanced");
        assert!(sidebar.find_category("Advanced").is_some());
        assert!(sidebar.find_category("Missing").is_none());
    }

    #[test]
    fn test_get_not_found() {
        let config = SidebarConfig::new().with_sidebar("docs", sample());
        assert!(config.get("docs").is_ok());
        match config.get("missingName") {
            Err(SidebarError::NotFound(name)) => assert_eq!(name, "missingName"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_from_value_long_doc_form() {
        let entry = Entry::from_value(&json!({"type": "doc", "id": "a/b"}), "x").unwrap();
        assert_eq!(entry, Entry::doc("a/b"));
    }

    #[test]
    fn test_from_value_category_without_items() {
        let entry = Entry::from_value(&json!({"type": "category", "label": "L"}), "x").unwrap();
        assert_eq!(entry, Entry::category("L", vec![]));
    }

    #[test]
    fn test_from_value_reports_path() {
        let value = json!({
            "type": "category",
            "label": "Guides",
            "items": ["ok", 42]
        });
        let err = Entry::from_value(&value, "docs[3]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("docs[3].items[1]"), "{}", msg);
        assert!(msg.contains("a number"), "{}", msg);
    }

    #[test]
    fn test_from_value_rejects_bad_shapes() {
        for value in [
            json!(""),
            json!({"label": "no type"}),
            json!({"type": "link", "href": "https://example.com"}),
            json!({"type": "category", "label": "  "}),
            json!({"type": "category", "label": "L", "collapsed": true}),
            json!({"type": "category", "label": "L", "items": "a"}),
            json!({"type": "doc"}),
            json!(null),
        ] {
            assert!(
                matches!(Entry::from_value(&value, "e"), Err(SidebarError::MalformedEntry(_))),
                "accepted {}",
                value
            );
        }
    }

    #[test]
    fn test_serialize_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!([
                "intro",
                {
                    "type": "category",
                    "label": "Guides",
                    "items": [
                        "guides/setup",
                        {
                            "type": "category",
                            "label": "Advanced",
                            "items": ["guides/advanced/tuning"]
                        }
                    ]
                }
            ])
        );
    }

    #[test]
    fn test_serde_rejects_empty_config_and_sidebars() {
        assert!(serde_json::from_str::<SidebarConfig>("{}").is_err());
        let err = serde_json::from_str::<SidebarConfig>(r#"{"a": []}"#).unwrap_err();
        assert!(err.to_string().contains("a: sidebar has no entries"), "{}", err);
        assert!(serde_json::from_str::<Sidebar>("[]").is_err());
    }

    #[test]
    fn test_serde_errors_name_the_position() {
        let err = serde_json::from_str::<SidebarConfig>(
            r#"{"docs": ["ok", {"type": "category", "label": "G", "items": [7]}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("docs[1].items[0]"), "{}", err);
    }
}
