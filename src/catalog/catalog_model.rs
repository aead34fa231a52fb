use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Selector entries
// ============================================================================

/// Which attribute a locator value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatorKind {
    Id,
    Class,
    Name,
}

impl LocatorKind {
    /// CSS form of a locator value (`#id`, `.class`, `[name="..."]`).
    pub fn css(&self, value: &str) -> String {
        match self {
            LocatorKind::Id => format!("#{}", value),
            LocatorKind::Class => format!(".{}", value),
            LocatorKind::Name => format!("[name=\"{}\"]", value),
        }
    }
}

/// One located UI element on the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorEntry {
    /// Purpose label, unique within its category
    pub role: String,
    pub locator_kind: LocatorKind,
    pub locator_value: String,

    /// Auxiliary attributes (declared input type, radio value, data-id, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl SelectorEntry {
    pub fn new(role: impl Into<String>, kind: LocatorKind, value: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            locator_kind: kind,
            locator_value: value.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an auxiliary attribute, skipping absent values.
    pub fn with_attribute(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.attributes.insert(name.to_string(), v.to_string());
        }
        self
    }

    pub fn css(&self) -> String {
        self.locator_kind.css(&self.locator_value)
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Buttons,
    Inputs,
    ProductCards,
    CartElements,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Buttons,
        Category::Inputs,
        Category::ProductCards,
        Category::CartElements,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Buttons => "buttons",
            Category::Inputs => "inputs",
            Category::ProductCards => "product_cards",
            Category::CartElements => "cart_elements",
        }
    }
}

/// Interactive elements of the checkout page grouped by category.
///
/// Rebuilt wholesale from markup; never updated in place after building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorCatalog {
    #[serde(default)]
    pub buttons: Vec<SelectorEntry>,
    #[serde(default)]
    pub inputs: Vec<SelectorEntry>,
    #[serde(default)]
    pub product_cards: Vec<SelectorEntry>,
    #[serde(default)]
    pub cart_elements: Vec<SelectorEntry>,
}

impl SelectorCatalog {
    pub fn entries(&self, category: Category) -> &[SelectorEntry] {
        match category {
            Category::Buttons => &self.buttons,
            Category::Inputs => &self.inputs,
            Category::ProductCards => &self.product_cards,
            Category::CartElements => &self.cart_elements,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<SelectorEntry> {
        match category {
            Category::Buttons => &mut self.buttons,
            Category::Inputs => &mut self.inputs,
            Category::ProductCards => &mut self.product_cards,
            Category::CartElements => &mut self.cart_elements,
        }
    }

    /// Add an entry. Returns `false` (and keeps the first entry) when the
    /// category already holds the role.
    pub fn insert(&mut self, category: Category, entry: SelectorEntry) -> bool {
        let entries = self.entries_mut(category);
        if entries.iter().any(|e| e.role == entry.role) {
            return false;
        }
        entries.push(entry);
        true
    }

    pub fn find(&self, category: Category, role: &str) -> Option<&SelectorEntry> {
        self.entries(category).iter().find(|e| e.role == role)
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.entries(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether some entry matches a `#id` or `.class` locator string.
    pub fn contains_locator(&self, locator: &str) -> bool {
        let (kind, value) = if let Some(id) = locator.strip_prefix('#') {
            (LocatorKind::Id, id)
        } else if let Some(class) = locator.strip_prefix('.') {
            (LocatorKind::Class, class)
        } else {
            (LocatorKind::Name, locator)
        };

        Category::ALL.iter().any(|c| {
            self.entries(*c)
                .iter()
                .any(|e| e.locator_kind == kind && e.locator_value == value)
        })
    }
}

/// Result of scanning the checkout page: selectors plus display-only features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCatalog {
    pub selectors: SelectorCatalog,

    /// Human-readable feature-presence strings, e.g. "Discount Coupon System"
    pub features: Vec<String>,
}

impl PageCatalog {
    /// Degraded catalog used when the page could not be read or scanned.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty() && self.features.is_empty()
    }
}
