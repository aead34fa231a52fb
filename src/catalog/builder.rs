use std::path::Path;

use crate::catalog::catalog_model::{
    Category, LocatorKind, PageCatalog, SelectorCatalog, SelectorEntry,
};
use crate::catalog::known;
use crate::catalog::markup::{Tag, scan_tags};
use crate::error::QaError;

// ============================================================================
// Catalog building
// ============================================================================

/// Build the catalog for the checkout page markup.
///
/// Any scan failure degrades to an empty catalog; the failure is logged and
/// never returned to the caller.
pub fn build(markup: &str) -> PageCatalog {
    match try_build(markup) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(error = %e, "could not scan page markup, using empty catalog");
            PageCatalog::empty()
        }
    }
}

/// Read and build the catalog for the page at `path`.
///
/// A missing or unreadable file degrades to an empty catalog.
pub fn load_page(path: impl AsRef<Path>) -> PageCatalog {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(markup) => {
            let catalog = build(&markup);
            tracing::info!(
                page = %path.display(),
                selectors = catalog.selectors.len(),
                features = catalog.features.len(),
                "loaded page catalog"
            );
            catalog
        }
        Err(e) => {
            let err = QaError::io(path, e);
            tracing::warn!(error = %err, "page not loaded, using empty catalog");
            PageCatalog::empty()
        }
    }
}

/// Strict variant of [`build`] that reports scan failures.
pub fn try_build(markup: &str) -> Result<PageCatalog, QaError> {
    let tags = scan_tags(markup)?;

    let mut selectors = SelectorCatalog::default();
    collect_buttons(&tags, &mut selectors);
    collect_inputs(&tags, &mut selectors);
    collect_product_cards(&tags, &mut selectors);
    collect_cart_elements(&tags, &mut selectors);

    Ok(PageCatalog {
        selectors,
        features: extract_features(&tags),
    })
}

fn find_by_id<'a>(tags: &'a [Tag], id: &str) -> Option<&'a Tag> {
    tags.iter().find(|t| t.id() == Some(id))
}

fn insert(selectors: &mut SelectorCatalog, category: Category, entry: SelectorEntry) {
    let role = entry.role.clone();
    if !selectors.insert(category, entry) {
        tracing::debug!(category = category.label(), %role, "duplicate role skipped");
    }
}

fn collect_buttons(tags: &[Tag], selectors: &mut SelectorCatalog) {
    for tag in tags
        .iter()
        .filter(|t| t.is("button") && t.has_class(known::ADD_TO_CART_CLASS))
    {
        let role = match tag.attr("data-id") {
            Some(id) => format!("add_to_cart_{}", id),
            None => "add_to_cart".to_string(),
        };
        let entry = SelectorEntry::new(role, LocatorKind::Class, known::ADD_TO_CART_CLASS)
            .with_attribute("data-id", tag.attr("data-id"));
        insert(selectors, Category::Buttons, entry);
    }

    for (id, role) in known::BUTTONS_BY_ID {
        let Some(tag) = tags.iter().find(|t| t.is("button") && t.id() == Some(id)) else {
            continue;
        };
        let entry =
            SelectorEntry::new(role, LocatorKind::Id, id).with_attribute("class", tag.attr("class"));
        insert(selectors, Category::Buttons, entry);
    }
}

fn collect_inputs(tags: &[Tag], selectors: &mut SelectorCatalog) {
    for (id, role) in known::INPUTS_BY_ID {
        let Some(tag) = find_by_id(tags, id) else {
            continue;
        };
        let declared_type = tag.attr("type").unwrap_or(tag.name.as_str());
        let entry = SelectorEntry::new(role, LocatorKind::Id, id)
            .with_attribute("name", tag.attr("name"))
            .with_attribute("type", Some(declared_type));
        insert(selectors, Category::Inputs, entry);
    }

    for tag in tags.iter().filter(|t| is_radio(t)) {
        let group = tag.attr("name").unwrap_or("radio");
        let value = tag.attr("value").or(tag.id()).unwrap_or("on");
        let role = format!("{}_{}", group, value);

        let (kind, locator) = match (tag.id(), tag.attr("name")) {
            (Some(id), _) => (LocatorKind::Id, id),
            (None, Some(name)) => (LocatorKind::Name, name),
            (None, None) => continue,
        };

        let entry = SelectorEntry::new(role, kind, locator)
            .with_attribute("name", tag.attr("name"))
            .with_attribute("value", tag.attr("value"))
            .with_attribute("type", Some("radio"));
        insert(selectors, Category::Inputs, entry);
    }
}

fn collect_product_cards(tags: &[Tag], selectors: &mut SelectorCatalog) {
    for (index, tag) in product_cards(tags).enumerate() {
        let role = match tag.attr("data-id") {
            Some(id) => format!("product_{}", id),
            None => format!("product_{}", index + 1),
        };
        let entry = SelectorEntry::new(role, LocatorKind::Class, known::PRODUCT_CARD_CLASS)
            .with_attribute("data-id", tag.attr("data-id"));
        insert(selectors, Category::ProductCards, entry);
    }
}

fn collect_cart_elements(tags: &[Tag], selectors: &mut SelectorCatalog) {
    for (id, role) in known::CART_SUMMARY_BY_ID {
        if find_by_id(tags, id).is_some() {
            insert(
                selectors,
                Category::CartElements,
                SelectorEntry::new(role, LocatorKind::Id, id),
            );
        }
    }
}

fn is_radio(tag: &Tag) -> bool {
    tag.is("input")
        && tag
            .attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("radio"))
}

fn product_cards(tags: &[Tag]) -> impl Iterator<Item = &Tag> {
    tags.iter()
        .filter(|t| t.is("div") && t.has_class(known::PRODUCT_CARD_CLASS))
}

fn radio_group<'a>(tags: &'a [Tag], group: &'a str) -> impl Iterator<Item = &'a Tag> {
    tags.iter()
        .filter(move |t| t.is("input") && t.attr("name") == Some(group))
}

// ============================================================================
// Feature detection (display only)
// ============================================================================

/// Describe which checkout features the page exposes.
pub fn extract_features(tags: &[Tag]) -> Vec<String> {
    let mut features = Vec::new();

    let products = product_cards(tags).count();
    if products > 0 {
        features.push(format!("Product Catalog ({} products)", products));
    }

    if find_by_id(tags, known::COUPON_ID).is_some() {
        features.push("Discount Coupon System".to_string());
    }

    if radio_group(tags, known::SHIPPING_GROUP).next().is_some() {
        features.push("Shipping Method Selection".to_string());
    }

    let methods: Vec<&str> = radio_group(tags, known::PAYMENT_GROUP)
        .filter_map(|t| t.attr("value"))
        .collect();
    if radio_group(tags, known::PAYMENT_GROUP).next().is_some() {
        features.push(format!("Payment Methods: {}", methods.join(", ")));
    }

    if tags
        .iter()
        .any(|t| t.is("div") && t.has_class(known::INPUT_ERROR_CLASS))
    {
        features.push("Form Validation".to_string());
    }

    features
}
