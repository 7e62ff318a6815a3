//! Id lookups over a data standard.
//!
//! Source documents do not guarantee unique ids. Every lookup resolves to the
//! first entity in declared order; later duplicates are logged and ignored.

use std::collections::HashMap;

use tracing::warn;

use ds_model::{Attribute, AttributeLink, Category, DataStandard};

use crate::error::{LinkOwner, ReportError, Result};

/// Id maps over a borrowed [`DataStandard`], built once and reused per report.
#[derive(Debug, Clone)]
pub struct StandardIndex<'a> {
    standard: &'a DataStandard,
    categories: HashMap<&'a str, usize>,
    attributes: HashMap<&'a str, usize>,
    /// Positions of the categories naming each parent id, in declared order.
    children: HashMap<&'a str, Vec<usize>>,
}

impl<'a> StandardIndex<'a> {
    pub fn new(standard: &'a DataStandard) -> Self {
        let mut categories = HashMap::with_capacity(standard.categories.len());
        let mut children: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (position, category) in standard.categories.iter().enumerate() {
            if categories.contains_key(category.id.as_str()) {
                warn!(category_id = %category.id, position, "duplicate category id, keeping first");
            } else {
                categories.insert(category.id.as_str(), position);
            }
            if let Some(parent_id) = category.parent_id.as_deref() {
                children.entry(parent_id).or_default().push(position);
            }
        }

        let mut attributes = HashMap::with_capacity(standard.attributes.len());
        for (position, attribute) in standard.attributes.iter().enumerate() {
            if attributes.contains_key(attribute.id.as_str()) {
                warn!(attribute_id = %attribute.id, position, "duplicate attribute id, keeping first");
            } else {
                attributes.insert(attribute.id.as_str(), position);
            }
        }

        Self {
            standard,
            categories,
            attributes,
            children,
        }
    }

    pub fn standard(&self) -> &'a DataStandard {
        self.standard
    }

    pub fn category(&self, id: &str) -> Option<&'a Category> {
        self.categories
            .get(id)
            .map(|&position| &self.standard.categories[position])
    }

    pub fn attribute(&self, id: &str) -> Option<&'a Attribute> {
        self.attributes
            .get(id)
            .map(|&position| &self.standard.attributes[position])
    }

    /// Categories whose parent is `id`, in declared order.
    ///
    /// Every category carrying the parent id is returned, duplicates included.
    pub fn children(&self, id: &str) -> impl DoubleEndedIterator<Item = &'a Category> + '_ {
        let standard = self.standard;
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&position| &standard.categories[position])
    }

    /// Resolve a link to its attribute, naming `owner` when it dangles.
    pub fn resolve_link(
        &self,
        link: &AttributeLink,
        owner: impl FnOnce() -> LinkOwner,
    ) -> Result<&'a Attribute> {
        self.attribute(&link.id)
            .ok_or_else(|| ReportError::AttributeNotFound {
                attribute_id: link.id.clone(),
                owner: owner(),
            })
    }
}

/// Look up an attribute by id; the first declared attribute wins.
pub fn resolve<'a>(index: &StandardIndex<'a>, attribute_id: &str) -> Option<&'a Attribute> {
    index.attribute(attribute_id)
}
