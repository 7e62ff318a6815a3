use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeGroup};
use crate::category::Category;

/// The full schema document: categories, attributes and groups.
///
/// Collections keep the declared order of the source document. Ids are not
/// checked for uniqueness; lookups here return the first declared match.
///
/// [`category`](Self::category), [`attribute`](Self::attribute) and
/// [`children_of`](Self::children_of) scan the collections on every call.
/// Report generation goes through `ds_report::StandardIndex`, which builds
/// the same first-declared lookups once per document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStandard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_groups: Vec<AttributeGroup>,
}

impl DataStandard {
    pub fn new(categories: Vec<Category>, attributes: Vec<Attribute>) -> Self {
        Self {
            categories,
            attributes,
            ..Self::default()
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn attribute(&self, id: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.id == id)
    }

    pub fn root_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|category| category.is_root())
    }

    /// Direct children of `category_id`, in declared order.
    pub fn children_of<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Category> {
        self.categories
            .iter()
            .filter(move |category| category.is_child_of(category_id))
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("data standard")
    }
}
