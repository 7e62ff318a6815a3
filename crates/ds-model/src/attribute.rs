use serde::{Deserialize, Serialize};

/// Reference from a category or a composite type to an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeLink {
    /// Id of the referenced attribute.
    pub id: String,
    /// Tri-state flag: `Some(false)` is mandatory, `Some(true)` optional,
    /// `None` unspecified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

impl AttributeLink {
    pub fn new(id: impl Into<String>, optional: Option<bool>) -> Self {
        Self {
            id: id.into(),
            optional,
        }
    }

    pub fn mandatory(id: impl Into<String>) -> Self {
        Self::new(id, Some(false))
    }

    pub fn optional(id: impl Into<String>) -> Self {
        Self::new(id, Some(true))
    }

    pub fn unspecified(id: impl Into<String>) -> Self {
        Self::new(id, None)
    }

    /// Only an explicit `optional: false` makes a link mandatory.
    pub fn is_mandatory(&self) -> bool {
        self.optional == Some(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeType {
    /// Primitive type label, e.g. `string` or `integer`.
    pub id: String,
    #[serde(default)]
    pub multi_value: bool,
    /// Nested links for composite types, in declared order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_links: Vec<AttributeLink>,
}

impl AttributeType {
    pub fn primitive(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            multi_value: false,
            attribute_links: Vec::new(),
        }
    }

    #[must_use]
    pub fn multi(mut self) -> Self {
        self.multi_value = true;
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: AttributeLink) -> Self {
        self.attribute_links.push(link);
        self
    }

    pub fn is_composite(&self) -> bool {
        !self.attribute_links.is_empty()
    }
}

/// A named, typed field of the data standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AttributeRecord")]
pub struct Attribute {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub group_ids: Vec<String>,
}

impl Attribute {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        attribute_type: AttributeType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            attribute_type,
            group_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_ids = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Description text, empty when the source leaves it out.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Nested attribute links of a composite type.
    pub fn nested_links(&self) -> &[AttributeLink] {
        &self.attribute_type.attribute_links
    }
}

/// Attribute as it appears in source documents.
///
/// Older documents put composite links on the attribute itself rather than
/// on its type; both places are accepted and merged, type-level links first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttributeRecord {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type", default)]
    attribute_type: AttributeType,
    #[serde(default)]
    attribute_links: Vec<AttributeLink>,
    #[serde(default)]
    group_ids: Vec<String>,
}

impl From<AttributeRecord> for Attribute {
    fn from(record: AttributeRecord) -> Self {
        let mut attribute_type = record.attribute_type;
        attribute_type.attribute_links.extend(record.attribute_links);
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            attribute_type,
            group_ids: record.group_ids,
        }
    }
}

/// Named group an attribute may belong to. Reports show group ids only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
