use serde::{Deserialize, Serialize};

/// Fixed header row of every report.
pub const REPORT_HEADER: [&str; 5] = [
    "Category Name",
    "Attribute Name",
    "Description",
    "Type",
    "Groups",
];

/// One (category, attribute) line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub category_name: String,
    /// Attribute name with the mandatory marker appended.
    pub attribute_name: String,
    pub description: String,
    /// Rendered type signature; may span several lines for composite types.
    pub type_signature: String,
    /// Group ids joined by `\n`.
    pub groups: String,
    /// Whether the link is mandatory; not a report column.
    #[serde(default)]
    pub mandatory: bool,
}

impl ReportRow {
    /// Cells in header order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.category_name.as_str(),
            self.attribute_name.as_str(),
            self.description.as_str(),
            self.type_signature.as_str(),
            self.groups.as_str(),
        ]
    }

    pub fn into_cells(self) -> Vec<String> {
        vec![
            self.category_name,
            self.attribute_name,
            self.description,
            self.type_signature,
            self.groups,
        ]
    }
}
