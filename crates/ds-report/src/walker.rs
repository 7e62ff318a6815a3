//! Pre-order walk of a category subtree.

use std::collections::HashSet;

use tracing::debug;

use ds_model::{AttributeLink, Category, ReportRow};

use crate::error::{LinkOwner, ReportError, Result};
use crate::index::StandardIndex;
use crate::render::{format_groups, mandatory_marker, render_type_with_limit};

/// Rows for `category_id` and all of its descendants, without a header.
///
/// A category's own links come first, in link order, followed by each child
/// subtree in declared order. An unknown `category_id` yields no rows.
///
/// # Errors
///
/// Fails on dangling attribute links, cyclic composite types, and categories
/// that are their own ancestors.
pub fn build_rows(index: &StandardIndex<'_>, category_id: &str) -> Result<Vec<ReportRow>> {
    walk(index, category_id, None)
}

pub(crate) fn walk<'a>(
    index: &StandardIndex<'a>,
    category_id: &str,
    max_depth: Option<usize>,
) -> Result<Vec<ReportRow>> {
    let Some(start) = index.category(category_id) else {
        debug!(category_id, "category not found, report is empty");
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    // Ids of the categories above the one being visited, as a path and a set.
    let mut ancestors: Vec<&'a str> = Vec::new();
    let mut open: HashSet<&'a str> = HashSet::new();
    let mut pending: Vec<(&'a Category, usize)> = vec![(start, 0)];
    while let Some((category, level)) = pending.pop() {
        for closed in ancestors.drain(level..) {
            open.remove(closed);
        }
        if open.contains(category.id.as_str()) {
            let first = ancestors
                .iter()
                .position(|id| *id == category.id)
                .unwrap_or_default();
            let mut path: Vec<String> = ancestors[first..]
                .iter()
                .map(|id| (*id).to_string())
                .collect();
            path.push(category.id.clone());
            return Err(ReportError::CyclicCategoryHierarchy { path });
        }
        ancestors.push(&category.id);
        open.insert(&category.id);

        debug!(
            category_id = %category.id,
            level,
            links = category.attribute_links.len(),
            "visiting category"
        );
        for link in &category.attribute_links {
            rows.push(category_row(index, category, link, max_depth)?);
        }
        pending.extend(
            index
                .children(&category.id)
                .rev()
                .map(|child| (child, level + 1)),
        );
    }
    Ok(rows)
}

fn category_row(
    index: &StandardIndex<'_>,
    category: &Category,
    link: &AttributeLink,
    max_depth: Option<usize>,
) -> Result<ReportRow> {
    let attribute = index.resolve_link(link, || LinkOwner::Category(category.id.clone()))?;
    Ok(ReportRow {
        category_name: category.name.clone(),
        attribute_name: format!("{}{}", attribute.name, mandatory_marker(link)),
        description: attribute.description_text().to_string(),
        type_signature: render_type_with_limit(attribute, index, 0, max_depth)?,
        groups: format_groups(&attribute.group_ids),
        mandatory: link.is_mandatory(),
    })
}
