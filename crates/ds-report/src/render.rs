//! Type signature rendering.
//!
//! A primitive type renders as its id, e.g. `TEXT` or `NUMBER[]`. A composite
//! type lists its nested attributes one per line inside braces, indented two
//! spaces per nesting level:
//!
//! ```text
//! Dimensions{
//!   Width*: NUMBER
//!   Tags: TEXT[]
//! }[]
//! ```

use std::collections::HashSet;

use ds_model::{Attribute, AttributeLink};

use crate::error::{LinkOwner, ReportError, Result};
use crate::index::StandardIndex;

/// One indentation level.
pub const INDENT: &str = "  ";

/// Marker appended to the name of a mandatory link.
pub const MANDATORY_MARKER: &str = "*";

/// Suffix of multi-valued types.
pub const MULTI_VALUE_SUFFIX: &str = "[]";

pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// `*` when the link is explicitly not optional, otherwise empty.
pub fn mandatory_marker(link: &AttributeLink) -> &'static str {
    if link.is_mandatory() {
        MANDATORY_MARKER
    } else {
        ""
    }
}

/// Group ids, one per line.
pub fn format_groups(group_ids: &[String]) -> String {
    group_ids.join("\n")
}

fn multi_value_suffix(attribute: &Attribute) -> &'static str {
    if attribute.attribute_type.multi_value {
        MULTI_VALUE_SUFFIX
    } else {
        ""
    }
}

/// Render the type signature of `attribute` with its braces at `depth`.
///
/// # Errors
///
/// Fails when a nested link does not resolve or when the nested links lead
/// back to an attribute already being rendered.
pub fn render_type(attribute: &Attribute, index: &StandardIndex<'_>, depth: usize) -> Result<String> {
    render_type_with_limit(attribute, index, depth, None)
}

/// A composite attribute whose braces are open.
struct Frame<'a> {
    attribute: &'a Attribute,
    next_link: usize,
    depth: usize,
}

pub(crate) fn render_type_with_limit<'a>(
    attribute: &'a Attribute,
    index: &StandardIndex<'a>,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<String> {
    let mut out = String::new();
    out.push_str(&attribute.attribute_type.id);
    if !attribute.attribute_type.is_composite() {
        out.push_str(multi_value_suffix(attribute));
        return Ok(out);
    }
    out.push_str("{\n");

    let mut stack = vec![Frame {
        attribute,
        next_link: 0,
        depth,
    }];
    // Ids of the frames on `stack`.
    let mut open: HashSet<&'a str> = HashSet::from([attribute.id.as_str()]);
    while let Some(frame) = stack.last_mut() {
        let owner = frame.attribute;
        let Some(link) = owner.nested_links().get(frame.next_link) else {
            let closing_depth = frame.depth;
            stack.pop();
            open.remove(owner.id.as_str());
            out.push_str(&indent(closing_depth));
            out.push('}');
            out.push_str(multi_value_suffix(owner));
            if !stack.is_empty() {
                out.push('\n');
            }
            continue;
        };
        frame.next_link += 1;
        let nested_depth = frame.depth + 1;

        let nested = index.resolve_link(link, || LinkOwner::Attribute(owner.id.clone()))?;
        if open.contains(nested.id.as_str()) {
            let start = stack
                .iter()
                .position(|frame| frame.attribute.id == nested.id)
                .unwrap_or_default();
            let mut path: Vec<String> = stack[start..]
                .iter()
                .map(|frame| frame.attribute.id.clone())
                .collect();
            path.push(nested.id.clone());
            return Err(ReportError::CyclicTypeReference { path });
        }
        if let Some(limit) = max_depth
            && nested_depth > limit
        {
            return Err(ReportError::DepthLimitExceeded {
                attribute_id: nested.id.clone(),
                limit,
            });
        }

        out.push_str(&indent(nested_depth));
        out.push_str(&nested.name);
        out.push_str(mandatory_marker(link));
        out.push_str(": ");
        out.push_str(&nested.attribute_type.id);
        if nested.attribute_type.is_composite() {
            out.push_str("{\n");
            open.insert(&nested.id);
            stack.push(Frame {
                attribute: nested,
                next_link: 0,
                depth: nested_depth,
            });
        } else {
            out.push_str(multi_value_suffix(nested));
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use ds_model::{AttributeType, DataStandard};

    use super::*;

    fn text(id: &str, name: &str) -> Attribute {
        Attribute::new(id, name, AttributeType::primitive("TEXT"))
    }

    #[test]
    fn indent_is_two_spaces_per_level() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "  ");
        assert_eq!(indent(3), "      ");
    }

    #[test]
    fn marker_only_for_explicit_false() {
        assert_eq!(mandatory_marker(&AttributeLink::mandatory("a")), "*");
        assert_eq!(mandatory_marker(&AttributeLink::optional("a")), "");
        assert_eq!(mandatory_marker(&AttributeLink::unspecified("a")), "");
    }

    #[test]
    fn groups_join_with_newlines() {
        assert_eq!(
            format_groups(&["A".to_string(), "B".to_string()]),
            "A\nB"
        );
        assert_eq!(format_groups(&[]), "");
    }

    #[test]
    fn primitive_types_render_their_id() {
        let standard = DataStandard::default();
        let index = StandardIndex::new(&standard);

        let single = text("a", "A");
        let multi = Attribute::new("b", "B", AttributeType::primitive("NUMBER").multi());
        assert_eq!(render_type(&single, &index, 0).unwrap(), "TEXT");
        assert_eq!(render_type(&multi, &index, 4).unwrap(), "NUMBER[]");
    }

    #[test]
    fn composite_type_lists_nested_attributes() {
        let standard = DataStandard::new(vec![], vec![text("name", "Name")]);
        let index = StandardIndex::new(&standard);
        let composite = Attribute::new(
            "c",
            "C",
            AttributeType::primitive("TYPEID").with_link(AttributeLink::unspecified("name")),
        );

        assert_eq!(
            render_type(&composite, &index, 0).unwrap(),
            "TYPEID{\n  Name: TEXT\n}"
        );
    }

    #[test]
    fn nested_composites_indent_per_level() {
        let standard = DataStandard::new(
            vec![],
            vec![
                Attribute::new(
                    "inner",
                    "Inner",
                    AttributeType::primitive("INNER")
                        .multi()
                        .with_link(AttributeLink::mandatory("leaf")),
                ),
                Attribute::new("leaf", "Leaf", AttributeType::primitive("NUMBER").multi()),
            ],
        );
        let index = StandardIndex::new(&standard);
        let outer = Attribute::new(
            "outer",
            "Outer",
            AttributeType::primitive("OUTER")
                .with_link(AttributeLink::optional("inner"))
                .with_link(AttributeLink::unspecified("leaf")),
        );

        assert_eq!(
            render_type(&outer, &index, 1).unwrap(),
            "OUTER{\n    Inner: INNER{\n      Leaf*: NUMBER[]\n    }[]\n    Leaf: NUMBER[]\n  }"
        );
    }

    #[test]
    fn shared_attribute_in_siblings_is_not_a_cycle() {
        let standard = DataStandard::new(vec![], vec![text("leaf", "Leaf")]);
        let index = StandardIndex::new(&standard);
        let composite = Attribute::new(
            "pair",
            "Pair",
            AttributeType::primitive("PAIR")
                .with_link(AttributeLink::unspecified("leaf"))
                .with_link(AttributeLink::unspecified("leaf")),
        );

        assert_eq!(
            render_type(&composite, &index, 0).unwrap(),
            "PAIR{\n  Leaf: TEXT\n  Leaf: TEXT\n}"
        );
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let looping = Attribute::new(
            "node",
            "Node",
            AttributeType::primitive("NODE").with_link(AttributeLink::unspecified("node")),
        );
        let standard = DataStandard::new(vec![], vec![looping.clone()]);
        let index = StandardIndex::new(&standard);

        assert_eq!(
            render_type(&looping, &index, 0),
            Err(ReportError::CyclicTypeReference {
                path: vec!["node".to_string(), "node".to_string()],
            })
        );
    }

    #[test]
    fn indirect_cycle_reports_path() {
        let standard = DataStandard::new(
            vec![],
            vec![
                Attribute::new(
                    "a",
                    "A",
                    AttributeType::primitive("A").with_link(AttributeLink::unspecified("b")),
                ),
                Attribute::new(
                    "b",
                    "B",
                    AttributeType::primitive("B").with_link(AttributeLink::unspecified("a")),
                ),
            ],
        );
        let index = StandardIndex::new(&standard);
        let start = index.attribute("a").unwrap();

        assert_eq!(
            render_type(start, &index, 0),
            Err(ReportError::CyclicTypeReference {
                path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
            })
        );
    }

    #[test]
    fn deep_type_chain_renders_without_recursion() {
        const DEPTH: usize = 2_000;
        let attributes = (0..=DEPTH)
            .map(|level| {
                let kind = AttributeType::primitive(format!("T{level}"));
                let kind = if level == DEPTH {
                    kind
                } else {
                    kind.with_link(AttributeLink::unspecified(format!("n{}", level + 1)))
                };
                Attribute::new(format!("n{level}"), format!("N{level}"), kind)
            })
            .collect();
        let standard = DataStandard::new(vec![], attributes);
        let index = StandardIndex::new(&standard);
        let top = index.attribute("n0").unwrap();

        let rendered = render_type(top, &index, 0).unwrap();
        assert_eq!(rendered.lines().count(), 2 * DEPTH + 1);
        assert!(rendered.starts_with("T0{\n  N1: T1{\n"));
        assert!(rendered.ends_with("\n}"));
    }

    #[test]
    fn missing_nested_attribute_names_owner() {
        let standard = DataStandard::default();
        let index = StandardIndex::new(&standard);
        let composite = Attribute::new(
            "c",
            "C",
            AttributeType::primitive("C").with_link(AttributeLink::unspecified("ghost")),
        );

        assert_eq!(
            render_type(&composite, &index, 0),
            Err(ReportError::AttributeNotFound {
                attribute_id: "ghost".to_string(),
                owner: LinkOwner::Attribute("c".to_string()),
            })
        );
    }

    #[test]
    fn depth_limit_stops_deep_nesting() {
        let standard = DataStandard::new(
            vec![],
            vec![
                Attribute::new(
                    "mid",
                    "Mid",
                    AttributeType::primitive("MID").with_link(AttributeLink::unspecified("leaf")),
                ),
                text("leaf", "Leaf"),
            ],
        );
        let index = StandardIndex::new(&standard);
        let top = Attribute::new(
            "top",
            "Top",
            AttributeType::primitive("TOP").with_link(AttributeLink::unspecified("mid")),
        );

        assert!(render_type_with_limit(&top, &index, 0, Some(2)).is_ok());
        assert_eq!(
            render_type_with_limit(&top, &index, 0, Some(1)),
            Err(ReportError::DepthLimitExceeded {
                attribute_id: "leaf".to_string(),
                limit: 1,
            })
        );
    }
}
