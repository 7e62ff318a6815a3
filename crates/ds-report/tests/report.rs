//! End-to-end report behaviour over small data standards.

use ds_model::{Attribute, AttributeLink, AttributeType, Category, DataStandard};
use ds_report::{REPORT_HEADER, ReportBuilder, ReportError, ReportOptions, report};

fn header() -> Vec<String> {
    REPORT_HEADER.iter().map(|cell| (*cell).to_string()).collect()
}

fn cells(values: [&str; 5]) -> Vec<String> {
    values.iter().map(|cell| (*cell).to_string()).collect()
}

#[test]
fn root_report_lists_own_rows_then_children() {
    let standard = DataStandard::new(
        vec![
            Category::new("root", "root").with_link(AttributeLink::mandatory("a1")),
            Category::new("child", "child")
                .with_parent("root")
                .with_link(AttributeLink::unspecified("a2")),
        ],
        vec![
            Attribute::new("a1", "Color", AttributeType::primitive("TEXT")),
            Attribute::new("a2", "Weight", AttributeType::primitive("NUMBER").multi()),
        ],
    );

    let records = report(&standard, "root").expect("report");

    assert_eq!(
        records,
        vec![
            header(),
            cells(["root", "Color*", "", "TEXT", ""]),
            cells(["child", "Weight", "", "NUMBER[]", ""]),
        ]
    );
}

#[test]
fn same_report_from_json_document() {
    let standard: DataStandard = serde_json::from_str(
        r#"{
            "categories": [
                {"id": "root", "name": "root", "attributeLinks": [{"id": "a1", "optional": false}]},
                {"id": "child", "name": "child", "parentId": "root", "attributeLinks": [{"id": "a2"}]}
            ],
            "attributes": [
                {"id": "a1", "name": "Color", "type": {"id": "TEXT", "multiValue": false}, "groupIds": []},
                {"id": "a2", "name": "Weight", "type": {"id": "NUMBER", "multiValue": true}, "groupIds": []}
            ]
        }"#,
    )
    .expect("parse document");

    let records = report(&standard, "root").expect("report");
    assert_eq!(records.len(), 3);
    assert_eq!(records[1], cells(["root", "Color*", "", "TEXT", ""]));
    assert_eq!(records[2], cells(["child", "Weight", "", "NUMBER[]", ""]));
}

#[test]
fn unknown_category_gives_header_only() {
    let standard = DataStandard::new(vec![Category::new("root", "Root")], vec![]);

    let records = report(&standard, "nope").expect("report");
    assert_eq!(records, vec![header()]);

    let built = ReportBuilder::new(&standard).report("nope").expect("report");
    assert!(built.is_empty());
    assert_eq!(built.records().len(), 1);
}

#[test]
fn composite_type_renders_nested_block() {
    let standard = DataStandard::new(
        vec![Category::new("root", "Root").with_link(AttributeLink::optional("wrapper"))],
        vec![
            Attribute::new(
                "wrapper",
                "Wrapper",
                AttributeType::primitive("TYPEID").with_link(AttributeLink::unspecified("name")),
            ),
            Attribute::new("name", "Name", AttributeType::primitive("TEXT")),
        ],
    );

    let rows = ReportBuilder::new(&standard)
        .build_rows("root")
        .expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].attribute_name, "Wrapper");
    assert_eq!(rows[0].type_signature, "TYPEID{\n  Name: TEXT\n}");
}

#[test]
fn description_and_groups_fill_their_columns() {
    let standard = DataStandard::new(
        vec![Category::new("root", "Root").with_link(AttributeLink::unspecified("a"))],
        vec![
            Attribute::new("a", "A", AttributeType::primitive("TEXT"))
                .with_description("Some text")
                .with_groups(["A", "B"]),
        ],
    );

    let rows = ReportBuilder::new(&standard)
        .build_rows("root")
        .expect("rows");
    assert_eq!(rows[0].description, "Some text");
    assert_eq!(rows[0].groups, "A\nB");
}

#[test]
fn cyclic_type_in_category_is_reported() {
    let standard = DataStandard::new(
        vec![Category::new("root", "Root").with_link(AttributeLink::unspecified("a"))],
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

    let error = report(&standard, "root").unwrap_err();
    assert_eq!(
        error,
        ReportError::CyclicTypeReference {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        }
    );
}

#[test]
fn missing_attribute_in_child_category_is_reported() {
    let standard = DataStandard::new(
        vec![
            Category::new("root", "Root"),
            Category::new("child", "Child")
                .with_parent("root")
                .with_link(AttributeLink::unspecified("ghost")),
        ],
        vec![],
    );

    let error = report(&standard, "root").unwrap_err();
    assert_eq!(
        error.to_string(),
        "attribute 'ghost' linked from category 'child' does not exist"
    );
}

#[test]
fn max_depth_option_limits_type_nesting() {
    let standard = DataStandard::new(
        vec![Category::new("root", "Root").with_link(AttributeLink::unspecified("outer"))],
        vec![
            Attribute::new(
                "outer",
                "Outer",
                AttributeType::primitive("OUTER").with_link(AttributeLink::unspecified("inner")),
            ),
            Attribute::new("inner", "Inner", AttributeType::primitive("TEXT")),
        ],
    );

    let unlimited = ReportBuilder::new(&standard).report("root");
    assert!(unlimited.is_ok());

    let limited = ReportBuilder::new(&standard)
        .with_options(ReportOptions::default().with_max_depth(Some(0)))
        .report("root");
    assert!(matches!(
        limited,
        Err(ReportError::DepthLimitExceeded { limit: 0, .. })
    ));
}

#[test]
fn builder_reuses_index_across_reports() {
    let standard = DataStandard::new(
        vec![
            Category::new("root", "Root").with_link(AttributeLink::unspecified("a")),
            Category::new("child", "Child")
                .with_parent("root")
                .with_link(AttributeLink::unspecified("a")),
        ],
        vec![Attribute::new("a", "A", AttributeType::primitive("TEXT"))],
    );
    let builder = ReportBuilder::new(&standard);

    assert_eq!(builder.report("root").expect("root").len(), 2);
    assert_eq!(builder.report("child").expect("child").len(), 1);
    assert!(builder.index().category("child").is_some());
}

#[test]
fn borrowed_and_owned_records_agree() {
    let standard = DataStandard::new(
        vec![
            Category::new("root", "Root")
                .with_link(AttributeLink::mandatory("a"))
                .with_link(AttributeLink::optional("b")),
        ],
        vec![
            Attribute::new("a", "A", AttributeType::primitive("TEXT")).with_groups(["G1", "G2"]),
            Attribute::new("b", "B", AttributeType::primitive("NUMBER")),
        ],
    );
    let built = ReportBuilder::new(&standard).report("root").expect("report");

    let borrowed = built.records();
    assert_eq!(borrowed[0], header());
    assert_eq!(borrowed[1], cells(["Root", "A*", "", "TEXT", "G1\nG2"]));
    assert_eq!(borrowed, built.into_records());
}
