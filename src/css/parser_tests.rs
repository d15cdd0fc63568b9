use crate::css::parser::{build_property_map, normalize_value, parse_css_properties, strip_comments, ParsedProperty};

#[test]
fn test_single_property() {
    let properties = parse_css_properties(":root { --color: #fff; }");
    assert_eq!(
        properties,
        vec![ParsedProperty {
            name: "--color".to_string(),
            value: "#fff".to_string(),
            line: 1,
        }]
    );
}

#[test]
fn test_line_numbers() {
    let content = r#"/* generated */

:root {
  --lufa-primitive-color-blue-500: #2563eb;
  --lufa-primitive-spacing-4: 1rem;
  --lufa-core-brand-primary: var(--lufa-primitive-color-blue-500);
}"#;

    let properties = parse_css_properties(content);
    assert_eq!(properties.len(), 3);
    assert_eq!(properties[0].line, 4);
    assert_eq!(properties[1].line, 5);
    assert_eq!(properties[2].line, 6);
    assert_eq!(properties[2].value, "var(--lufa-primitive-color-blue-500)");
}

#[test]
fn test_properties_on_lines_three_to_five() {
    let content = ":root {\n\n  --a: 1px;\n  --b: 2px;\n  --c: 3px;\n}";
    let lines: Vec<usize> = parse_css_properties(content).iter().map(|p| p.line).collect();
    assert_eq!(lines, vec![3, 4, 5]);
}

#[test]
fn test_multiline_comment_keeps_line_numbers() {
    let content = ":root {\n  /* first\n     second\n     third */\n  --after: 4px;\n}";
    let properties = parse_css_properties(content);
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].line, 5);
}

#[test]
fn test_comments_never_appear_in_values() {
    let content = ":root { --shadow: 0 1px /* offset */ 2px #000; }";
    let properties = parse_css_properties(content);
    assert_eq!(properties[0].value, "0 1px 2px #000");
}

#[test]
fn test_commented_out_declaration_is_ignored() {
    let content = ":root {\n  /* --old: red; */\n  --new: blue;\n}";
    let properties = parse_css_properties(content);
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "--new");
    assert_eq!(properties[0].line, 3);
}

#[test]
fn test_multiline_value_is_normalized() {
    let content = r#":root {
  --lufa-primitive-font-family-base:
    "Inter",
    system-ui ,
    sans-serif;
  --lufa-primitive-size-1: 1px;
}"#;

    let properties = parse_css_properties(content);
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].value, "\"Inter\", system-ui, sans-serif");
    assert_eq!(properties[0].line, 2);
    assert_eq!(properties[1].line, 6);
}

#[test]
fn test_declarations_outside_root() {
    let content = ".button { --button-gap: 4px; color: red; }\n--loose: 1;";
    let properties = parse_css_properties(content);
    let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["--button-gap", "--loose"]);
    assert_eq!(properties[1].line, 2);
}

#[test]
fn test_regular_properties_and_var_usages_are_not_declarations() {
    let content = ".a { color: var(--text); margin: 0; }";
    assert!(parse_css_properties(content).is_empty());
}

#[test]
fn test_missing_colon_is_skipped() {
    let content = ":root {\n  --broken 1px;\n  --ok: 2px;\n}";
    let properties = parse_css_properties(content);
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "--ok");
    assert_eq!(properties[0].line, 3);
}

#[test]
fn test_missing_semicolon_is_skipped() {
    let content = ":root {\n  --broken: 1px\n  --ok: 2px;\n}";
    let properties = parse_css_properties(content);
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "--ok");
    assert_eq!(properties[0].value, "2px");
}

#[test]
fn test_missing_semicolon_before_closing_brace_is_skipped() {
    let properties = parse_css_properties(":root { --last: 1px }");
    assert!(properties.is_empty());
}

#[test]
fn test_empty_value_is_skipped() {
    let properties = parse_css_properties(":root { --empty: ; --full: 1; }");
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "--full");
}

#[test]
fn test_adjacent_declarations_without_whitespace() {
    let properties = parse_css_properties(":root{--a:1px;--b:2px;}");
    let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["--a", "--b"]);
}

#[test]
fn test_duplicates_are_retained_and_map_is_last_wins() {
    let content = ":root {\n  --dup: red;\n  --dup: blue;\n}";
    let properties = parse_css_properties(content);
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].line, 2);
    assert_eq!(properties[1].line, 3);

    let map = build_property_map(&properties);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("--dup").map(String::as_str), Some("blue"));
}

#[test]
fn test_strip_comments() {
    assert_eq!(strip_comments("a /* b */ c"), "a  c");
    assert_eq!(strip_comments("a /* b\nc */ d"), "a \n d");
    assert_eq!(strip_comments("a /* never closed\n"), "a \n");
    assert_eq!(strip_comments("no comments"), "no comments");
}

#[test]
fn test_normalize_value() {
    assert_eq!(normalize_value("  a   b  "), "a b");
    assert_eq!(normalize_value("rgb(0,0 ,  0)"), "rgb(0, 0, 0)");
    assert_eq!(normalize_value("a,\n\tb"), "a, b");
    assert_eq!(normalize_value("Inter, "), "Inter,");
    assert_eq!(normalize_value("Inter ,"), "Inter,");
    assert_eq!(normalize_value("\"Open  Sans\" ,serif"), "\"Open  Sans\", serif");
    assert_eq!(normalize_value("'a,b' , 'c'"), "'a,b', 'c'");
}

#[test]
fn test_trailing_comma_value_is_trimmed() {
    let properties = parse_css_properties("--lufa-primitive-font-family: Inter, ;");
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].value, "Inter,");
    assert_eq!(properties[0].value, properties[0].value.trim());
}

#[test]
fn test_semicolon_inside_url_is_part_of_value() {
    let content = ":root {\n  --lufa-primitive-icon-check: url(\"data:image/svg+xml;base64,AAAA\");\n  --lufa-primitive-color-white: #fff;\n}";
    let properties = parse_css_properties(content);

    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].name, "--lufa-primitive-icon-check");
    assert_eq!(properties[0].value, "url(\"data:image/svg+xml;base64,AAAA\")");
    assert_eq!(properties[0].line, 2);
    assert_eq!(properties[1].value, "#fff");
    assert_eq!(properties[1].line, 3);
}

#[test]
fn test_terminators_inside_quotes_are_part_of_value() {
    let properties = parse_css_properties("--lufa-primitive-font-content: 'a;b{c}';\n--lufa-primitive-font-quote: \"say \\\"hi;\\\"\";");

    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].value, "'a;b{c}'");
    assert_eq!(properties[1].value, "\"say \\\"hi;\\\"\"");
}

#[test]
fn test_unclosed_parenthesis_is_skipped_without_losing_later_declarations() {
    let properties = parse_css_properties("--broken: calc(1px + 2px;\n--lufa-primitive-spacing-4: 16px;");

    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "--lufa-primitive-spacing-4");
    assert_eq!(properties[0].line, 2);
}

#[test]
fn test_empty_input() {
    assert!(parse_css_properties("").is_empty());
    assert!(parse_css_properties(":root {}").is_empty());
}
