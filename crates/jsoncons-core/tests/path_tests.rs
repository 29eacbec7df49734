/// Path grammar tests: accepted forms, canonical display, and the exact
/// position reported for each kind of malformed path.
use jsoncons_core::{JsonError, Path, Step};

/// Helper: parse and return the steps, panicking on error.
fn steps(path: &str) -> Vec<Step> {
    Path::parse(path)
        .unwrap_or_else(|e| panic!("{path} should parse: {e}"))
        .steps()
        .to_vec()
}

/// Helper: parse a path that must fail and return the reported position.
fn malformed_at(path: &str) -> usize {
    match Path::parse(path) {
        Err(JsonError::MalformedPath { position, .. }) => position,
        Err(other) => panic!("{path}: expected MalformedPath, got {other:?}"),
        Ok(parsed) => panic!("{path}: expected MalformedPath, parsed as {parsed:?}"),
    }
}

fn member(name: &str) -> Step {
    Step::Member(name.to_string())
}

// ============================================================================
// Accepted forms
// ============================================================================

#[test]
fn bare_root_has_no_steps() {
    let path = Path::parse("$").unwrap();
    assert!(path.is_root());
    assert!(path.steps().is_empty());
}

#[test]
fn member_then_index() {
    assert_eq!(steps("$.key[1]"), [member("key"), Step::Index(1)]);
}

#[test]
fn chained_indices() {
    assert_eq!(
        steps("$.key[1][0]"),
        [member("key"), Step::Index(1), Step::Index(0)]
    );
}

#[test]
fn index_directly_on_root() {
    assert_eq!(steps("$[2].name"), [Step::Index(2), member("name")]);
}

#[test]
fn nested_members() {
    assert_eq!(steps("$.a.b.c"), [member("a"), member("b"), member("c")]);
}

#[test]
fn negative_index_parses() {
    assert_eq!(steps("$.key[-1]"), [member("key"), Step::Index(-1)]);
}

#[test]
fn member_names_may_contain_unicode_and_symbols() {
    assert_eq!(steps("$.caf\u{e9}.a-b:c"), [member("caf\u{e9}"), member("a-b:c")]);
}

#[test]
fn wildcards_in_both_forms() {
    assert_eq!(
        steps("$.items[*].tags.*"),
        [member("items"), Step::Wildcard, member("tags"), Step::Wildcard]
    );
}

#[test]
fn quoted_bracket_members() {
    assert_eq!(steps("$['a.b']"), [member("a.b")]);
    assert_eq!(steps(r#"$["x y"]"#), [member("x y")]);
    assert_eq!(steps("$['*']"), [member("*")]);
    assert_eq!(steps("$['']"), [member("")]);
}

#[test]
fn quoted_member_escapes() {
    assert_eq!(steps(r"$['it\'s']"), [member("it's")]);
    assert_eq!(steps(r"$['back\\slash']"), [member(r"back\slash")]);
    assert_eq!(steps(r#"$["say \"hi\""]"#), [member(r#"say "hi""#)]);
}

#[test]
fn from_str_matches_parse() {
    let parsed: Path = "$.key[1]".parse().unwrap();
    assert_eq!(parsed, Path::parse("$.key[1]").unwrap());
}

#[test]
fn fan_out_detection() {
    assert!(!Path::parse("$.a[0]").unwrap().has_fan_out());
    assert!(Path::parse("$.a[*]").unwrap().has_fan_out());
}

// ============================================================================
// Canonical display
// ============================================================================

#[test]
fn display_is_canonical() {
    assert_eq!(Path::parse("$.key[1]").unwrap().to_string(), "$.key[1]");
    assert_eq!(Path::parse("$.a.*").unwrap().to_string(), "$.a[*]");
    assert_eq!(Path::parse(r#"$["a b"]"#).unwrap().to_string(), "$['a b']");
    assert_eq!(Path::parse(r"$['it\'s']").unwrap().to_string(), r"$['it\'s']");
    assert_eq!(Path::parse("$['plain']").unwrap().to_string(), "$.plain");
}

#[test]
fn display_reparses_to_same_path() {
    for text in ["$", "$.a[0][-3]", "$['x.y'][*].z", r"$['\\']", "$['*']"] {
        let path = Path::parse(text).unwrap();
        let again = Path::parse(&path.to_string()).unwrap();
        assert_eq!(path, again, "{text}");
    }
}

#[test]
fn built_path_displays() {
    let path = Path::new(vec![member("key"), Step::Index(3)]);
    assert_eq!(path.to_string(), "$.key[3]");
}

// ============================================================================
// Malformed paths
// ============================================================================

#[test]
fn missing_root_marker() {
    assert_eq!(malformed_at("key[1"), 0);
    assert_eq!(malformed_at(".key"), 0);
    assert_eq!(malformed_at(""), 0);
}

#[test]
fn unterminated_bracket() {
    assert_eq!(malformed_at("$.key[1"), 5);
    assert_eq!(malformed_at("$["), 1);
}

#[test]
fn non_numeric_index() {
    assert_eq!(malformed_at("$.key[abc]"), 6);
    assert_eq!(malformed_at("$[1.5]"), 2);
    assert_eq!(malformed_at("$[+1]"), 2);
    assert_eq!(malformed_at("$[-]"), 2);
}

#[test]
fn empty_brackets() {
    assert_eq!(malformed_at("$[]"), 2);
}

#[test]
fn index_out_of_i64_range() {
    assert_eq!(malformed_at("$[99999999999999999999]"), 2);
}

#[test]
fn empty_member_names() {
    assert_eq!(malformed_at("$."), 2);
    assert_eq!(malformed_at("$..a"), 2);
    assert_eq!(malformed_at("$.a."), 4);
    assert_eq!(malformed_at("$.[0]"), 2);
}

#[test]
fn junk_after_root_or_step() {
    assert_eq!(malformed_at("$a"), 1);
    assert_eq!(malformed_at("$[0]x"), 4);
    assert_eq!(malformed_at("$ .a"), 1);
}

#[test]
fn quoted_member_errors() {
    assert_eq!(malformed_at("$['open"), 1);
    assert_eq!(malformed_at("$['a'"), 5);
    assert_eq!(malformed_at("$['a'x]"), 5);
    assert_eq!(malformed_at(r"$['a\n']"), 5);
}

#[test]
fn wildcard_bracket_must_close() {
    assert_eq!(malformed_at("$[*"), 3);
    assert_eq!(malformed_at("$[*x]"), 3);
}

#[test]
fn error_message_names_the_problem() {
    let err = Path::parse("key[1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed path at byte 0: path must start with '$'"
    );
}
