//! End-to-end pipeline scenarios over realistic annotated source.

use pretty_assertions::assert_eq;
use sdoc_indexer::{process, IndexConfig};
use sdoc_model::{Role, Snippet};

fn default_process(text: &str) -> Snippet {
    process("test.sdoc", text, &IndexConfig::default())
}

#[test]
fn section_wraps_following_source() {
    // The body line must out-measure the heading by more than the
    // ten-character wrap guard for the heading to count
    let root =
        default_process("Foo class.\n  Does several interesting things.\n\npublic class Foo {}\n");

    assert_eq!(root.children.len(), 1);
    let section = &root.children[0];
    assert_eq!(
        section.heading.as_ref().map(|h| h.title.as_str()),
        Some("Foo class")
    );
    assert_eq!(section.level(), Some(1));

    assert_eq!(section.children.len(), 1);
    let source = &section.children[0];
    assert_eq!(source.role(), Role::Source);
    assert_eq!(source.text, "public class Foo {}\n");

    // Aggregation pulls the source's terms up into the section
    assert!(section.index.get("Foo") >= 1.0);
    assert!(root.index.get("Foo") >= 1.0);
}

#[test]
fn nested_sections_follow_indentation() {
    let text = "\
The Foo class.
Prints hello world to the screen, at dissertation length.

public class Foo {

  The main method.
  Actually does the work, and more work, and then some more.

  public static void main(final String[] args) {
    System.out.println(\"hello world\");
  }

}";
    let root = default_process(text);

    let foo = &root.children[0];
    assert_eq!(
        foo.heading.as_ref().map(|h| h.title.as_str()),
        Some("The Foo class")
    );
    assert_eq!(foo.level(), Some(1));

    // "public class Foo {" is a leaf of the Foo section; "The main
    // method" (2-space indent) opens a level-2 section inside it
    let roles: Vec<Role> = foo.children.iter().map(Snippet::role).collect();
    assert_eq!(roles, vec![Role::Source, Role::Comment]);

    let main = &foo.children[1];
    assert_eq!(
        main.heading.as_ref().map(|h| h.title.as_str()),
        Some("The main method")
    );
    assert_eq!(main.level(), Some(2));
    // Leaves never close a section, so the trailing "}" paragraph
    // also belongs to the deepest open section
    assert_eq!(main.children.len(), 2);
    assert_eq!(main.children[0].role(), Role::Source);
    assert_eq!(main.children[1].text, "}");

    // Deep content is searchable from every ancestor
    assert!(main.index.contains("println"));
    assert!(foo.index.contains("println"));
    assert!(root.index.contains("println"));
}

#[test]
fn enumerate_and_pre_round_out_the_roles() {
    let text = "\
Heuristics | The Author

Inference rules.
With these things in mind, here are the rules this engine applies.

| 1. Numbered lists start with a digit
  2. ASCII art starts with spaces

|  +--+
   |  |
   +--+";
    let root = default_process(text);

    assert_eq!(root.children[0].role(), Role::Prelude);
    let section = &root.children[1];
    assert_eq!(section.children.len(), 2);
    assert_eq!(section.children[0].role(), Role::Enumerate);
    assert_eq!(section.children[1].role(), Role::Pre);
}

#[test]
fn relevance_of_compound_keys() {
    let root = default_process("foo bar bif baz");
    let leaf = &root.children[0];
    assert!((leaf.index.get("foo:bif") - 0.5).abs() < f64::EPSILON);
    assert!((root.index.get("foo:bif") - 0.5).abs() < f64::EPSILON);
}

#[test]
fn rebuild_from_same_input_is_identical() {
    let text = "Alpha section.\n  A body line comfortably longer than its heading.\n\ncode(); code();\n\nBeta section.\n  Another body line comfortably longer than the heading.";
    let first = default_process(text);
    let second = default_process(text);

    // Fresh indexes each build: no accumulation across runs
    assert_eq!(first, second);
}

#[test]
fn pathological_input_degrades_without_error() {
    let text = "\t\n\n|\n\n| 99. X\n\nZ.\nq\n\n        Deep.\nshort";
    let root = default_process(text);
    // Everything survives with some role; nothing is dropped
    assert_eq!(root.walk().count() - 1, 5);
}

#[test]
fn window_policy_is_configurable() {
    let narrow = IndexConfig {
        pair_window: 4,
        ..IndexConfig::default()
    };
    let text = "a b c d e f";
    let root = process("t", text, &narrow);
    assert!(root.index.contains("a:d"), "gap 3 fits a window of 4");
    assert!(!root.index.contains("a:e"), "gap 4 does not");
}
