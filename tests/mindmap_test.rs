//! End-to-end tests for page creation and read-back

use rstest::rstest;
use tempfile::TempDir;

use md2map::{create_mindmap, read_content, MindmapError, ParseError, MINDMAP_TEMPLATE};

#[rstest]
#[case("foo")]
#[case("foo.html")]
fn given_any_filename_when_creating_then_path_ends_in_html(#[case] filename: &str) {
    // Arrange
    let temp = TempDir::new().unwrap();

    // Act
    let written = create_mindmap("# Topic", filename, temp.path(), MINDMAP_TEMPLATE).unwrap();

    // Assert
    assert_eq!(written, temp.path().join("foo.html"));
    assert!(written.exists());
}

#[test]
fn given_outline_when_creating_then_page_contains_every_node_content() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let markdown = "# Plans\n## Week one\n- buy paint\n- sand the door\n## Week two";

    // Act
    let written = create_mindmap(markdown, "plans", temp.path(), MINDMAP_TEMPLATE).unwrap();
    let page = read_content(&written).unwrap();

    // Assert
    for content in ["Plans", "Week one", "buy paint", "sand the door", "Week two"] {
        assert!(page.contains(content), "page is missing {content:?}");
    }
}

#[test]
fn given_missing_output_dir_when_creating_then_it_is_created() {
    let temp = TempDir::new().unwrap();
    let output_dir = temp.path().join("nested").join("maps");

    let written = create_mindmap("# Topic", "mindmap.html", &output_dir, MINDMAP_TEMPLATE).unwrap();

    assert!(written.starts_with(&output_dir));
    assert!(written.exists());
}

#[test]
fn given_empty_input_when_creating_then_errors_and_writes_nothing() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let output_dir = temp.path().join("untouched");

    // Act
    let err = create_mindmap("  \n\n", "mindmap.html", &output_dir, MINDMAP_TEMPLATE).unwrap_err();

    // Assert
    assert!(matches!(err, MindmapError::Parse(ParseError::EmptyInput)));
    assert!(!output_dir.exists());
}

#[test]
fn given_broken_template_when_creating_then_errors_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let output_dir = temp.path().join("untouched");

    let err = create_mindmap("# Topic", "mindmap.html", &output_dir, "<html></html>").unwrap_err();

    assert!(matches!(err, MindmapError::Template(_)));
    assert!(!output_dir.exists());
}

#[test]
fn given_nonexistent_path_when_reading_then_not_found() {
    let temp = TempDir::new().unwrap();

    let err = read_content(&temp.path().join("nope.html")).unwrap_err();

    assert!(matches!(err, MindmapError::NotFound(_)));
}

#[test]
fn given_written_page_when_reading_then_content_is_verbatim() {
    let temp = TempDir::new().unwrap();

    let written = create_mindmap("# Topic", "page", temp.path(), "<p>{{data}}</p>").unwrap();
    let page = read_content(&written).unwrap();

    assert_eq!(page, std::fs::read_to_string(&written).unwrap());
    assert!(page.starts_with("<p>"));
    assert!(page.ends_with("</p>"));
}
