use headsplit::{Block, HeaderSpec, Metadata, Splitter, split, split_with_headers};
use pretty_assertions::assert_eq;

fn meta(pairs: &[(&str, &str)]) -> Metadata {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn block(content: &str, pairs: &[(&str, &str)]) -> Block {
    Block::new(content, meta(pairs))
}

#[test]
fn empty_document() {
    assert_eq!(split(""), Vec::<Block>::new());
    assert_eq!(split("\n\n   \n"), Vec::<Block>::new());
}

#[test]
fn headers_only() {
    assert_eq!(split("# A\n## B\n### C\n"), Vec::<Block>::new());
}

#[test]
fn no_headers_yields_one_block() {
    assert_eq!(
        split("\n\n  first line  \n\nsecond line\n"),
        vec![block("first line\nsecond line", &[])]
    );
}

#[test]
fn sibling_headers_replace_each_other() {
    assert_eq!(
        split("# A\ncontent1\n# B\ncontent2"),
        vec![
            block("content1", &[("Header 1", "A")]),
            block("content2", &[("Header 1", "B")]),
        ]
    );
}

#[test]
fn shallower_header_closes_nested_ones() {
    assert_eq!(
        split("# A\n## B\nc1\n# C\nc2"),
        vec![
            block("c1", &[("Header 1", "A"), ("Header 2", "B")]),
            block("c2", &[("Header 1", "C")]),
        ]
    );
}

#[test]
fn content_before_first_header_has_no_metadata() {
    assert_eq!(
        split("preamble\n# Title\nbody"),
        vec![
            block("preamble", &[]),
            block("body", &[("Header 1", "Title")]),
        ]
    );
}

#[test]
fn metadata_tracks_depth_up_and_down() {
    let doc = "\
# Guide
intro
## Install
### Linux
apt
### macOS
brew
## Usage
run it
#### Flags
--help
# Appendix
notes
";
    assert_eq!(
        split(doc),
        vec![
            block("intro", &[("Header 1", "Guide")]),
            block(
                "apt",
                &[
                    ("Header 1", "Guide"),
                    ("Header 2", "Install"),
                    ("Header 3", "Linux")
                ]
            ),
            block(
                "brew",
                &[
                    ("Header 1", "Guide"),
                    ("Header 2", "Install"),
                    ("Header 3", "macOS")
                ]
            ),
            block("run it", &[("Header 1", "Guide"), ("Header 2", "Usage")]),
            block(
                "--help",
                &[
                    ("Header 1", "Guide"),
                    ("Header 2", "Usage"),
                    ("Header 4", "Flags")
                ]
            ),
            block("notes", &[("Header 1", "Appendix")]),
        ]
    );
}

#[test]
fn marker_prefix_is_not_a_header() {
    assert_eq!(
        split("### Three\n####sometext\n#### Four\nbody"),
        vec![
            block("####sometext", &[("Header 3", "Three")]),
            block("body", &[("Header 3", "Three"), ("Header 4", "Four")]),
        ]
    );
}

#[test]
fn marker_only_header_has_empty_text() {
    assert_eq!(
        split("# Top\n##\ntext"),
        vec![block("text", &[("Header 1", "Top"), ("Header 2", "")])]
    );
}

#[test]
fn unrecognized_depth_is_content() {
    assert_eq!(
        split("# A\n##### five\ntext"),
        vec![block("##### five\ntext", &[("Header 1", "A")])]
    );
}

#[test]
fn lines_are_stripped_and_blank_lines_dropped() {
    assert_eq!(
        split("   # Title   \n\n    indented text\t\n\n\n  more  \n"),
        vec![block("indented text\nmore", &[("Header 1", "Title")])]
    );
}

#[test]
fn crlf_line_endings_are_tolerated() {
    assert_eq!(
        split("# A\r\nline one\r\nline two\r\n"),
        vec![block("line one\nline two", &[("Header 1", "A")])]
    );
}

#[test]
fn custom_labels_and_order() {
    let specs = vec![
        HeaderSpec::new("#", "title"),
        HeaderSpec::new("##", "section"),
    ];
    assert_eq!(
        split_with_headers("# Doc\n## Part\ntext\n### Sub\nmore", specs).unwrap(),
        vec![block(
            "text\n### Sub\nmore",
            &[("section", "Part"), ("title", "Doc")]
        )]
    );
}

#[test]
fn sentinel_spec_is_ignored() {
    let specs = vec![
        HeaderSpec::new("#", "Header 1"),
        HeaderSpec::new("##", ""),
        HeaderSpec::new("###", "Header 3"),
    ];
    assert_eq!(
        split_with_headers("# A\n## not split\ntext\n### C\nmore", specs).unwrap(),
        vec![
            block("## not split\ntext", &[("Header 1", "A")]),
            block("more", &[("Header 1", "A"), ("Header 3", "C")]),
        ]
    );
}

#[test]
fn deep_marker_listed_first_still_needs_a_space() {
    let specs = vec![
        HeaderSpec::new("##", "Header 2"),
        HeaderSpec::new("#", "Header 1"),
    ];
    assert_eq!(
        split_with_headers("## B\nx\n# A\ny", specs).unwrap(),
        vec![
            block("x", &[("Header 2", "B")]),
            block("y", &[("Header 1", "A")]),
        ]
    );
}

#[test]
fn invalid_marker_is_reported() {
    let err = split_with_headers("text", vec![HeaderSpec::new("", "Header 1")]).unwrap_err();
    assert!(err.to_string().contains("marker is empty"));
}

#[test]
fn empty_spec_list_never_splits() {
    assert_eq!(
        split_with_headers("# A\ntext", Vec::<HeaderSpec>::new()).unwrap(),
        vec![block("# A\ntext", &[])]
    );
}

#[test]
fn blocks_own_their_metadata() {
    let blocks = split("# A\none\n# B\ntwo");
    assert_eq!(blocks[0].metadata["Header 1"], "A");
    assert_eq!(blocks[1].metadata["Header 1"], "B");
}

#[test]
fn splitter_is_reusable_across_threads() {
    let splitter = Splitter::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let splitter = &splitter;
                scope.spawn(move || splitter.split(&format!("# T{}\nbody {}", i, i)))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let blocks = handle.join().unwrap();
            let title = format!("T{}", i);
            assert_eq!(
                blocks,
                vec![Block::new(
                    format!("body {}", i),
                    meta(&[("Header 1", title.as_str())])
                )]
            );
        }
    });
}
