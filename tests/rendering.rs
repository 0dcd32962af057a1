//! Rendered output: one row per level, labels in sibling order

use indexed_tree::{IndexedTree, Label, RenderConfig, Renderer, TreeConfig};
use proptest::prelude::*;

mod common;
use common::assert_snapshot;

fn tokens(line: &str) -> Vec<&str> {
    line.split(|c: char| c == '_' || c == '|')
        .filter(|token| !token.is_empty())
        .collect()
}

#[test]
fn default_tree_matches_snapshot() {
    let tree = IndexedTree::new(TreeConfig::default()).expect("tree builds");
    assert_snapshot("height4_default.txt", &Renderer::default().render(&tree));
}

#[test]
fn display_uses_default_renderer() {
    let tree = IndexedTree::new(TreeConfig::default()).expect("tree builds");
    assert_eq!(tree.to_string(), Renderer::default().render(&tree));
}

#[test]
fn each_line_holds_its_level() {
    let tree = IndexedTree::new(TreeConfig::new(4)).expect("tree builds");
    let rendered = Renderer::default().render(&tree);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(tokens(lines[0]), vec!["0"]);
    assert_eq!(tokens(lines[1]), vec!["1", "2"]);
    assert_eq!(tokens(lines[2]), vec!["3", "4", "5", "6"]);
    assert_eq!(
        tokens(lines[3]),
        vec!["7", "8", "9", "10", "11", "12", "13", "14"]
    );
}

#[test]
fn custom_fill_and_no_border() {
    let tree = IndexedTree::new(TreeConfig::new(2)).expect("tree builds");
    let renderer = Renderer::new(RenderConfig {
        width: 12,
        fill: ' ',
        border: None,
    })
    .expect("renderer builds");
    assert_eq!(renderer.render(&tree), "      0     \n    1   2   \n");
}

proptest! {
    #[test]
    fn labels_never_overlap(
        height in 1u32..=7,
        label_width in 1usize..=4,
        width in 1usize..300,
    ) {
        let config = TreeConfig::new(height).with_label_width(label_width);
        let tree = IndexedTree::new(config).expect("tree builds");
        let renderer = Renderer::new(RenderConfig::with_width(width)).expect("renderer builds");
        let lines = renderer.render_lines(&tree);

        prop_assert_eq!(lines.len(), height as usize);
        for (line, level) in lines.iter().zip(tree.levels()) {
            let expected: Vec<&str> = level.iter().map(Label::as_str).collect();
            prop_assert_eq!(tokens(line), expected);
            prop_assert_eq!(line.chars().count(), 1 + renderer.effective_width(&tree));
        }
    }
}
