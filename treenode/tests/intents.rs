use std::cell::RefCell;
use std::rc::Rc;

use simplelog::{Config, LevelFilter, TestLogger};
use treenode::{
    Checked, DisabledPolicy, EventResult, Expanded, Intent, NodeProps, Selected, TreeNode,
    TreeNodeConfig,
};
use webdom::{Element, Event, MouseButton};

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Records every callback invocation as `(intent, next value, node value)`.
#[derive(Default, Clone)]
struct Recorder {
    calls: Rc<RefCell<Vec<(Intent, u8, String)>>>,
}

impl Recorder {
    fn wire(&self, props: NodeProps) -> NodeProps {
        let expand = self.calls.clone();
        let select = self.calls.clone();
        let check = self.calls.clone();
        props
            .on_expand(move |next: Expanded, node: &TreeNode| {
                expand
                    .borrow_mut()
                    .push((Intent::Expand, next.into(), node.value().to_string()))
            })
            .on_select(move |next: Selected, node: &TreeNode| {
                select
                    .borrow_mut()
                    .push((Intent::Select, next.into(), node.value().to_string()))
            })
            .on_check(move |next: Checked, node: &TreeNode| {
                check
                    .borrow_mut()
                    .push((Intent::Check, next.into(), node.value().to_string()))
            })
    }

    fn calls(&self) -> Vec<(Intent, u8, String)> {
        self.calls.borrow().clone()
    }
}

fn branch() -> NodeProps {
    NodeProps::new("n1", "Node").children([Element::li().id("c1")])
}

// ============================================================================
// Expand
// ============================================================================

#[test]
fn test_expand_toggles_regardless_of_other_props() {
    init_logger();
    for expanded in [Expanded::Collapsed, Expanded::Expanded] {
        for commbox in [false, true] {
            for leaf in [false, true] {
                let rec = Recorder::default();
                let node = TreeNode::new(
                    rec.wire(branch().expanded(expanded).commbox(commbox).leaf(leaf)),
                );
                node.on_expand();
                let expected = 1 - u8::from(expanded);
                assert_eq!(rec.calls(), vec![(Intent::Expand, expected, "n1".to_string())]);
            }
        }
    }
}

#[test]
fn test_expand_on_leaf_still_callable_directly() {
    let rec = Recorder::default();
    let node = TreeNode::new(rec.wire(NodeProps::new("leaf", "Leaf")));
    assert!(node.is_leaf());
    node.on_expand();
    assert_eq!(rec.calls(), vec![(Intent::Expand, 1, "leaf".to_string())]);
}

// ============================================================================
// Select
// ============================================================================

#[test]
fn test_select_without_commbox() {
    let rec = Recorder::default();
    TreeNode::new(rec.wire(branch())).on_select();
    assert_eq!(rec.calls(), vec![(Intent::Select, 1, "n1".to_string())]);

    let rec = Recorder::default();
    TreeNode::new(rec.wire(branch().selected(Selected::Selected))).on_select();
    assert_eq!(rec.calls(), vec![(Intent::Select, 0, "n1".to_string())]);
}

#[test]
fn test_select_suppressed_with_commbox() {
    init_logger();
    let rec = Recorder::default();
    TreeNode::new(rec.wire(branch().commbox(true))).on_select();
    assert!(rec.calls().is_empty());
}

// ============================================================================
// Check
// ============================================================================

#[test]
fn test_check_toggle() {
    for (checked, expected) in [
        (Checked::Unchecked, 1),
        (Checked::Checked, 0),
        (Checked::Indeterminate, 1),
    ] {
        let rec = Recorder::default();
        TreeNode::new(rec.wire(branch().commbox(true).checked(checked))).on_check();
        assert_eq!(rec.calls(), vec![(Intent::Check, expected, "n1".to_string())]);
    }
}

#[test]
fn test_default_callbacks_are_noops() {
    let node = TreeNode::new(branch());
    node.on_expand();
    node.on_select();
    node.on_check();
}

// ============================================================================
// Disabled
// ============================================================================

#[test]
fn test_disabled_inert_by_default() {
    let rec = Recorder::default();
    let node = TreeNode::new(rec.wire(branch().disabled(true)));
    node.on_expand();
    node.on_select();
    node.on_check();
    assert_eq!(rec.calls().len(), 3);
}

#[test]
fn test_disabled_blocks_intents_when_configured() {
    init_logger();
    let rec = Recorder::default();
    let config = TreeNodeConfig::default().disabled_policy(DisabledPolicy::BlockIntents);
    let node =
        TreeNode::with_config(rec.wire(branch().disabled(true)), config.clone()).unwrap();
    node.on_expand();
    node.on_select();
    node.on_check();
    assert!(rec.calls().is_empty());

    let node = TreeNode::with_config(rec.wire(branch()), config).unwrap();
    node.on_expand();
    assert_eq!(rec.calls().len(), 1);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_arrow_click_expands() {
    let rec = Recorder::default();
    let node = TreeNode::new(rec.wire(branch()));
    assert_eq!(
        node.dispatch(&Event::click("n1").at_part("arrow")),
        EventResult::Consumed(Intent::Expand)
    );
    assert_eq!(rec.calls(), vec![(Intent::Expand, 1, "n1".to_string())]);
}

#[test]
fn test_dispatch_label_click_and_double_click() {
    let rec = Recorder::default();
    let node = TreeNode::new(rec.wire(branch()));
    assert_eq!(
        node.dispatch(&Event::click("n1").at_part("label")),
        EventResult::Consumed(Intent::Select)
    );
    assert_eq!(
        node.dispatch(&Event::double_click("n1").at_part("label")),
        EventResult::Consumed(Intent::Expand)
    );
    assert_eq!(
        rec.calls(),
        vec![
            (Intent::Select, 1, "n1".to_string()),
            (Intent::Expand, 1, "n1".to_string()),
        ]
    );
}

#[test]
fn test_dispatch_label_click_with_commbox_consumed_without_callback() {
    let rec = Recorder::default();
    let node = TreeNode::new(rec.wire(branch().commbox(true)));
    assert_eq!(
        node.dispatch(&Event::click("n1").at_part("label")),
        EventResult::Consumed(Intent::Select)
    );
    assert!(rec.calls().is_empty());
}

#[test]
fn test_dispatch_commbox_click_checks() {
    let rec = Recorder::default();
    let node = TreeNode::new(rec.wire(branch().commbox(true).checked(Checked::Indeterminate)));
    assert_eq!(
        node.dispatch(&Event::click("n1").at_part("commbox")),
        EventResult::Consumed(Intent::Check)
    );
    assert_eq!(rec.calls(), vec![(Intent::Check, 1, "n1".to_string())]);
}

#[test]
fn test_dispatch_ignored_cases() {
    let rec = Recorder::default();
    let node = TreeNode::new(rec.wire(NodeProps::new("n1", "Node")));

    let ignored = |event: Event| node.dispatch(&event) == EventResult::Ignored;

    // leaf has no arrow to click
    assert!(ignored(Event::click("n1").at_part("arrow")));
    // no commbox rendered
    assert!(ignored(Event::click("n1").at_part("commbox")));
    // root itself, no part
    assert!(ignored(Event::click("n1")));
    // unrelated element
    assert!(ignored(Event::click("other").at_part("label")));
    // right button
    assert!(ignored(Event::Click {
        target: Some("n1".into()),
        part: Some("label".into()),
        button: MouseButton::Right,
    }));
    // untargeted
    assert!(ignored(Event::DoubleClick {
        target: None,
        part: Some("label".into()),
    }));

    assert!(rec.calls().is_empty());
}

#[test]
fn test_dispatch_skips_nested_child_nodes() {
    let rec = Recorder::default();
    let child = TreeNode::new(NodeProps::new("c1", "Child")).render();
    let node = TreeNode::new(rec.wire(NodeProps::new("n1", "Node").children([child])));

    assert_eq!(
        node.dispatch(&Event::click("c1").at_part("label")),
        EventResult::Ignored
    );
    assert!(rec.calls().is_empty());
}

#[test]
fn test_dispatch_child_value_shaped_like_a_part() {
    let rec = Recorder::default();
    let child = TreeNode::new(NodeProps::new("a:label", "Child")).render();
    let node = TreeNode::new(rec.wire(NodeProps::new("a", "Parent").children([child])));

    // the child's root is not the parent's label
    assert_eq!(node.dispatch(&Event::click("a:label")), EventResult::Ignored);
    assert_eq!(
        node.dispatch(&Event::click("a:label").at_part("label")),
        EventResult::Ignored
    );
    assert!(rec.calls().is_empty());

    // parent's label id space stays free of the child's id
    let rendered = node.render();
    assert_eq!(
        webdom::find_element(&rendered, "a:label").map(|el| el.tag),
        Some(webdom::Tag::Li)
    );
    assert!(rendered.child_elements()[1].id.is_none());
}

#[test]
fn test_dispatch_ignores_part_markers_inside_child_content() {
    let rec = Recorder::default();
    let fake_arrow = Element::i().data("part", "arrow").on_click("expand");
    let node = TreeNode::new(rec.wire(
        NodeProps::new("n1", "Node")
            .leaf(true)
            .children([fake_arrow]),
    ));

    assert_eq!(
        node.dispatch(&Event::click("n1").at_part("arrow")),
        EventResult::Ignored
    );
    assert!(rec.calls().is_empty());
}

#[test]
fn test_raise_routes_to_handlers() {
    let rec = Recorder::default();
    let node = TreeNode::new(rec.wire(branch()));
    node.raise(Intent::Check);
    assert_eq!(rec.calls(), vec![(Intent::Check, 1, "n1".to_string())]);
}
