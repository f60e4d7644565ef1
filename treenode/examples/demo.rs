//! Renders a small checkbox tree, feeds it a few clicks and prints the
//! markup after each one. Intents are logged to stderr.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use simplelog::{Config, LevelFilter, WriteLogger};
use treenode::{Checked, Expanded, NodeProps, Selected, TreeNode, TreeOwner};
use webdom::{Element, Event, to_markup};

struct Item {
    text: &'static str,
    children: Vec<&'static str>,
}

#[derive(Default, Clone, Copy)]
struct Flags {
    expanded: Expanded,
    selected: Selected,
    checked: Checked,
}

struct DemoTree {
    items: HashMap<&'static str, Item>,
    flags: Rc<RefCell<HashMap<String, Flags>>>,
}

impl DemoTree {
    fn new() -> Self {
        let items = HashMap::from([
            ("root", Item { text: "Project", children: vec!["src", "README.md"] }),
            ("src", Item { text: "src", children: vec!["main.rs", "lib.rs"] }),
            ("README.md", Item { text: "README.md", children: vec![] }),
            ("main.rs", Item { text: "main.rs", children: vec![] }),
            ("lib.rs", Item { text: "lib.rs", children: vec![] }),
        ]);
        Self {
            items,
            flags: Rc::default(),
        }
    }

    fn node(&self, value: &str, path: &str, children: Option<Vec<Element>>) -> TreeNode {
        let flags = self.flags.borrow().get(value).copied().unwrap_or_default();
        let text = self.items.get(value).map_or(value, |item| item.text);

        let (on_expand, on_check) = (self.flags.clone(), self.flags.clone());
        let mut props = NodeProps::new(value, text)
            .path(path)
            .commbox(true)
            .multiple(true)
            .expanded(flags.expanded)
            .selected(flags.selected)
            .checked(flags.checked)
            .on_expand(move |next, node| {
                on_expand.borrow_mut().entry(node.value().to_string()).or_default().expanded = next;
            })
            .on_check(move |next, node| {
                on_check.borrow_mut().entry(node.value().to_string()).or_default().checked = next;
            });
        if let Some(children) = children {
            props = props.children(children);
        }
        TreeNode::new(props)
    }

    fn render_item(&self, value: &str, path: &str) -> Element {
        let Some(item) = self.items.get(value) else {
            return Element::li().id(value);
        };
        if item.children.is_empty() {
            return self.node(value, path, None).render();
        }

        let stubs = item.children.iter().map(|c| Element::li().id(*c)).collect();
        let list = self.node(value, path, Some(stubs)).render_children(Some(self));
        self.node(value, path, Some(list.into_iter().collect())).render()
    }

    /// Route an event to the node it targets.
    fn click(&self, event: Event) {
        let Some(value) = event.target() else {
            return;
        };
        let result = self.node(value, "", Some(Vec::new())).dispatch(&event);
        log::info!("{event:?} -> {result:?}");
    }
}

impl TreeOwner for DemoTree {
    fn render_tree_node(
        &self,
        child: &Element,
        index: usize,
        _parent: &TreeNode,
        path: &str,
    ) -> Element {
        let value = child.id.as_deref().unwrap_or_default();
        self.render_item(value, &format!("{path}/{index}"))
    }
}

fn main() {
    WriteLogger::init(LevelFilter::Debug, Config::default(), std::io::stderr())
        .expect("Failed to initialize logger");

    let tree = DemoTree::new();
    println!("{}\n", to_markup(&tree.render_item("root", "0")));

    for event in [
        Event::click("root").at_part("arrow"),
        Event::double_click("src").at_part("label"),
        Event::click("main.rs").at_part("commbox"),
    ] {
        tree.click(event);
        println!("{}\n", to_markup(&tree.render_item("root", "0")));
    }
}
