//! HTML-like serialization of an element tree.
//!
//! Used for snapshots in tests and by hosts that hand markup to a browser.
//! Listeners serialize as `onclick="handler"` attributes naming the handler.

use std::fmt::Write;

use crate::element::{Content, Element};

pub fn to_markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root);
    out
}

fn write_element(out: &mut String, element: &Element) {
    let tag = element.tag.name();
    out.push('<');
    out.push_str(tag);

    if let Some(id) = &element.id {
        write_attr(out, "id", id);
    }
    if !element.classes.is_empty() {
        write_attr(out, "class", &element.class_attr());
    }
    if let Some(title) = &element.title {
        write_attr(out, "title", title);
    }
    for (key, value) in &element.data {
        write_attr(out, &format!("data-{key}"), value);
    }
    for (kind, handler) in &element.listeners {
        write_attr(out, kind.attr(), handler);
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => escape_into(out, text),
        Content::Children(children) => {
            for child in children {
                write_element(out, child);
            }
        }
    }

    let _ = write!(out, "</{tag}>");
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"");
    escape_into(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
