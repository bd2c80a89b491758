use colored::{ColoredString, Colorize};
use dirtmirror::proxy::{ProxyNode, scalar_text};
use saphyr::{Scalar, Yaml};

const INDENT: &str = "  ";

/// Short single-line rendering of a leaf value.
pub fn describe_value(value: &Yaml<'_>) -> String {
    match value {
        Yaml::Value(Scalar::String(text)) => format!("{text:?}"),
        Yaml::Value(scalar) => scalar_text(scalar),
        Yaml::Mapping(mapping) => format!("{{{} entries}}", mapping.len()),
        Yaml::Sequence(items) => format!("[{} items]", items.len()),
        other => format!("{other:?}"),
    }
}

fn marker(dirty: bool) -> ColoredString {
    if dirty {
        "dirty".red().bold()
    } else {
        "clean".green()
    }
}

pub fn dirtiness_line(label: &str, root: &ProxyNode<Yaml<'_>>) -> String {
    format!("{label}: {}", marker(root.is_dirty()))
}

/// One line per node, children indented below their container.
pub fn render_tree(root: &ProxyNode<Yaml<'_>>) -> String {
    let mut lines = Vec::new();
    collect_lines(&mut lines, "(root)", root, 0);
    lines.join("\n")
}

fn collect_lines(lines: &mut Vec<String>, label: &str, node: &ProxyNode<Yaml<'_>>, depth: usize) {
    let indent = INDENT.repeat(depth);
    match node {
        ProxyNode::Field(field) if field.is_dirty() => lines.push(format!(
            "{indent}{label} = {} (was {}) [{}]",
            describe_value(field.get()),
            describe_value(field.origin()),
            marker(true)
        )),
        ProxyNode::Field(field) => lines.push(format!(
            "{indent}{label} = {} [{}]",
            describe_value(field.get()),
            marker(false)
        )),
        ProxyNode::Container(object) => {
            lines.push(format!("{indent}{label} [{}]", marker(object.is_dirty())));
            for (key, child) in object.iter() {
                collect_lines(lines, key.as_str(), child, depth + 1);
            }
        }
    }
}
