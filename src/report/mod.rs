mod tree_report;

pub use tree_report::{describe_value, dirtiness_line, render_tree};
