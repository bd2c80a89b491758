use dirtmirror::proxy::{self, PathError, ProxyNode};
use saphyr::Yaml;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::{Assignment, AssignmentError, RuntimeConfig};
use crate::document::{self, DEMO_ASSIGNMENTS, DEMO_DOCUMENT, DocumentError};
use crate::report;

pub struct Application;

impl Application {
    pub async fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        runtime_config.color.apply();

        let source = match &runtime_config.document {
            Some(path) => document::read_source(path)
                .await
                .context(DocumentSnafu)?,
            None => {
                info!("No document given, mirroring the built-in demo");
                DEMO_DOCUMENT.to_string()
            }
        };

        let assignments = Self::raw_assignments(&runtime_config)
            .into_iter()
            .map(Assignment::parse)
            .collect::<Result<Vec<_>, _>>()
            .context(AssignmentSnafu)?;
        debug!("Parsed {} assignments", assignments.len());

        let document = document::parse(&source).context(DocumentSnafu)?;
        let mut root = proxy::build(document);
        debug!("Built proxy tree: {:?}", root);

        for line in Self::session(&mut root, assignments)? {
            println!("{line}");
        }

        Ok(())
    }

    /// Applies `assignments` through the proxy tree and returns the report.
    pub fn session<'a>(
        root: &mut ProxyNode<Yaml<'a>>,
        assignments: Vec<Assignment<'a>>,
    ) -> Result<Vec<String>, ApplicationError> {
        let mut lines = vec![report::dirtiness_line("dirty before", root)];

        for assignment in assignments {
            let field = root
                .field_at_mut(&assignment.path)
                .context(AssignmentPathSnafu)?;
            let previous = report::describe_value(field.get());
            field.set(assignment.value);
            info!("Assigned '{}'", assignment.path.describe());
            lines.push(format!(
                "set {}: {} -> {}",
                assignment.path.describe(),
                previous,
                report::describe_value(field.get())
            ));
        }

        lines.push(report::dirtiness_line("dirty after", root));
        lines.push(report::render_tree(root));
        Ok(lines)
    }

    fn raw_assignments(runtime_config: &RuntimeConfig) -> Vec<&str> {
        if runtime_config.document.is_none() && runtime_config.assignments.is_empty() {
            DEMO_ASSIGNMENTS.to_vec()
        } else {
            runtime_config
                .assignments
                .iter()
                .map(String::as_str)
                .collect()
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the document"))]
    Document { source: DocumentError },
    #[snafu(display("Critical failure encountered while reading assignments"))]
    Assignment { source: AssignmentError },
    #[snafu(display("Critical failure encountered while applying an assignment"))]
    AssignmentPath { source: PathError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data::ColorChoice;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn config(document: Option<PathBuf>, assignments: &[&str]) -> RuntimeConfig {
        RuntimeConfig {
            document,
            assignments: assignments.iter().map(|raw| raw.to_string()).collect(),
            color: ColorChoice::Never,
        }
    }

    #[test]
    fn demo_assignments_apply_only_without_input() {
        assert_eq!(Application::raw_assignments(&config(None, &[])), DEMO_ASSIGNMENTS);
        assert_eq!(
            Application::raw_assignments(&config(None, &["a=1"])),
            vec!["a=1"]
        );
        assert!(
            Application::raw_assignments(&config(Some(PathBuf::from("doc.yaml")), &[]))
                .is_empty()
        );
    }

    #[test]
    fn demo_session_reports_the_change() {
        let document = document::parse(DEMO_DOCUMENT).unwrap();
        let mut root = proxy::build(document);
        let assignments = DEMO_ASSIGNMENTS
            .iter()
            .map(|raw| Assignment::parse(raw).unwrap())
            .collect();

        let lines = Application::session(&mut root, assignments).unwrap();

        assert!(lines[0].starts_with("dirty before: ") && lines[0].contains("clean"));
        assert_eq!(lines[1], "set x.y.z: 5 -> 8");
        assert!(lines[2].starts_with("dirty after: ") && lines[2].contains("dirty"));
        assert!(lines[3].contains("z = 8 (was 5)"));
        assert!(root.is_dirty());
    }

    #[test]
    fn assignments_apply_in_order() {
        let document = document::parse("v: 1").unwrap();
        let mut root = proxy::build(document);
        let assignments = ["v=2", "v=1"]
            .into_iter()
            .map(|raw| Assignment::parse(raw).unwrap())
            .collect();

        let lines = Application::session(&mut root, assignments).unwrap();

        assert_eq!(lines[1], "set v: 1 -> 2");
        assert_eq!(lines[2], "set v: 2 -> 1");
        assert!(!root.is_dirty());
    }

    #[test]
    fn assigning_to_a_container_fails() {
        let document = document::parse(DEMO_DOCUMENT).unwrap();
        let mut root = proxy::build(document);
        let assignments = vec![Assignment::parse("x.y=1").unwrap()];

        let result = Application::session(&mut root, assignments);

        assert!(matches!(
            result,
            Err(ApplicationError::AssignmentPath {
                source: PathError::NotAField { .. }
            })
        ));
        assert!(!root.is_dirty());
    }

    #[test]
    fn assigning_to_a_missing_key_fails() {
        let document = document::parse(DEMO_DOCUMENT).unwrap();
        let mut root = proxy::build(document);
        let assignments = vec![Assignment::parse("x.q=1").unwrap()];

        let result = Application::session(&mut root, assignments);

        assert!(matches!(
            result,
            Err(ApplicationError::AssignmentPath {
                source: PathError::MissingKey { .. }
            })
        ));
    }

    #[test]
    fn escaped_paths_reach_keys_containing_dots() {
        let document = document::parse("\"app.name\": old\napp:\n  name: nested\n").unwrap();
        let mut root = proxy::build(document);
        let assignments = vec![Assignment::parse(r"app\.name=new").unwrap()];

        let lines = Application::session(&mut root, assignments).unwrap();

        assert_eq!(lines[1], r#"set app\.name: "old" -> "new""#);
        assert!(root["app.name"].is_dirty());
        assert!(!root["app"]["name"].is_dirty());
    }

    #[compio::test]
    async fn run_reads_a_document_from_disk() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "name: old").expect("Failed to write to temp file");

        let result = Application::run(config(
            Some(temp_file.path().to_path_buf()),
            &["name=new"],
        ))
        .await;

        assert!(result.is_ok());
    }

    #[compio::test]
    async fn run_reports_missing_documents() {
        let result = Application::run(config(
            Some(PathBuf::from("/this/path/does/not/exist.yaml")),
            &[],
        ))
        .await;

        assert!(matches!(result, Err(ApplicationError::Document { .. })));
    }

    #[compio::test]
    async fn run_reports_malformed_assignments() {
        let result = Application::run(config(None, &["no-separator"])).await;
        assert!(matches!(result, Err(ApplicationError::Assignment { .. })));
    }
}
