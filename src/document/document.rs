use compio::{fs::File, io::AsyncReadExt, io::BufReader};
use saphyr::{LoadableYamlNode, Yaml};
use snafu::prelude::*;
use std::{io::Cursor, path::Path, path::PathBuf};
use tracing::debug;

/// Document mirrored when no file is given on the command line.
pub const DEMO_DOCUMENT: &str = "x:\n  y:\n    z: 5\n";

/// Assignments applied to the demo document when none are given.
pub const DEMO_ASSIGNMENTS: &[&str] = &["x.y.z=8"];

pub async fn read_source(path: &Path) -> Result<String, DocumentError> {
    debug!("Opening document: {}", path.display());
    let file = File::open(path).await.context(ReadSnafu { path })?;

    let cursor = Cursor::new(file);
    let mut reader = BufReader::new(cursor);
    let res = reader.read_to_string(String::new()).await;
    let bytes = res.0.context(ReadSnafu { path })?;
    debug!("Successfully read document: {bytes} bytes");

    Ok(res.1)
}

/// Parses `source` and returns its first document.
pub fn parse(source: &str) -> Result<Yaml<'_>, DocumentError> {
    let documents = Yaml::load_from_str(source).context(ParseSnafu)?;
    if documents.len() > 1 {
        debug!(
            "Source holds {} documents, only the first one is mirrored",
            documents.len()
        );
    }
    documents.into_iter().next().context(EmptyDocumentSnafu)
}

#[derive(Debug, Snafu)]
pub enum DocumentError {
    #[snafu(display("Failed to read the document: {}", path.display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the document"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("The source contains no YAML document"))]
    EmptyDocument,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[compio::test]
    async fn read_returns_error_on_nonexistent_file() {
        let result = read_source(Path::new("/this/path/does/not/exist.yaml")).await;
        assert!(matches!(result, Err(DocumentError::ReadError { .. })));
    }

    #[compio::test]
    async fn read_returns_file_contents() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "a: 1\nb: [1, 2]\n").expect("Failed to write to temp file");

        let source = read_source(temp_file.path())
            .await
            .expect("Failed to read temp file");
        assert_eq!(source, "a: 1\nb: [1, 2]\n");
    }

    #[test]
    fn parse_returns_error_on_invalid_yaml() {
        let result = parse("invalid: yaml: content: [unclosed");
        assert!(matches!(result, Err(DocumentError::ParseError { .. })));
    }

    #[test]
    fn parse_returns_error_on_empty_source() {
        let result = parse("");
        assert!(matches!(result, Err(DocumentError::EmptyDocument)));
    }

    #[test]
    fn parse_keeps_only_the_first_document() {
        let document = parse("first: 1\n---\nsecond: 2\n").expect("Failed to parse");
        let mapping = document.as_mapping().expect("Expected a mapping");
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn demo_document_parses_to_a_mapping() {
        let document = parse(DEMO_DOCUMENT).expect("Failed to parse demo");
        assert!(document.as_mapping().is_some());
    }

    #[test]
    fn error_display_names_the_path() {
        let error = DocumentError::ReadError {
            path: PathBuf::from("/missing/doc.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(error.to_string().contains("/missing/doc.yaml"));
    }
}
