use dirtmirror::proxy::ProxyPath;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;

/// A `PATH=VALUE` pair from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<'a> {
    pub path: ProxyPath,
    pub value: Yaml<'a>,
}

impl<'a> Assignment<'a> {
    /// Splits at the first `=`. The value is parsed as YAML and an empty
    /// value stands for null.
    pub fn parse(raw: &'a str) -> Result<Self, AssignmentError> {
        let (path, value) = raw
            .split_once('=')
            .context(MissingSeparatorSnafu { raw })?;

        let value = Yaml::load_from_str(value.trim())
            .context(ValueParseSnafu { raw })?
            .into_iter()
            .next()
            .unwrap_or(Yaml::Value(Scalar::Null));

        Ok(Assignment {
            path: ProxyPath::from(path.trim()),
            value,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum AssignmentError {
    #[snafu(display("Assignment '{}' should look like PATH=VALUE", raw))]
    MissingSeparator { raw: String },
    #[snafu(display("Failed to parse the value of assignment '{}'", raw))]
    ValueParseError {
        raw: String,
        source: saphyr::ScanError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::borrow::Cow;

    #[rstest]
    #[case("x.y.z=8", "x.y.z", Yaml::Value(Scalar::Integer(8)))]
    #[case("name = hello world", "name", Yaml::Value(Scalar::String(Cow::Borrowed("hello world"))))]
    #[case("flag=", "flag", Yaml::Value(Scalar::Null))]
    #[case("=true", "", Yaml::Value(Scalar::Boolean(true)))]
    #[case("eq=a=b", "eq", Yaml::Value(Scalar::String(Cow::Borrowed("a=b"))))]
    fn parses_path_and_value(
        #[case] raw: &str,
        #[case] expected_path: &str,
        #[case] expected_value: Yaml<'static>,
    ) {
        let assignment = Assignment::parse(raw).expect("Failed to parse assignment");
        assert_eq!(assignment.path, ProxyPath::from(expected_path));
        assert_eq!(assignment.value, expected_value);
    }

    #[test]
    fn compound_values_are_allowed() {
        let assignment = Assignment::parse("slot={a: 1}").expect("Failed to parse assignment");
        assert!(assignment.value.as_mapping().is_some());
    }

    #[test]
    fn missing_separator_is_reported() {
        let result = Assignment::parse("x.y.z");
        assert!(matches!(
            result,
            Err(AssignmentError::MissingSeparator { ref raw }) if raw == "x.y.z"
        ));
    }

    #[test]
    fn invalid_value_is_reported() {
        let result = Assignment::parse("x=[unclosed");
        assert!(matches!(
            result,
            Err(AssignmentError::ValueParseError { .. })
        ));
    }
}
