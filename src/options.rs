#![allow(clippy::must_use_candidate)]

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Configuration key, gcovr flag and a short description, in gcovr's own help order.
const OPTIONS: &[(&str, &str, &str)] = &[
    (
        "object_directory",
        "--object-directory",
        "Specify the directory that contains the gcov data files.",
    ),
    ("output", "-o", "Print output to this filename."),
    ("keep", "-k", "Keep the temporary *.gcov files generated by gcov."),
    ("delete", "-d", "Delete the coverage files after they are processed."),
    (
        "filter",
        "-f",
        "Keep only the data files that match this regular expression.",
    ),
    (
        "exclude",
        "-e",
        "Exclude data files that match this regular expression.",
    ),
    (
        "gcov_filter",
        "--gcov-filter",
        "Keep only gcov data files that match this regular expression.",
    ),
    (
        "gcov_exclude",
        "--gcov-exclude",
        "Exclude gcov data files that match this regular expression.",
    ),
    ("root", "-r", "Defines the root directory for source files."),
    ("xml", "-x", "Generate XML instead of the normal tabular output."),
    (
        "xml_pretty",
        "--xml-pretty",
        "Generate pretty XML instead of the normal dense format.",
    ),
    ("html", "--html", "Generate HTML instead of the normal tabular output."),
    (
        "html_details",
        "--html-details",
        "Generate HTML output for source file coverage.",
    ),
    (
        "html_absolute_paths",
        "--html-absolute-paths",
        "Set the paths in the HTML report to be absolute instead of relative.",
    ),
    (
        "branches",
        "-b",
        "Tabulate the branch coverage instead of the line coverage.",
    ),
    (
        "sort_uncovered",
        "-u",
        "Sort entries by increasing number of uncovered lines.",
    ),
    (
        "sort_percentage",
        "-p",
        "Sort entries by decreasing percentage of covered lines.",
    ),
    (
        "gcov_executable",
        "--gcov-executable",
        "Defines the name/path to the gcov executable (defaults to $GCOV, else 'gcov').",
    ),
    (
        "exclude_unreachable_branches",
        "--exclude-unreachable-branches",
        "Exclude from coverage branches marked by LCOV/GCOV exclusion markers or from dead code.",
    ),
    ("use_gcov_files", "-g", "Use preprocessed gcov files for analysis."),
    (
        "print_summary",
        "-s",
        "Prints a small report to stdout with line & branch percentage coverage.",
    ),
];

/// Key to flag lookup, built once on first use.
pub static OPTION_TABLE: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| OPTIONS.iter().map(|(key, flag, _)| (*key, *flag)).collect());

/// Key to human description, for listing the supported options.
pub static OPTION_DESCRIPTIONS: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| OPTIONS.iter().map(|(key, _, desc)| (*key, *desc)).collect());

pub fn flag_for(key: &str) -> Option<&'static str> {
    OPTION_TABLE.get(key).copied()
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionInfo {
    pub key: &'static str,
    pub flag: &'static str,
    pub description: &'static str,
}

/// All supported options in table order.
pub fn available_options() -> Vec<OptionInfo> {
    OPTIONS
        .iter()
        .map(|&(key, flag, description)| OptionInfo {
            key,
            flag,
            description,
        })
        .collect()
}

/// Value of a single named option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Absent,
    Flag(bool),
    Text(String),
}

impl OptionValue {
    /// Renders `flag` for this value, or `None` when the option is omitted.
    fn render(&self, flag: &str) -> Option<String> {
        match self {
            OptionValue::Absent | OptionValue::Flag(false) => None,
            OptionValue::Flag(true) => Some(flag.to_string()),
            OptionValue::Text(v) if v.is_empty() => Some(flag.to_string()),
            OptionValue::Text(v) => Some(format!("{flag} \"{v}\"")),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Flag(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(OptionValue::Absent, Into::into)
    }
}

/// What the caller hands the action: named options or a ready-made argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GcovrParams {
    Named(IndexMap<String, OptionValue>),
    Raw(Vec<String>),
}

impl GcovrParams {
    pub fn to_args(&self) -> Vec<String> {
        match self {
            GcovrParams::Named(map) => params_to_cli_args(map),
            GcovrParams::Raw(args) => args.clone(),
        }
    }

    /// The output path, when one is given as text.
    pub fn output_path(&self) -> Option<&str> {
        match self {
            GcovrParams::Named(map) => match map.get("output") {
                Some(OptionValue::Text(p)) if !p.is_empty() => Some(p.as_str()),
                _ => None,
            },
            GcovrParams::Raw(_) => None,
        }
    }
}

/// Maps named options to gcovr flag tokens, preserving the input order.
///
/// Absent values and keys gcovr has no flag for are dropped.
pub fn params_to_cli_args(params: &IndexMap<String, OptionValue>) -> Vec<String> {
    params
        .iter()
        .filter(|(_, v)| **v != OptionValue::Absent)
        .filter_map(|(key, value)| match flag_for(key) {
            Some(flag) => value.render(flag),
            None => {
                log::trace!("Dropping unknown gcovr option `{key}`");
                None
            }
        })
        .collect()
}
