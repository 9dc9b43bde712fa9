//! @ai:module:intent Classify report file names into benchmark variants
//! @ai:module:layer domain
//! @ai:module:public_api Variant, classify_file_name, extract_size_label
//! @ai:module:stateless true

use crate::series::types::SizeLabel;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Extension every report file carries.
pub const REPORT_EXTENSION: &str = ".json";

/// @ai:intent Benchmark configuration distinguished by file name suffix
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Float,
    Double,
    FloatOptimised,
    DoubleOptimised,
}

impl Variant {
    /// @ai:intent All variants in output order
    /// @ai:effects pure
    pub fn all() -> [Variant; 4] {
        [
            Variant::Float,
            Variant::Double,
            Variant::FloatOptimised,
            Variant::DoubleOptimised,
        ]
    }

    /// @ai:intent File name suffix marking this variant
    /// @ai:effects pure
    pub fn suffix(&self) -> &'static str {
        match self {
            Variant::Float => "f",
            Variant::Double => "d",
            Variant::FloatOptimised => "fOpt",
            Variant::DoubleOptimised => "dOpt",
        }
    }

    /// @ai:intent Variant marked by an exact file name suffix
    /// @ai:effects pure
    pub fn from_suffix(suffix: &str) -> Option<Variant> {
        Variant::all().into_iter().find(|v| v.suffix() == suffix)
    }

    /// @ai:intent Human-readable label for chart titles and legends
    /// @ai:effects pure
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Float => "Float",
            Variant::Double => "Double",
            Variant::FloatOptimised => "Float (optimised)",
            Variant::DoubleOptimised => "Double (optimised)",
        }
    }

    /// @ai:intent Stem used for output file names
    /// @ai:effects pure
    pub fn file_stem(&self) -> &'static str {
        match self {
            Variant::Float => "float",
            Variant::Double => "double",
            Variant::FloatOptimised => "float_opt",
            Variant::DoubleOptimised => "double_opt",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn size_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"report(\d+)").expect("size label pattern is valid"))
}

// Longer suffixes first in the alternation so "fOpt" is never read as a plain "f" file.
fn report_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^report\d*[A-Za-z]*?(fOpt|dOpt|f|d)$").expect("report name pattern is valid")
    })
}

fn bare_report_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^report\d+$").expect("bare report pattern is valid"))
}

/// @ai:intent Map a report file name to its variant by matching the whole naming convention
/// @ai:pre file_name is a bare file name, not a path
/// @ai:post returns None when the name is not `report<digits><letters><suffix>.json`
/// @ai:effects pure
pub fn classify_file_name(file_name: &str) -> Option<Variant> {
    let stem = file_name.strip_suffix(REPORT_EXTENSION)?;

    if let Some(caps) = report_name_pattern().captures(stem) {
        return caps.get(1).and_then(|suffix| Variant::from_suffix(suffix.as_str()));
    }

    // No suffix at all is the double-precision naming convention.
    bare_report_pattern()
        .is_match(stem)
        .then_some(Variant::Double)
}

/// @ai:intent Extract the matrix size from the leading digit run of a report file name
/// @ai:post unknown when there is no digit run or it does not fit in u32
/// @ai:effects pure
pub fn extract_size_label(file_name: &str) -> SizeLabel {
    size_pattern()
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .map(SizeLabel::known)
        .unwrap_or_else(SizeLabel::unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_suffixes() {
        assert_eq!(classify_file_name("report16f.json"), Some(Variant::Float));
        assert_eq!(classify_file_name("report10d.json"), Some(Variant::Double));
    }

    #[test]
    fn test_classify_optimised_suffixes_are_not_plain() {
        assert_eq!(
            classify_file_name("report16fOpt.json"),
            Some(Variant::FloatOptimised)
        );
        assert_eq!(
            classify_file_name("report10dOpt.json"),
            Some(Variant::DoubleOptimised)
        );
    }

    #[test]
    fn test_classify_bare_report_is_double() {
        assert_eq!(classify_file_name("report64.json"), Some(Variant::Double));
    }

    #[test]
    fn test_classify_rejects_other_files() {
        assert_eq!(classify_file_name("report16f.txt"), None);
        assert_eq!(classify_file_name("notes.json"), None);
        assert_eq!(classify_file_name("report16fOpt.json.bak"), None);
        assert_eq!(classify_file_name("report16x.json"), None);
    }

    #[test]
    fn test_classify_requires_report_prefix() {
        assert_eq!(classify_file_name("noted.json"), None);
        assert_eq!(classify_file_name("conf.json"), None);
        assert_eq!(classify_file_name("compile_commands_old.json"), None);
        assert_eq!(classify_file_name("old_report16f.json"), None);
        assert_eq!(classify_file_name("report16f_backup.json"), None);
    }

    #[test]
    fn test_classify_without_size_still_matches() {
        assert_eq!(classify_file_name("reportf.json"), Some(Variant::Float));
        assert_eq!(classify_file_name("reportdOpt.json"), Some(Variant::DoubleOptimised));
    }

    #[test]
    fn test_classify_letters_before_suffix() {
        assert_eq!(classify_file_name("report16xf.json"), Some(Variant::Float));
        assert_eq!(classify_file_name("report16fd.json"), Some(Variant::Double));
    }

    #[test]
    fn test_suffix_must_precede_extension() {
        // "f" appears in the middle of the stem but the stem ends in "x".
        assert_eq!(classify_file_name("reportf16x.json"), None);
    }

    #[test]
    fn test_extract_size_label() {
        assert_eq!(extract_size_label("report16f.json"), SizeLabel::known(16));
        assert_eq!(extract_size_label("report1024dOpt.json"), SizeLabel::known(1024));
        assert_eq!(extract_size_label("reportf.json"), SizeLabel::unknown());
    }

    #[test]
    fn test_extract_size_label_overflow_is_unknown() {
        assert_eq!(
            extract_size_label("report99999999999999f.json"),
            SizeLabel::unknown()
        );
    }

    #[test]
    fn test_variant_labels_are_distinct() {
        let stems: std::collections::HashSet<_> =
            Variant::all().iter().map(|v| v.file_stem()).collect();
        assert_eq!(stems.len(), 4);
    }
}
