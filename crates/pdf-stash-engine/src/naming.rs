//! Naming rule for files copied into a storage namespace.
//!
//! A requested name is kept when the namespace has no entry with that name.
//! Otherwise the file is stored as `<unix millis>.<extension>`. The derived
//! name is not checked a second time, so two imports of the same name inside
//! one millisecond can still land on the same file. Calling the resolver twice
//! for the same colliding name generally gives two different answers.

/// Resolve the stored name for `requested` using the current wall clock.
pub fn resolve_import_name<F>(requested: &str, exists_at: F) -> String
where
    F: Fn(&str) -> bool,
{
    resolve_import_name_at(requested, exists_at, chrono::Utc::now().timestamp_millis())
}

/// Resolve the stored name for `requested` with an explicit clock reading.
pub fn resolve_import_name_at<F>(requested: &str, exists_at: F, now_millis: i64) -> String
where
    F: Fn(&str) -> bool,
{
    if !exists_at(requested) {
        return requested.to_string();
    }

    let renamed = format!("{now_millis}.{}", extension_of(requested));
    log::debug!("'{requested}' already exists, storing as '{renamed}'");
    renamed
}

/// Text after the last `.` of a file name, or `""` when there is no dot.
pub fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use rstest::rstest;

    #[rstest]
    #[case("report.pdf")]
    #[case("notes")]
    #[case("archive.tar.gz")]
    #[case(".hidden")]
    fn test_free_name_is_kept(#[case] requested: &str) {
        let resolved = resolve_import_name(requested, |_| false);
        assert_eq!(resolved, requested);
    }

    #[rstest]
    #[case("report.pdf", "1700000000123.pdf")]
    #[case("notes", "1700000000123.")]
    #[case("archive.tar.gz", "1700000000123.gz")]
    #[case(".hidden", "1700000000123.hidden")]
    #[case("trailing.", "1700000000123.")]
    fn test_colliding_name_uses_timestamp_and_extension(
        #[case] requested: &str,
        #[case] expected: &str,
    ) {
        let resolved = resolve_import_name_at(requested, |_| true, 1_700_000_000_123);
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_colliding_pdf_matches_timestamp_pattern() {
        let pattern = Regex::new(r"^\d+\.pdf$").unwrap();
        let resolved = resolve_import_name("report.pdf", |name| name == "report.pdf");
        assert!(pattern.is_match(&resolved), "unexpected name {resolved}");
    }

    #[test]
    fn test_colliding_name_without_extension_has_empty_extension() {
        let pattern = Regex::new(r"^\d+\.$").unwrap();
        let resolved = resolve_import_name("notes", |_| true);
        assert!(pattern.is_match(&resolved), "unexpected name {resolved}");
    }

    #[test]
    fn test_exists_check_only_sees_requested_name() {
        let seen = std::cell::RefCell::new(Vec::new());
        resolve_import_name_at(
            "report.pdf",
            |name| {
                seen.borrow_mut().push(name.to_string());
                true
            },
            42,
        );
        assert_eq!(seen.into_inner(), vec!["report.pdf".to_string()]);
    }

    #[test]
    fn test_different_clock_readings_give_different_names() {
        let first = resolve_import_name_at("report.pdf", |_| true, 1);
        let second = resolve_import_name_at("report.pdf", |_| true, 2);
        assert_ne!(first, second);
    }

    #[rstest]
    #[case("report.pdf", "pdf")]
    #[case("REPORT.PDF", "PDF")]
    #[case("a.b.c", "c")]
    #[case("notes", "")]
    fn test_extension_of(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(extension_of(name), expected);
    }
}
