//! Property-Based Tests for the Einstein Coder tools
//!
//! Uses proptest for testing invariants and edge cases:
//! - Report framing holds for arbitrary manifests
//! - Entry indices are contiguous, 1-based, and zero-padded
//! - Status token string round-trips

use std::path::Path;

use proptest::prelude::*;

use einstein_coder::manifest::ProjectManifest;
use einstein_coder::report::{FileStatus, InventoryReport, FOOTER_LINES, HEADER_LINES};

/// Strategy for generating valid FileStatus variants
fn status_strategy() -> impl Strategy<Value = FileStatus> {
    prop_oneof![Just(FileStatus::Exists), Just(FileStatus::Missing)]
}

/// Strategy for plausible relative manifest entries (one or two components)
fn entry_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z_]{0,11}\\.py",
        "[a-z][a-z_]{0,11}/[a-z][a-z_]{0,11}\\.py",
    ]
}

fn manifest_strategy() -> impl Strategy<Value = ProjectManifest> {
    prop::collection::vec(entry_strategy(), 0..32).prop_map(ProjectManifest::from_entries)
}

// Checks run against a root that does not exist, so every entry is MISSING!
// and no test touches the real filesystem.
const ABSENT_ROOT: &str = "/nonexistent/einstein-coder-proptest-root";

proptest! {
    /// Status token: to_string → parse round-trip is identity
    #[test]
    fn status_roundtrip(status in status_strategy()) {
        let s = status.to_string();
        let parsed: FileStatus = s.parse().expect("Should parse");
        prop_assert_eq!(status, parsed);
    }

    /// Report line count is exactly header + entries + footer
    #[test]
    fn report_line_count_invariant(manifest in manifest_strategy()) {
        let report = InventoryReport::generate_at(
            Path::new(ABSENT_ROOT),
            &manifest,
            "2025-07-13 10:15:00".to_string(),
        );
        prop_assert_eq!(
            report.lines().len(),
            HEADER_LINES + manifest.len() + FOOTER_LINES
        );
    }

    /// Entry indices are contiguous, 1-based, and at least two digits wide
    #[test]
    fn report_indices_contiguous_and_padded(manifest in manifest_strategy()) {
        let report = InventoryReport::generate_at(
            Path::new(ABSENT_ROOT),
            &manifest,
            "2025-07-13 10:15:00".to_string(),
        );
        for (i, entry) in report.entries().iter().enumerate() {
            prop_assert_eq!(entry.index, i + 1);

            let line = entry.format_line();
            let (prefix, _) = line.split_once(". ").expect("numbered line");
            prop_assert!(prefix.len() >= 2);
            prop_assert_eq!(prefix.parse::<usize>().expect("numeric index"), i + 1);
        }
    }

    /// Every entry line ends in exactly one of the two status tokens
    #[test]
    fn report_entry_lines_have_binary_status(manifest in manifest_strategy()) {
        let report = InventoryReport::generate_at(
            Path::new(ABSENT_ROOT),
            &manifest,
            "2025-07-13 10:15:00".to_string(),
        );
        for entry in report.entries() {
            let line = entry.format_line();
            prop_assert!(
                line.ends_with(" (Exists)") || line.ends_with(" (MISSING!)"),
                "unexpected status suffix: {}", line
            );
        }
    }

    /// Rendering is stable for a fixed timestamp and manifest
    #[test]
    fn report_render_is_deterministic(manifest in manifest_strategy()) {
        let root = Path::new(ABSENT_ROOT);
        let a = InventoryReport::generate_at(root, &manifest, "2025-07-13 10:15:00".to_string());
        let b = InventoryReport::generate_at(root, &manifest, "2025-07-13 10:15:00".to_string());
        prop_assert_eq!(a.render(), b.render());
    }
}
