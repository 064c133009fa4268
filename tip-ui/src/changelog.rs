//! Static changelog data and version helpers.

use std::cmp::Ordering;

/// A single change description, optionally with nested detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub text: &'static str,
    pub children: &'static [Change],
}

/// A released version and its changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Version number parts, most significant first.
    pub version: &'static [u32],
    /// Release timestamp, as displayed.
    pub timestamp: &'static str,
    pub changes: &'static [Change],
}

/// All releases, newest first.
pub const CHANGELOG: &[Release] = &[
    Release {
        version: &[1, 3],
        timestamp: "2025-03-14 14:33",
        changes: &[Change {
            text: "Added responsive layout",
            children: &[Change {
                text: "The table stays readable when the window is made smaller.",
                children: &[],
            }],
        }],
    },
    Release {
        version: &[1, 2],
        timestamp: "2025-03-14 14:08",
        changes: &[Change {
            text: "Added a version link in the header",
            children: &[],
        }],
    },
    Release {
        version: &[1, 1],
        timestamp: "2025-03-14 13:36",
        changes: &[Change {
            text: "Fixed the Home breadcrumb",
            children: &[Change {
                text: "It now always returns to the calculator screen.",
                children: &[],
            }],
        }],
    },
    Release {
        version: &[1, 0],
        timestamp: "2025-03-14 13:06",
        changes: &[Change {
            text: "Added working tip calculator",
            children: &[
                Change {
                    text: "Input an amount to get a range of tip values and their \
                           corresponding percentages.",
                    children: &[],
                },
                Change {
                    text: "Additional tips will also be shown which result in a whole \
                           dollar total.",
                    children: &[],
                },
            ],
        }],
    },
    Release {
        version: &[0, 3],
        timestamp: "2025-03-14 00:06",
        changes: &[Change {
            text: "Fixed changelog ordering",
            children: &[Change {
                text: "Releases are now listed newest first.",
                children: &[],
            }],
        }],
    },
    Release {
        version: &[0, 2],
        timestamp: "2025-03-13 23:50",
        changes: &[
            Change {
                text: "Added dynamic changelog",
                children: &[],
            },
            Change {
                text: "Added breadcrumbs",
                children: &[],
            },
        ],
    },
    Release {
        version: &[0, 1],
        timestamp: "2025-03-13 21:57",
        changes: &[Change {
            text: "Initial release",
            children: &[],
        }],
    },
];

/// Returns the newest released version as a display string.
pub fn current_version() -> String {
    let mut newest: &[u32] = &[];
    for release in CHANGELOG {
        if cmp_versions(release.version, newest) == Ordering::Greater {
            newest = release.version;
        }
    }
    format_version(newest)
}

/// Compares two version-part sequences, treating missing parts as zero.
pub fn cmp_versions(
    a: &[u32],
    b: &[u32],
) -> Ordering {
    for i in 0..a.len().max(b.len()) {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Formats version parts as a display string, e.g. `v1.3`.
///
/// An empty part list produces an empty string.
pub fn format_version(version: &[u32]) -> String {
    if version.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = version.iter().map(u32::to_string).collect();
    format!("v{}", parts.join("."))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn current_version_is_the_newest_release() {
        assert_eq!(current_version(), "v1.3");
    }

    #[test]
    fn changelog_is_sorted_newest_first() {
        for pair in CHANGELOG.windows(2) {
            assert_eq!(
                cmp_versions(pair[0].version, pair[1].version),
                Ordering::Greater,
                "{:?} is not newer than {:?}",
                pair[0].version,
                pair[1].version
            );
        }
    }

    #[test]
    fn cmp_versions_pads_missing_parts_with_zero() {
        assert_eq!(cmp_versions(&[1], &[1, 0]), Ordering::Equal);
        assert_eq!(cmp_versions(&[1], &[1, 1]), Ordering::Less);
        assert_eq!(cmp_versions(&[1, 0, 1], &[1]), Ordering::Greater);
    }

    #[test]
    fn cmp_versions_compares_parts_numerically() {
        assert_eq!(cmp_versions(&[1, 2], &[1, 10]), Ordering::Less);
        assert_eq!(cmp_versions(&[2, 0], &[1, 10]), Ordering::Greater);
    }

    #[test]
    fn format_version_joins_parts_with_dots() {
        assert_eq!(format_version(&[1, 3]), "v1.3");
        assert_eq!(format_version(&[0, 1]), "v0.1");
        assert_eq!(format_version(&[2]), "v2");
    }

    #[test]
    fn format_version_is_empty_for_no_parts() {
        assert_eq!(format_version(&[]), "");
    }
}
