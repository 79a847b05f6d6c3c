//! Federation patterns: which atom kinds may nest under which parent kind.
//!
//! ```text
//! glo/ [ org?/** | res?/** ]
//! org/ [ pro?/** | res?/** ]
//! pro/ [ res?/** ]
//! ```

use crate::model::atom::AtomKind;

const GLOBAL_CHILDREN: &[AtomKind] = &[AtomKind::Organization, AtomKind::Resource];
const ORGANIZATION_CHILDREN: &[AtomKind] = &[AtomKind::Project, AtomKind::Resource];
const PROJECT_CHILDREN: &[AtomKind] = &[AtomKind::Resource];

/// Child kinds a parent may hold, in path-resolution lookup order.
pub fn allowed_children(parent_kind: AtomKind) -> &'static [AtomKind] {
    match parent_kind {
        AtomKind::Global => GLOBAL_CHILDREN,
        AtomKind::Organization => ORGANIZATION_CHILDREN,
        AtomKind::Project => PROJECT_CHILDREN,
        AtomKind::Resource => &[],
    }
}

/// Returns whether `parent_kind` may directly contain `child_kind`.
pub fn may_contain(parent_kind: AtomKind, child_kind: AtomKind) -> bool {
    allowed_children(parent_kind).contains(&child_kind)
}

/// Textual federation pattern for one level.
pub fn federation_pattern(kind: AtomKind) -> &'static str {
    match kind {
        AtomKind::Global => "glo/ [ org?/** | res?/** ]",
        AtomKind::Organization => "org/ [ pro?/** | res?/** ]",
        AtomKind::Project => "pro/ [ res?/** ]",
        AtomKind::Resource => "res",
    }
}

#[cfg(test)]
mod tests {
    use super::{allowed_children, may_contain};
    use crate::model::atom::AtomKind;

    const ALL_KINDS: [AtomKind; 4] = [
        AtomKind::Global,
        AtomKind::Organization,
        AtomKind::Project,
        AtomKind::Resource,
    ];

    #[test]
    fn table_matches_federation_patterns() {
        let allowed = [
            (AtomKind::Global, AtomKind::Organization),
            (AtomKind::Global, AtomKind::Resource),
            (AtomKind::Organization, AtomKind::Project),
            (AtomKind::Organization, AtomKind::Resource),
            (AtomKind::Project, AtomKind::Resource),
        ];
        for parent in ALL_KINDS {
            for child in ALL_KINDS {
                assert_eq!(
                    may_contain(parent, child),
                    allowed.contains(&(parent, child)),
                    "{parent} -> {child}"
                );
            }
        }
    }

    #[test]
    fn nothing_nests_under_resource_or_above_global() {
        assert!(allowed_children(AtomKind::Resource).is_empty());
        for parent in ALL_KINDS {
            assert!(!may_contain(parent, AtomKind::Global));
        }
    }
}
