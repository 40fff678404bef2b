//! Inclusion policy and the verb classification table.

use serde::{Deserialize, Serialize};

/// Independent inclusion toggles for action categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySet {
    pub include_views: bool,
    pub include_content_types: bool,
    pub include_nav_link: bool,
    pub include_description: bool,
}

impl Default for PolicySet {
    fn default() -> Self {
        Self {
            include_views: true,
            include_content_types: true,
            include_nav_link: true,
            include_description: true,
        }
    }
}

impl PolicySet {
    /// Whether actions of `category` survive filtering under this policy.
    pub fn allows(&self, category: VerbCategory) -> bool {
        match category {
            VerbCategory::NavLink => self.include_nav_link,
            VerbCategory::ContentType => self.include_content_types,
            VerbCategory::Description => self.include_description,
            VerbCategory::View => self.include_views,
            VerbCategory::Container | VerbCategory::Unrecognized => true,
        }
    }
}

/// Category of a verb for filtering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbCategory {
    NavLink,
    /// Holds nested `subactions`; always kept, children filtered recursively.
    Container,
    ContentType,
    Description,
    View,
    Unrecognized,
}

/// Lowercased verb → category. Verbs not listed are `Unrecognized`.
pub(crate) const VERB_TABLE: &[(&str, VerbCategory)] = &[
    ("addnavlink", VerbCategory::NavLink),
    ("createsplist", VerbCategory::Container),
    ("addcontenttype", VerbCategory::ContentType),
    ("removecontenttype", VerbCategory::ContentType),
    ("createsitecolumnxml", VerbCategory::ContentType),
    ("createcontenttype", VerbCategory::ContentType),
    ("addsitecolumn", VerbCategory::ContentType),
    ("setdescription", VerbCategory::Description),
    ("addspview", VerbCategory::View),
    ("removespview", VerbCategory::View),
];

impl VerbCategory {
    /// Classify `verb` case-insensitively.
    pub fn of(verb: &str) -> Self {
        let normalized = verb.to_lowercase();
        VERB_TABLE
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|(_, category)| *category)
            .unwrap_or(VerbCategory::Unrecognized)
    }
}
