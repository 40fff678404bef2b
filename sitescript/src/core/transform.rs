//! Whole-document transformation.

use crate::core::filter::filter_actions;
use crate::core::policy::PolicySet;
use crate::script::ScriptContent;

/// Build a new document with `content`'s metadata and its actions filtered
/// under `policy`. `content` is left untouched.
pub fn transform_content(content: &ScriptContent, policy: &PolicySet) -> ScriptContent {
    ScriptContent {
        metadata: content.metadata.clone(),
        actions: filter_actions(&content.actions, policy),
    }
}
