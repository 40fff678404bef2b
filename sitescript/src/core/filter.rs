//! Recursive, policy-driven action filtering.

use crate::core::policy::{PolicySet, VerbCategory};
use crate::script::Action;

/// Filter `actions` under `policy`, returning fresh copies in input order.
///
/// - Actions whose category the policy disallows are dropped.
/// - Unrecognized verbs are always kept.
/// - Container actions are always kept; their `subactions`, when present, are
///   filtered with the same policy. An absent `subactions` stays absent.
pub fn filter_actions(actions: &[Action], policy: &PolicySet) -> Vec<Action> {
    actions
        .iter()
        .filter_map(|action| filter_action(action, policy))
        .collect()
}

fn filter_action(action: &Action, policy: &PolicySet) -> Option<Action> {
    let category = VerbCategory::of(&action.verb);
    if !policy.allows(category) {
        return None;
    }
    if category != VerbCategory::Container {
        return Some(action.clone());
    }
    let subactions = action
        .subactions
        .as_deref()
        .map(|nested| filter_actions(nested, policy));
    Some(Action {
        verb: action.verb.clone(),
        subactions,
        parameters: action.parameters.clone(),
    })
}
