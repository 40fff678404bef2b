//! Structural checks relating a filtered action list to its source.

use crate::core::policy::{PolicySet, VerbCategory};
use crate::script::Action;

/// Check that `output` is a valid filtering of `input` under `policy`:
/// - Every output action appears in `input`, in the same relative order.
/// - No output action belongs to a category the policy disallows.
/// - Every input action the policy allows is present in `output`.
/// - Container children satisfy the same rules, recursively.
///
/// Returns a list of error messages; empty means valid.
pub fn check_filtered(input: &[Action], output: &[Action], policy: &PolicySet) -> Vec<String> {
    let mut errors = Vec::new();
    check_level(input, output, policy, "actions", &mut errors);
    errors
}

fn check_level(
    input: &[Action],
    output: &[Action],
    policy: &PolicySet,
    path: &str,
    errors: &mut Vec<String>,
) {
    let mut cursor = 0;
    for (index, kept) in output.iter().enumerate() {
        let here = format!("{}[{}]", path, index);
        let category = VerbCategory::of(&kept.verb);
        if !policy.allows(category) {
            errors.push(format!("{}: '{}' is excluded by policy", here, kept.verb));
        }

        let found = input[cursor..]
            .iter()
            .position(|candidate| same_step(candidate, kept));
        match found {
            Some(offset) => {
                let source = &input[cursor + offset];
                cursor += offset + 1;
                if category == VerbCategory::Container {
                    check_container(source, kept, policy, &here, errors);
                } else if source.subactions != kept.subactions {
                    errors.push(format!("{}: '{}' subactions changed", here, kept.verb));
                }
            }
            None => errors.push(format!(
                "{}: '{}' is out of order or not in input",
                here, kept.verb
            )),
        }
    }

    let expected = input
        .iter()
        .filter(|action| policy.allows(VerbCategory::of(&action.verb)))
        .count();
    if expected != output.len() {
        errors.push(format!(
            "{}: expected {} kept actions, found {}",
            path,
            expected,
            output.len()
        ));
    }
}

fn check_container(
    source: &Action,
    kept: &Action,
    policy: &PolicySet,
    path: &str,
    errors: &mut Vec<String>,
) {
    match (&source.subactions, &kept.subactions) {
        (None, None) => {}
        (Some(input), Some(output)) => {
            let nested = format!("{}.subactions", path);
            check_level(input, output, policy, &nested, errors);
        }
        (None, Some(_)) => errors.push(format!("{}: subactions added", path)),
        (Some(_), None) => errors.push(format!("{}: subactions dropped", path)),
    }
}

/// Same step ignoring nested children: verb and parameters match exactly and
/// both sides agree on whether `subactions` is present.
fn same_step(source: &Action, kept: &Action) -> bool {
    source.verb == kept.verb
        && source.parameters == kept.parameters
        && source.subactions.is_some() == kept.subactions.is_some()
}
