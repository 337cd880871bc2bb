use serde_json::Value;

use crate::error::{Result, Side, TransformError};
use crate::path::{CanonicalPath, PathExpression, PathSyntaxError, Segment};
use crate::resolve::resolve;
use crate::rules::MappingRule;

/// Applies `rules` in order to `document`. Each rule sees the writes of the
/// rules before it. Stops at the first failing rule; earlier writes stay.
pub fn apply(document: &mut Value, rules: &[MappingRule]) -> Result<()> {
    for rule in rules {
        apply_rule(document, rule)?;
    }
    Ok(())
}

fn apply_rule(document: &mut Value, rule: &MappingRule) -> Result<()> {
    if rule.input_key.is_empty() || rule.output_key.is_empty() {
        return Err(TransformError::EmptyKey { id: rule.id });
    }
    let input = parse_chain(rule, &rule.input_key)?;
    let output = parse_chain(rule, &rule.output_key)?;

    // Sources are copied out before the first write so each output owns its value.
    let (sources, targets) = {
        let inputs = resolve(document, &input);
        if inputs.is_empty() {
            return Err(TransformError::PathNotFound {
                side: Side::Input,
                path: input.to_string(),
            });
        }
        let outputs = resolve(document, &output);
        if outputs.is_empty() {
            return Err(TransformError::PathNotFound {
                side: Side::Output,
                path: output.to_string(),
            });
        }
        if inputs.len() != outputs.len() {
            tracing::debug!(
                rule = rule.id,
                inputs = inputs.len(),
                outputs = outputs.len(),
                "match counts differ; pairing the first {}",
                inputs.len().min(outputs.len())
            );
        }
        let sources: Vec<Value> = inputs
            .iter()
            .take(outputs.len())
            .map(|m| m.value.clone())
            .collect();
        let targets: Vec<CanonicalPath> = outputs.into_iter().map(|m| m.path).collect();
        (sources, targets)
    };

    let mut written = 0usize;
    for (value, target) in sources.into_iter().zip(&targets) {
        // an earlier write of this rule may have replaced an ancestor of `target`
        if write_at(document, target, value).is_none() {
            tracing::debug!(
                rule = rule.id,
                path = %target,
                "output replaced earlier in this rule; skipped"
            );
            continue;
        }
        written += 1;
    }
    tracing::debug!(rule = rule.id, input = %input, output = %output, written, "rule applied");
    Ok(())
}

fn parse_chain(rule: &MappingRule, raw: &str) -> Result<PathExpression> {
    PathExpression::parse(raw).map_err(|e| match e {
        PathSyntaxError::Empty => TransformError::EmptyKey { id: rule.id },
        PathSyntaxError::EmptySegment => TransformError::InvalidPath {
            id: rule.id,
            path: raw.to_string(),
        },
    })
}

/// Sets the node at `path`, walking to its parent container by explicit
/// indexing. `None` when the parent is gone or has the wrong shape.
pub fn write_at(root: &mut Value, path: &CanonicalPath, value: Value) -> Option<()> {
    let (last, parents) = path.split_last()?;
    let mut cur = root;
    for seg in parents {
        cur = child_mut(cur, seg)?;
    }
    match (cur, last) {
        (Value::Object(map), Segment::Key(k)) => {
            map.insert(k.clone(), value);
        }
        (Value::Array(items), Segment::Index(i)) => {
            *items.get_mut(*i)? = value;
        }
        _ => return None,
    }
    Some(())
}

fn child_mut<'a>(node: &'a mut Value, seg: &Segment) -> Option<&'a mut Value> {
    match (node, seg) {
        (Value::Object(map), Segment::Key(k)) => map.get_mut(k),
        (Value::Array(items), Segment::Index(i)) => items.get_mut(*i),
        _ => None,
    }
}
