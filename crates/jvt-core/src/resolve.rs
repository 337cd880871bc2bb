use serde_json::Value;

use crate::path::{CanonicalPath, PathExpression, Segment};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchedNode<'a> {
    pub path: CanonicalPath,
    pub value: &'a Value,
}

/// Every node whose root path ends with `chain`, in pre-order (keys in
/// insertion order, elements in index order). Matches do not stop the walk.
pub fn resolve<'a>(document: &'a Value, chain: &PathExpression) -> Vec<MatchedNode<'a>> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    walk(document, chain, &mut stack, &mut out);
    out
}

fn walk<'a>(
    node: &'a Value,
    chain: &PathExpression,
    stack: &mut Vec<Segment>,
    out: &mut Vec<MatchedNode<'a>>,
) {
    if !stack.is_empty() && chain.is_suffix_of(stack) {
        out.push(MatchedNode {
            path: CanonicalPath::from(stack.clone()),
            value: node,
        });
    }
    match node {
        Value::Object(map) => {
            for (k, v) in map {
                stack.push(Segment::Key(k.clone()));
                walk(v, chain, stack, out);
                stack.pop();
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                stack.push(Segment::Index(i));
                walk(v, chain, stack, out);
                stack.pop();
            }
        }
        _ => {}
    }
}
