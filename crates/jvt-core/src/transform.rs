use crate::error::{Result, TransformError};
use crate::mapping::apply;
use crate::preprocess::{PreprocessOpts, preprocess};
use crate::rules::MappingRule;

#[derive(Clone, Copy, Debug, Default)]
pub struct TransformOpts {
    pub preprocess: PreprocessOpts,
}

/// Parses `raw`, applies `rules`, and pretty-prints the result with 2-space
/// indentation. On failure nothing is rendered.
pub fn transform(raw: &str, rules: &[MappingRule]) -> Result<String> {
    transform_with(raw, rules, &TransformOpts::default())
}

pub fn transform_with(raw: &str, rules: &[MappingRule], opts: &TransformOpts) -> Result<String> {
    if raw.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    let mut doc = preprocess(raw, &opts.preprocess)?;
    apply(&mut doc, rules)?;
    serde_json::to_string_pretty(&doc).map_err(|e| TransformError::Serialize(e.to_string()))
}
