//! jvt-core: copy values between key paths inside a JSON document
//!
//! Rules name an input and an output key chain (`en.prompt`). A chain
//! matches every node whose path ends with it, at any depth; matches are
//! paired in traversal order and input values are copied over outputs.
//! - `resolve`: find matches for a chain (read-only)
//! - `apply`: run a rule list over a document (the only mutator)
//! - `transform`: raw text in, pretty JSON out
//! - `PRESET_RULES`: built-in `en.prompt` → other languages table
//!
pub mod error;
pub mod mapping;
pub mod path;
pub mod preprocess;
pub mod resolve;
pub mod rules;
pub mod transform;

pub use error::{Result, Side, TransformError};
pub use mapping::{apply, write_at};
pub use path::{CanonicalPath, PathExpression, PathSyntaxError, Segment};
pub use preprocess::{PreprocessOpts, preprocess};
pub use resolve::{MatchedNode, resolve};
pub use rules::{MappingRule, MappingSet, PRESET_INPUT_KEY, PRESET_RULES};
pub use transform::{TransformOpts, transform, transform_with};
