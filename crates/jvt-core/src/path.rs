// Key chains and canonical document paths.
// - `PathExpression`: dot-separated key chain (`en.prompt`), matched as a suffix at any depth.
// - `CanonicalPath`: full root-to-node path of keys and array indices.
//   Renders as `items[0].name`, converts to a JSON Pointer (`/items/0/name`).
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(k) => Some(k),
            Segment::Index(_) => None,
        }
    }
}

/// Why a raw key path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSyntaxError {
    Empty,
    EmptySegment,
}

/// Non-empty ordered chain of object keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathExpression {
    keys: Vec<String>,
}

impl PathExpression {
    pub fn parse(raw: &str) -> Result<Self, PathSyntaxError> {
        if raw.is_empty() {
            return Err(PathSyntaxError::Empty);
        }
        let keys: Vec<String> = raw.split('.').map(str::to_string).collect();
        if keys.iter().any(String::is_empty) {
            return Err(PathSyntaxError::EmptySegment);
        }
        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// True when `path` ends with this chain. Index segments never match a key.
    pub fn is_suffix_of(&self, path: &[Segment]) -> bool {
        if path.len() < self.keys.len() {
            return false;
        }
        let tail = &path[path.len() - self.keys.len()..];
        tail.iter()
            .zip(&self.keys)
            .all(|(seg, key)| seg.as_key() == Some(key.as_str()))
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keys.join("."))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CanonicalPath(Vec<Segment>);

impl CanonicalPath {
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Splits into the parent's segments and the final segment. `None` at the root.
    pub fn split_last(&self) -> Option<(&Segment, &[Segment])> {
        self.0.split_last()
    }

    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for seg in &self.0 {
            out.push('/');
            match seg {
                Segment::Key(k) => out.push_str(&escape_token(k)),
                Segment::Index(i) => out.push_str(&i.to_string()),
            }
        }
        out
    }
}

impl From<Vec<Segment>> for CanonicalPath {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        for (i, seg) in self.0.iter().enumerate() {
            match seg {
                Segment::Key(k) if i == 0 => write!(f, "{}", k)?,
                Segment::Key(k) => write!(f, ".{}", k)?,
                Segment::Index(n) => write!(f, "[{}]", n)?,
            }
        }
        Ok(())
    }
}

// RFC 6901: `~` before `/`
fn escape_token(tok: &str) -> String {
    tok.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> Segment {
        Segment::Key(k.to_string())
    }

    #[test]
    fn parse_rejects_empty_and_blank_segments() {
        assert_eq!(PathExpression::parse(""), Err(PathSyntaxError::Empty));
        assert_eq!(PathExpression::parse("a..b"), Err(PathSyntaxError::EmptySegment));
        assert_eq!(PathExpression::parse(".a"), Err(PathSyntaxError::EmptySegment));
        assert_eq!(PathExpression::parse("en.prompt").unwrap().keys(), ["en", "prompt"]);
    }

    #[test]
    fn suffix_match_ignores_index_segments() {
        let chain = PathExpression::parse("a.b").unwrap();
        assert!(chain.is_suffix_of(&[key("x"), key("a"), key("b")]));
        assert!(!chain.is_suffix_of(&[key("b")]));
        assert!(!chain.is_suffix_of(&[key("a"), Segment::Index(0), key("b")]));

        let numeric = PathExpression::parse("items.0").unwrap();
        assert!(!numeric.is_suffix_of(&[key("items"), Segment::Index(0)]));
        assert!(numeric.is_suffix_of(&[key("items"), key("0")]));
    }

    #[test]
    fn canonical_path_renders_and_points() {
        let p = CanonicalPath::from(vec![key("items"), Segment::Index(2), key("a/b~c")]);
        assert_eq!(p.to_string(), "items[2].a/b~c");
        assert_eq!(p.to_pointer(), "/items/2/a~1b~0c");
        assert_eq!(CanonicalPath::default().to_string(), "$");
        assert_eq!(CanonicalPath::default().to_pointer(), "");
    }
}
