use crate::version::VersionTriple;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// First occurrence of a quoted `digits.digits.digits` literal, with the
/// opening and closing quote identical. Leading zeros and long digit runs
/// are accepted; no semantic validation happens here.
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(['"])(\d+\.\d+\.\d+)\1"#).expect("version pattern is valid"));

/// A quoted version literal found in file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedVersion {
    pub triple: VersionTriple,
    pub quote: char,
    /// Exact matched substring including quotes, e.g. `"1.2.3"`.
    pub raw_literal: String,
}

/// The discovered version state of one configured file. Immutable once
/// created; a recomputed version produces a new literal via [`VersionRecord::requote`]
/// rather than mutating the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub path: PathBuf,
    pub triple: VersionTriple,
    pub quote: char,
    pub raw_literal: String,
}

impl VersionRecord {
    pub fn new(path: PathBuf, located: LocatedVersion) -> Self {
        VersionRecord {
            path,
            triple: located.triple,
            quote: located.quote,
            raw_literal: located.raw_literal,
        }
    }

    /// Serialize a triple in this record's own quote style.
    pub fn requote(&self, triple: VersionTriple) -> String {
        format!("{q}{triple}{q}", q = self.quote)
    }
}

/// Find the first quoted version literal in `content`, scanning from the
/// start. Returns `None` when no literal matches.
pub fn locate(content: &str) -> Option<LocatedVersion> {
    let captures = VERSION_PATTERN.captures(content)?;
    let raw = captures.get(0)?.as_str();
    let quote = captures.get(1)?.as_str().chars().next()?;
    let triple = parse_triple(captures.get(2)?.as_str())?;
    Some(LocatedVersion {
        triple,
        quote,
        raw_literal: raw.to_string(),
    })
}

/// Validate a bare `digits.digits.digits` string by wrapping it in a
/// synthetic single-quote pair and running the same matching rule used for
/// file content. The match must span the whole wrapped string, so embedded
/// quotes or extra segments are rejected.
pub fn validate_bare(value: &str) -> Option<VersionTriple> {
    let wrapped = format!("'{value}'");
    let captures = VERSION_PATTERN.captures(&wrapped)?;
    let whole = captures.get(0)?;
    if whole.start() != 0 || whole.end() != wrapped.len() {
        return None;
    }
    parse_triple(captures.get(2)?.as_str())
}

fn parse_triple(digits: &str) -> Option<VersionTriple> {
    let mut parts = digits.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    Some(VersionTriple::new(major, minor, patch))
}
