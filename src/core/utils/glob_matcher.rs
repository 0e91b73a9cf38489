use anyhow::{Result, bail};
use glob::{MatchOptions, Pattern};

/// `*` and `?` never match a path separator; `**` spans directories.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A workspace glob such as `**/i18n/*.ts` or `{**/dist/**,**/node_modules/**}`.
///
/// `{a,b}` alternation is expanded up front into one [`Pattern`] per branch;
/// a path matches the set if any branch matches.
#[derive(Debug, Clone)]
pub struct GlobSet {
    source: String,
    patterns: Vec<Pattern>,
    /// Directory prefixes of `dir/**` branches; everything below them matches.
    dir_patterns: Vec<Pattern>,
}

impl GlobSet {
    pub fn new(source: &str) -> Result<Self> {
        let branches = expand_braces(source)?;
        let patterns = branches
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let dir_patterns = branches
            .iter()
            .filter_map(|p| p.strip_suffix("/**"))
            .filter(|dir| !dir.is_empty())
            .map(Pattern::new)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            source: source.to_string(),
            patterns,
            dir_patterns,
        })
    }

    /// An empty source yields a set that matches nothing.
    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Check a workspace-relative path (always `/`-separated).
    pub fn matches(&self, relative_path: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        self.patterns
            .iter()
            .any(|p| p.matches_with(relative_path, MATCH_OPTIONS))
    }

    /// Check whether every path below a workspace-relative directory matches.
    pub fn matches_dir(&self, relative_dir: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        self.dir_patterns
            .iter()
            .any(|p| p.matches_with(relative_dir, MATCH_OPTIONS))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Expand `{a,b}` groups into every combination, left to right.
///
/// Groups may nest (`{a,{b,c}}`). A `{` without a matching `}` is an error.
///
/// Examples:
/// - `{**/dist/**,**/node_modules/**}` expands to `**/dist/**` and `**/node_modules/**`
/// - `src/{app,lib}/*.{ts,js}` expands to four patterns
pub fn expand_braces(pattern: &str) -> Result<Vec<String>> {
    let Some(open) = pattern.find('{') else {
        return Ok(vec![pattern.to_string()]);
    };

    let close = matching_brace(pattern, open)?;
    let prefix = &pattern[..open];
    let body = &pattern[open + 1..close];
    let suffix = &pattern[close + 1..];

    let mut expanded = Vec::new();
    for branch in split_top_level(body) {
        let candidate = format!("{prefix}{branch}{suffix}");
        expanded.extend(expand_braces(&candidate)?);
    }
    Ok(expanded)
}

fn matching_brace(pattern: &str, open: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (idx, ch) in pattern.char_indices().skip_while(|(idx, _)| *idx < open) {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(idx);
                }
            }
            _ => {}
        }
    }
    bail!("unclosed '{{' in glob pattern \"{}\"", pattern)
}

/// Split a brace body on commas that are not inside a nested group.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}
