//! Asset types and their include tags
//!
//! yuicat only recognizes two fixed, single-line tag shapes:
//!
//! ```text
//! <script type="text/javascript" src="/js/app.js"></script>
//! <link rel="stylesheet" href="/stylesheets/site.css">
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::bytes::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{YuicatError, config};

static SCRIPT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script type="text/javascript" src="(/[^"]+\.js)"></script>"#)
        .expect("script tag pattern is valid")
});

static STYLESHEET_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<link rel="stylesheet" href="(/[^"]+\.css)">"#)
        .expect("stylesheet tag pattern is valid")
});

static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^\s*<!--.*-->\s*$").expect("comment pattern is valid")
});

/// Kind of asset that can be bundled
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Css,
    Js,
}

impl AssetType {
    pub const ALL: [AssetType; 2] = [AssetType::Css, AssetType::Js];

    /// File extension, also the `--type` value passed to the minifier
    pub fn extension(self) -> &'static str {
        match self {
            AssetType::Css => "css",
            AssetType::Js => "js",
        }
    }

    /// Render the include tag for a logical path
    pub fn include_tag(self, logical_path: &str) -> String {
        match self {
            AssetType::Css => format!(r#"<link rel="stylesheet" href="{logical_path}">"#),
            AssetType::Js => {
                format!(r#"<script type="text/javascript" src="{logical_path}"></script>"#)
            }
        }
    }

    /// Extract the logical path of an include tag found anywhere in `line`
    ///
    /// The rest of the line may be in any encoding; only the path itself has
    /// to be UTF-8.
    pub fn match_include(self, line: &[u8]) -> Option<&str> {
        let pattern = match self {
            AssetType::Css => &*STYLESHEET_TAG,
            AssetType::Js => &*SCRIPT_TAG,
        };
        pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| std::str::from_utf8(m.as_bytes()).ok())
    }

    /// Whether includes of this type must form one contiguous block
    pub fn requires_contiguous_includes(self) -> bool {
        matches!(self, AssetType::Js)
    }

    /// Parse a comma separated list such as `css,js`
    ///
    /// A type listed twice is rejected, since its second pass would find the
    /// bundles of the first.
    pub fn parse_list(list: &str) -> crate::error::Result<Vec<AssetType>> {
        let mut types: Vec<AssetType> = Vec::new();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let asset_type: AssetType = name.parse()?;
            if types.contains(&asset_type) {
                return Err(config::invalid(format!(
                    "type '{asset_type}' requested more than once"
                )));
            }
            types.push(asset_type);
        }
        Ok(types)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for AssetType {
    type Err = YuicatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "css" => Ok(AssetType::Css),
            "js" => Ok(AssetType::Js),
            other => Err(config::invalid_asset_type(other)),
        }
    }
}

/// Whether a line only holds an HTML comment
pub fn is_comment_line(line: &[u8]) -> bool {
    HTML_COMMENT.is_match(line.trim_ascii_end())
}

/// Whether a line is empty or ASCII whitespace only
///
/// Indented empty lines and CRLF line endings count as blank, so they never
/// break a block of script includes.
pub fn is_blank_line(line: &[u8]) -> bool {
    line.trim_ascii().is_empty()
}
