//! Read-only scan of an HTML document and the edits it produces
//!
//! Scanning never mutates the document. It yields a [`Plan`] listing the
//! include lines, which is then applied in one pass: every include line is
//! dropped except the last, which is replaced by the bundle tag.
//!
//! Documents are handled as raw bytes split on `\n`, so pages in legacy
//! encodings pass through unchanged.

use std::path::{Path, PathBuf};

use crate::domain::AssetType;
use crate::domain::asset::{is_blank_line, is_comment_line};
use crate::error::{Result, patch};
use crate::resolver::LayoutResolver;

/// An include tag found while scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    /// Zero-based line index in the document
    pub line: usize,
    pub physical: PathBuf,
}

/// Split a document into lines, each keeping its `\n`
pub fn lines(content: &[u8]) -> Vec<&[u8]> {
    content.split_inclusive(|&b| b == b'\n').collect()
}

/// What happens to a line when the plan is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Remove,
    ReplaceWithBundle,
}

/// Includes collected from one document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub includes: Vec<Include>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    /// Physical files to bundle, in include order
    pub fn files(&self) -> Vec<PathBuf> {
        self.includes.iter().map(|i| i.physical.clone()).collect()
    }

    /// Line edits sorted by line index
    pub fn edits(&self) -> Vec<(usize, Edit)> {
        let last = self.includes.len().saturating_sub(1);
        self.includes
            .iter()
            .enumerate()
            .map(|(n, include)| {
                let edit = if n == last {
                    Edit::ReplaceWithBundle
                } else {
                    Edit::Remove
                };
                (include.line, edit)
            })
            .collect()
    }

    /// Produce the patched document
    ///
    /// The bundle tag keeps the indentation and line ending of the line it
    /// replaces.
    pub fn apply(&self, lines: &[&[u8]], bundle_tag: &str) -> Vec<u8> {
        let mut edits = self.edits().into_iter().peekable();
        let mut out = Vec::with_capacity(lines.iter().map(|l| l.len()).sum());

        for (index, line) in lines.iter().enumerate() {
            match edits.next_if(|(at, _)| *at == index) {
                Some((_, Edit::Remove)) => {}
                Some((_, Edit::ReplaceWithBundle)) => {
                    out.extend_from_slice(indentation(line));
                    out.extend_from_slice(bundle_tag.as_bytes());
                    out.extend_from_slice(line_ending(line));
                }
                None => out.extend_from_slice(line),
            }
        }
        out
    }
}

/// Scan `lines` for includes of `asset_type`
///
/// `bundle_tag` is the tag this run would insert; finding it means the
/// document was already processed.
pub fn scan(
    lines: &[&[u8]],
    asset_type: AssetType,
    bundle_tag: &str,
    resolver: &LayoutResolver<'_>,
    document: &Path,
) -> Result<Plan> {
    let mut plan = Plan::default();
    // Set once non-include content follows a collected include
    let mut past_non_include = false;

    for (index, line) in lines.iter().enumerate() {
        if line.trim_ascii() == bundle_tag.as_bytes() {
            return Err(patch::already_processed(
                document.display().to_string(),
                asset_type.extension(),
            ));
        }
        if is_blank_line(line) || is_comment_line(line) {
            continue;
        }

        let Some(logical) = asset_type.match_include(line) else {
            past_non_include |= !plan.is_empty();
            continue;
        };

        let physical = resolver.logical_to_physical(logical, asset_type)?;
        if past_non_include && asset_type.requires_contiguous_includes() {
            return Err(patch::script_after_content(
                document.display().to_string(),
                index + 1,
            ));
        }
        if plan.includes.iter().any(|i| i.physical == physical) {
            return Err(patch::duplicate_include(
                document.display().to_string(),
                index + 1,
                physical.display().to_string(),
            ));
        }

        log::debug!(
            "{}:{}: found {asset_type} include {logical}",
            document.display(),
            index + 1
        );
        plan.includes.push(Include {
            line: index,
            physical,
        });
    }

    Ok(plan)
}

fn indentation(line: &[u8]) -> &[u8] {
    let content = line.trim_ascii_start();
    &line[..line.len() - content.len()]
}

fn line_ending(line: &[u8]) -> &[u8] {
    if line.ends_with(b"\r\n") {
        b"\r\n"
    } else if line.ends_with(b"\n") {
        b"\n"
    } else {
        b""
    }
}
