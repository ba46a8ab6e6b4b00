//! Torrent to media item matching.
//!
//! Rules are tried strongest first and the first rule with a hit wins:
//! 1. exact path equality
//! 2. the item's path is a parent of the torrent content path
//! 3. the torrent content path is a parent of the item's path
//! 4. substring containment either way, shortest item path first
//! 5. every title token appears in the torrent name, longest title first

use std::collections::HashSet;

use crate::model::db::MediaItemModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    ExactPath,
    ItemPathIsParent,
    ContentPathIsParent,
    Substring,
    TitleTokens,
}

struct Candidate {
    id: i32,
    path: Option<String>,
    title_tokens: Vec<String>,
}

/// Matcher over a snapshot of the media items taken at the start of a sync pass.
pub struct MediaMatcher {
    candidates: Vec<Candidate>,
}

impl MediaMatcher {
    pub fn new(items: &[MediaItemModel]) -> Self {
        let candidates = items
            .iter()
            .map(|item| Candidate {
                id: item.id,
                path: item
                    .file_path
                    .as_deref()
                    .map(normalize_path)
                    .filter(|p| !p.is_empty()),
                title_tokens: tokens(&item.title),
            })
            .collect();

        Self { candidates }
    }

    /// Resolves the media item a torrent belongs to.
    ///
    /// # Arguments
    /// - `content_path` - Torrent content path as reported by the client
    /// - `torrent_name` - Torrent name, used only by the token rule
    ///
    /// # Returns
    /// - `Some((media_item_id, rule))` - First rule that produced a hit
    /// - `None` - No rule matched
    pub fn resolve(&self, content_path: &str, torrent_name: &str) -> Option<(i32, MatchRule)> {
        let content = normalize_path(content_path);

        if !content.is_empty() {
            if let Some(id) = self.by_path(&content) {
                return Some(id);
            }
        }

        self.by_title_tokens(torrent_name)
            .map(|id| (id, MatchRule::TitleTokens))
    }

    fn with_paths(&self) -> impl Iterator<Item = (&Candidate, &str)> {
        self.candidates
            .iter()
            .filter_map(|c| c.path.as_deref().map(|p| (c, p)))
    }

    fn by_path(&self, content: &str) -> Option<(i32, MatchRule)> {
        if let Some((c, _)) = self.with_paths().find(|(_, path)| *path == content) {
            return Some((c.id, MatchRule::ExactPath));
        }

        // Most specific parent wins.
        if let Some((c, _)) = self
            .with_paths()
            .filter(|(_, path)| is_parent(path, content))
            .max_by_key(|(_, path)| path.len())
        {
            return Some((c.id, MatchRule::ItemPathIsParent));
        }

        if let Some((c, _)) = self
            .with_paths()
            .filter(|(_, path)| is_parent(content, path))
            .min_by_key(|(_, path)| path.len())
        {
            return Some((c.id, MatchRule::ContentPathIsParent));
        }

        self.with_paths()
            .filter(|(_, path)| content.contains(path) || path.contains(content))
            .min_by_key(|(_, path)| path.len())
            .map(|(c, _)| (c.id, MatchRule::Substring))
    }

    fn by_title_tokens(&self, torrent_name: &str) -> Option<i32> {
        let name_tokens: HashSet<String> = tokens(torrent_name).into_iter().collect();
        if name_tokens.is_empty() {
            return None;
        }

        self.candidates
            .iter()
            .filter(|c| !c.title_tokens.is_empty())
            .filter(|c| c.title_tokens.iter().all(|t| name_tokens.contains(t)))
            .max_by_key(|c| c.title_tokens.len())
            .map(|c| c.id)
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let stripped = trimmed.trim_end_matches('/');
    if stripped.is_empty() && trimmed.starts_with('/') {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Whether `parent` is a directory ancestor of `child`.
fn is_parent(parent: &str, child: &str) -> bool {
    child.len() > parent.len()
        && child.starts_with(parent)
        && (parent.ends_with('/') || child.as_bytes()[parent.len()] == b'/')
}

/// Lowercase alphanumeric runs.
fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}
