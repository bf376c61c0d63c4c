use super::fuzzy::{fuzzy_match, strict_match};
use crate::query::ParsedQuery;
use crate::window::{WindowId, WindowRecord};
use tracing::debug;

/// How query terms are compared with window search keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Joined terms as an in-order subsequence
    Fuzzy,
    /// Every term as a literal substring, any order
    Strict,
}

/// A scored window, lower score is better
#[derive(Debug, Clone, Copy)]
pub struct RankedWindow<'a, H> {
    pub record: &'a WindowRecord<H>,
    pub score: usize,
}

/// Rank window records for a parsed query.
///
/// Non-matching windows are dropped. The rest go through three stable sorts,
/// each applied on top of the previous order:
/// 1. ascending score,
/// 2. windows on `active_workspace` first,
/// 3. exact hits (score 0) first, unless the query was only the prefix.
#[must_use]
pub fn rank<'a, H>(
    query: &ParsedQuery,
    records: &'a [WindowRecord<H>],
    active_workspace: u32,
    mode: MatchMode,
) -> Vec<RankedWindow<'a, H>> {
    let joined = query.joined();

    let mut results: Vec<RankedWindow<'a, H>> = records
        .iter()
        .filter_map(|record| {
            let score = match mode {
                MatchMode::Fuzzy => fuzzy_match(&joined, &record.search_key),
                MatchMode::Strict => strict_match(&query.terms, &record.search_key),
            }?;
            Some(RankedWindow { record, score })
        })
        .collect();

    debug!(
        "Window search '{}' matched {} of {} windows",
        joined,
        results.len(),
        records.len()
    );

    results.sort_by_key(|r| r.score);
    results.sort_by_key(|r| r.record.workspace_index != active_workspace);
    if !query.is_sentinel() {
        results.sort_by_key(|r| r.score > 0);
    }

    results
}

/// Rank and keep only the ids, in result order.
#[must_use]
pub fn rank_ids<H>(
    query: &ParsedQuery,
    records: &[WindowRecord<H>],
    active_workspace: u32,
    mode: MatchMode,
) -> Vec<WindowId> {
    rank(query, records, active_workspace, mode)
        .into_iter()
        .map(|r| r.record.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::WindowInfo;
    use crate::query::WindowCommand;

    fn record(pos: usize, title: &str, app: &str, ws: u32) -> WindowRecord<()> {
        WindowRecord::from_info(
            pos,
            WindowInfo {
                stable_id: pos as u64,
                title: title.to_string(),
                app_name: Some(app.to_string()),
                app_icon: None,
                workspace_index: ws,
                handle: (),
            },
        )
    }

    fn query(terms: &[&str]) -> ParsedQuery {
        ParsedQuery {
            terms: terms.iter().map(|t| (*t).to_string()).collect(),
            command: WindowCommand::None,
        }
    }

    fn titles<H>(ranked: &[RankedWindow<'_, H>]) -> Vec<String> {
        ranked.iter().map(|r| r.record.title.clone()).collect()
    }

    #[test]
    fn test_non_matches_dropped() {
        let records = vec![
            record(0, "Firefox", "Firefox", 0),
            record(1, "Terminal", "Terminal", 1),
        ];
        let ranked = rank(&query(&["ffx"]), &records, 0, MatchMode::Fuzzy);
        assert_eq!(titles(&ranked), vec!["Firefox"]);
    }

    #[test]
    fn test_empty_records() {
        let records: Vec<WindowRecord<()>> = Vec::new();
        assert!(rank(&query(&["a"]), &records, 0, MatchMode::Fuzzy).is_empty());
    }

    #[test]
    fn test_active_workspace_breaks_ties() {
        let records = vec![
            record(0, "Notes one", "Editor", 1),
            record(1, "Notes two", "Editor", 0),
        ];
        let ranked = rank(&query(&["notes"]), &records, 0, MatchMode::Fuzzy);
        assert_eq!(titles(&ranked), vec!["Notes two", "Notes one"]);
    }

    #[test]
    fn test_exact_block_before_active_workspace() {
        // "mail" is a substring of the first window only; the second is a
        // fuzzy hit on the active workspace.
        let records = vec![
            record(0, "Mail", "Geary", 2),
            record(1, "Maps and Illustrations", "Viewer", 0),
        ];
        let ranked = rank(&query(&["mail"]), &records, 0, MatchMode::Fuzzy);
        assert_eq!(ranked[0].record.title, "Mail");
        assert_eq!(ranked[0].score, 0);
        assert!(ranked[1].score > 0);
    }

    #[test]
    fn test_sentinel_skips_exact_block() {
        let records = vec![
            record(0, "Alpha", "A", 1),
            record(1, "Beta", "B", 0),
        ];
        let sentinel = query(&[" "]);
        let ranked = rank(&sentinel, &records, 0, MatchMode::Fuzzy);
        // Every key contains a space, so everything scores 0 and only the
        // workspace pass decides.
        assert_eq!(titles(&ranked), vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_fuzzy_hits_ordered_by_score_within_workspace() {
        let records = vec![
            record(0, "xxxxxxxx f x x", "A", 0),
            record(1, "fx", "B", 0),
        ];
        // "fx" is an exact hit in the second; the first is a loose subsequence
        let ranked = rank(&query(&["fx"]), &records, 0, MatchMode::Fuzzy);
        assert_eq!(titles(&ranked), vec!["fx", "xxxxxxxx f x x"]);
    }

    #[test]
    fn test_strict_mode() {
        let records = vec![
            record(0, "Firefox", "Firefox", 0),
            record(1, "Project - Files", "Files", 0),
        ];
        let ranked = rank(&query(&["files", "project"]), &records, 0, MatchMode::Strict);
        assert_eq!(titles(&ranked), vec!["Project - Files"]);
        assert!(rank(&query(&["ffx"]), &records, 0, MatchMode::Strict).is_empty());
    }

    /// Host handle with no equality, like a compositor object reference
    #[derive(Debug)]
    struct OpaqueHandle;

    #[test]
    fn test_rank_with_incomparable_handles() {
        let records = vec![WindowRecord::from_info(
            0,
            WindowInfo {
                stable_id: 5,
                title: "Notes".to_string(),
                app_name: Some("Editor".to_string()),
                app_icon: None,
                workspace_index: 0,
                handle: OpaqueHandle,
            },
        )];

        let ranked = rank(&query(&["notes"]), &records, 0, MatchMode::Fuzzy);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0);
        assert!(std::ptr::eq(ranked[0].record, &records[0]));
    }

    #[test]
    fn test_rank_ids_matches_rank_order() {
        let records = vec![
            record(0, "Notes one", "Editor", 1),
            record(1, "Notes two", "Editor", 0),
        ];
        let ids = rank_ids(&query(&["notes"]), &records, 0, MatchMode::Fuzzy);
        assert_eq!(ids, vec![WindowId::new(1, 1), WindowId::new(0, 0)]);
    }
}
