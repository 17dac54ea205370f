use crate::PreviewRecord;

/// Derives the visible subset of `collection` for `search_text`.
///
/// Case-insensitive substring match against title, description, domain and
/// every tag. Empty text matches everything. Output keeps input order.
pub fn recompute(collection: &[PreviewRecord], search_text: &str) -> Vec<PreviewRecord> {
    let needle = search_text.to_lowercase();
    collection
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
pub(crate) fn matches(record: &PreviewRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    contains(&record.title, needle)
        || contains(&record.description, needle)
        || contains(&record.domain, needle)
        || record.tags().iter().any(|tag| contains(tag, needle))
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, domain: &str, tags: Option<&[&str]>) -> PreviewRecord {
        PreviewRecord {
            url: format!("https://{domain}/{}", title.replace(' ', "-")),
            title: title.to_string(),
            description: String::new(),
            domain: domain.to_string(),
            img: None,
            favicon: None,
            tags: tags.map(|tags| tags.iter().map(|t| t.to_string()).collect()),
        }
    }

    fn sample() -> Vec<PreviewRecord> {
        vec![
            record("GitHub Repo", "github.com", Some(&["code"])),
            record("YouTube Video", "youtube.com", None),
        ]
    }

    #[test]
    fn tag_match_selects_only_tagged_record() {
        let visible = recompute(&sample(), "code");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "GitHub Repo");
    }

    #[test]
    fn empty_text_keeps_everything_in_order() {
        let collection = sample();
        assert_eq!(recompute(&collection, ""), collection);
    }

    #[test]
    fn matching_ignores_case() {
        let visible = recompute(&sample(), "YOUTUBE");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].domain, "youtube.com");

        let visible = recompute(&sample(), "CoDe");
        assert_eq!(visible[0].title, "GitHub Repo");
    }

    #[test]
    fn description_and_domain_are_searched() {
        let mut collection = sample();
        collection[1].description = "Rust conference talk".to_string();

        let visible = recompute(&collection, "conference");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "YouTube Video");

        let visible = recompute(&collection, ".com");
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn absent_tags_never_match_but_never_fail() {
        let collection = vec![record("Plain", "example.org", None)];
        assert!(recompute(&collection, "code").is_empty());
    }

    #[test]
    fn order_is_preserved_without_ranking() {
        let collection = vec![
            record("b rust", "b.example", None),
            record("a rust rust", "a.example", None),
            record("c", "c.example", Some(&["rust"])),
        ];
        let titles: Vec<_> = recompute(&collection, "rust")
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["b rust", "a rust rust", "c"]);
    }

    #[test]
    fn recompute_is_idempotent() {
        let collection = sample();
        let first = recompute(&collection, "you");
        let second = recompute(&collection, "you");
        assert_eq!(first, second);
        assert_eq!(recompute(&first, "you"), first);
    }
}
