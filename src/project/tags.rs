//! Tag editing.

/// One change to a project's tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEdit {
    /// Replace all tags.
    Set(Vec<String>),
    /// Append tags not already present.
    Add(Vec<String>),
    /// Drop tags equal to any of these.
    Remove(Vec<String>),
    /// Drop every tag.
    Clear,
}

/// Trim, drop blanks and de-duplicate, keeping first occurrences in order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !normalized.iter().any(|t| t == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}

/// Split comma-separated input into normalized tags.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    normalize_tags(input.split(','))
}

/// Apply `edits` in order to `current`.
pub fn apply_edits(current: &[String], edits: &[TagEdit]) -> Vec<String> {
    let mut tags = normalize_tags(current);

    for edit in edits {
        match edit {
            TagEdit::Set(new) => tags = normalize_tags(new),
            TagEdit::Add(new) => tags = normalize_tags(tags.iter().chain(new.iter())),
            TagEdit::Remove(gone) => {
                let gone = normalize_tags(gone);
                tags.retain(|t| !gone.contains(t));
            }
            TagEdit::Clear => tags.clear(),
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalize_trims_and_dedupes() {
        let tags = normalize_tags([" jam ", "2d", "", "jam", "  "]);
        assert_eq!(tags, strings(&["jam", "2d"]));
    }

    #[test]
    fn normalize_is_case_sensitive() {
        assert_eq!(normalize_tags(["Jam", "jam"]), strings(&["Jam", "jam"]));
    }

    #[test]
    fn parse_splits_on_commas() {
        assert_eq!(parse_tag_list("jam, 2d,,prototype"), strings(&["jam", "2d", "prototype"]));
        assert!(parse_tag_list("").is_empty());
    }

    #[test]
    fn add_skips_existing() {
        let tags = apply_edits(&strings(&["jam"]), &[TagEdit::Add(strings(&["2d", "jam"]))]);
        assert_eq!(tags, strings(&["jam", "2d"]));
    }

    #[test]
    fn remove_drops_matches() {
        let tags = apply_edits(
            &strings(&["jam", "2d", "vr"]),
            &[TagEdit::Remove(strings(&[" 2d", "mobile"]))],
        );
        assert_eq!(tags, strings(&["jam", "vr"]));
    }

    #[test]
    fn edits_apply_in_order() {
        let tags = apply_edits(
            &strings(&["old"]),
            &[
                TagEdit::Clear,
                TagEdit::Add(strings(&["a"])),
                TagEdit::Set(strings(&["b", "c"])),
                TagEdit::Remove(strings(&["c"])),
            ],
        );
        assert_eq!(tags, strings(&["b"]));
    }
}
