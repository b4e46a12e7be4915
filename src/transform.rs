use crate::models::{AggregateStats, Repository, SortOrder};
use std::collections::HashMap;

/// Build the ordered, bounded view of a repository list.
///
/// The input is left untouched; the result borrows from it. Sorting is
/// stable, so repositories that compare equal keep their upstream order
/// and the same input always yields the same view.
pub fn ordered_view<'a>(
    repositories: &'a [Repository],
    order: SortOrder,
    cap: usize,
) -> Vec<&'a Repository> {
    let mut view: Vec<&Repository> = repositories.iter().collect();

    match order {
        SortOrder::Default => {}
        SortOrder::Updated => view.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortOrder::Stars => view.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count)),
        SortOrder::Forks => view.sort_by(|a, b| b.forks_count.cmp(&a.forks_count)),
    }

    view.truncate(cap);
    view
}

/// Sum star and fork counts and rank primary languages across the whole
/// repository list. Every number shown on the page comes from here, never
/// from a placeholder.
pub fn aggregate(repositories: &[Repository]) -> AggregateStats {
    let mut total_stars: u64 = 0;
    let mut total_forks: u64 = 0;
    let mut language_counts: HashMap<&str, usize> = HashMap::new();

    for repo in repositories {
        total_stars += u64::from(repo.stargazers_count);
        total_forks += u64::from(repo.forks_count);
        if let Some(language) = repo.language.as_deref() {
            *language_counts.entry(language).or_insert(0) += 1;
        }
    }

    let mut languages: Vec<(String, usize)> = language_counts
        .into_iter()
        .map(|(language, count)| (language.to_string(), count))
        .collect();
    // Rank by frequency, breaking ties alphabetically so the ranking is
    // deterministic across runs.
    languages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    AggregateStats {
        repo_count: repositories.len(),
        total_stars,
        total_forks,
        languages,
    }
}
