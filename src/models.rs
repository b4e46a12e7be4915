use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account summary returned by `GET /users/{username}`.
///
/// Only the fields the page renders are kept; everything else in the
/// payload is ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub company: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Name to display, falling back to the login handle when the account
    /// has no display name set.
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(&self.login)
    }

    /// Location, with GitHub's empty-string-for-unset normalized away.
    pub fn location(&self) -> Option<&str> {
        non_empty(self.location.as_deref())
    }

    /// Website URL. GitHub reports an empty string when unset.
    pub fn website(&self) -> Option<&str> {
        non_empty(self.blog.as_deref())
    }

    pub fn company(&self) -> Option<&str> {
        non_empty(self.company.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// One repository entry from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
}

/// The unit of published state: one profile and its repository list from
/// a single fetch pass. A snapshot is only ever replaced wholesale, so
/// the page never mixes data from different passes.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub profile: Profile,
    pub repositories: Vec<Repository>,
    pub fetched_at: DateTime<Utc>,
}

/// Ordering applied to the repository list before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Upstream order as returned by the API, treated as opaque
    Default,
    /// Most recently updated first
    Updated,
    /// Highest star count first
    Stars,
    /// Highest fork count first
    Forks,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::Updated => "updated",
            SortOrder::Stars => "stars",
            SortOrder::Forks => "forks",
        }
    }

    /// Human-readable label used in the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Default => "Default",
            SortOrder::Updated => "Recently updated",
            SortOrder::Stars => "Most starred",
            SortOrder::Forks => "Most forked",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page preset. Both presets run the same pipeline and differ only in
/// how many repositories they show and which orderings they offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Six repositories, ordered by default, update time or stars
    Compact,
    /// Nine repositories, adding the fork ordering
    Extended,
}

impl Variant {
    /// Upper bound on repositories shown on the page.
    pub fn display_cap(self) -> usize {
        match self {
            Variant::Compact => 6,
            Variant::Extended => 9,
        }
    }

    /// Orderings this preset offers in its filter bar.
    pub fn sort_orders(self) -> &'static [SortOrder] {
        match self {
            Variant::Compact => &[SortOrder::Default, SortOrder::Updated, SortOrder::Stars],
            Variant::Extended => &[
                SortOrder::Default,
                SortOrder::Updated,
                SortOrder::Stars,
                SortOrder::Forks,
            ],
        }
    }

    pub fn offers(self, order: SortOrder) -> bool {
        self.sort_orders().contains(&order)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Compact => "compact",
            Variant::Extended => "extended",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color scheme for the rendered page. Persisted across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Totals computed over the full repository list, not just the repositories
/// currently on display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub repo_count: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    /// Primary languages ranked by repository count, most common first.
    /// Repositories without a detected language are counted in the totals
    /// but do not appear here.
    pub languages: Vec<(String, usize)>,
}
