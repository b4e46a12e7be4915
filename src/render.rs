use crate::models::{AggregateStats, Profile, Repository, Snapshot, SortOrder, Theme, Variant};
use chrono::{DateTime, Utc};

/// Shown in place of a missing repository description.
pub const NO_DESCRIPTION: &str = "No description provided.";
/// Shown in place of a missing profile bio.
pub const NO_BIO: &str = "No bio provided.";
/// Shown when the account has no public repositories to display.
pub const NO_REPOSITORIES: &str = "No public repositories to show.";
/// Label shown when a repository has no detected primary language.
pub const LANGUAGE_UNKNOWN: &str = "N/A";
/// Marker color used when a language has no entry in the color map.
pub const LANGUAGE_FALLBACK_COLOR: &str = "#8b949e";

/// How many ranked languages the stats panel lists.
const LANGUAGES_SHOWN: usize = 5;

/// Escape text for interpolation into HTML. Attribute values are always
/// double-quoted in the templates below.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Marker color for a primary language. Languages outside the map get the
/// fixed fallback color so the marker is never omitted.
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#3178c6",
        "Rust" => "#dea584",
        "Python" => "#3572a5",
        "Go" => "#00add8",
        "Java" => "#b07219",
        "C" => "#555555",
        "C++" => "#f34b7d",
        "C#" => "#178600",
        "Ruby" => "#701516",
        "PHP" => "#4f5d95",
        "Swift" => "#f05138",
        "Kotlin" => "#a97bff",
        "HTML" => "#e34c26",
        "CSS" => "#663399",
        "Shell" => "#89e051",
        "Dart" => "#00b4ab",
        "Vue" => "#41b883",
        _ => LANGUAGE_FALLBACK_COLOR,
    }
}

fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Coarse relative age for repository cards, measured against the time the
/// snapshot was fetched so rendering the same snapshot twice gives
/// identical output.
fn relative_updated(updated: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let days = (reference - updated).num_days();
    if days <= 0 {
        "today".to_string()
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 30 {
        format!("{} days ago", days)
    } else if days < 365 {
        let months = days / 30;
        if months == 1 {
            "last month".to_string()
        } else {
            format!("{} months ago", months)
        }
    } else {
        format!("on {}", format_date(updated))
    }
}

/// GitHub reports bare hostnames for the website field as often as full
/// URLs. Give relative values a scheme so the link works from a file on
/// disk.
fn website_href(website: &str) -> String {
    if website.starts_with("http://") || website.starts_with("https://") {
        website.to_string()
    } else {
        format!("https://{}", website)
    }
}

/// Profile card: avatar, display name, handle, bio and the meta rows.
/// Optional meta rows with no value are omitted entirely rather than
/// rendered empty; the join date is always known and always shown.
pub fn build_profile_card(profile: &Profile) -> String {
    let display_name = html_escape(profile.display_name());
    let login = html_escape(&profile.login);

    let bio = match profile.bio.as_deref().map(str::trim) {
        Some(bio) if !bio.is_empty() => html_escape(bio),
        _ => NO_BIO.to_string(),
    };

    let mut meta = String::new();
    if let Some(location) = profile.location() {
        meta.push_str(&format!(
            r#"<li class="meta-item meta-location">{}</li>"#,
            html_escape(location)
        ));
    }
    if let Some(company) = profile.company() {
        meta.push_str(&format!(
            r#"<li class="meta-item meta-company">{}</li>"#,
            html_escape(company)
        ));
    }
    if let Some(website) = profile.website() {
        meta.push_str(&format!(
            r#"<li class="meta-item meta-website"><a href="{}" target="_blank" rel="noopener">{}</a></li>"#,
            html_escape(&website_href(website)),
            html_escape(website)
        ));
    }
    meta.push_str(&format!(
        r#"<li class="meta-item meta-joined">Joined {}</li>"#,
        format_date(profile.created_at)
    ));
    let meta_html = format!(r#"<ul class="profile-meta">{}</ul>"#, meta);

    format!(
        r#"<section class="profile-card">
    <img class="avatar" src="{avatar}" alt="{name} avatar" width="120" height="120">
    <div class="profile-text">
        <h1 class="profile-name">{name}</h1>
        <p class="profile-login"><a href="{profile_url}" target="_blank" rel="noopener">@{login}</a></p>
        <p class="profile-bio">{bio}</p>
        {meta_html}
    </div>
</section>"#,
        avatar = html_escape(&profile.avatar_url),
        name = display_name,
        profile_url = html_escape(&profile.html_url),
        login = login,
        bio = bio,
        meta_html = meta_html,
    )
}

/// Stats panel: account counters plus the totals computed over the full
/// repository list. Every number here is real data, never a placeholder.
pub fn build_stats_panel(profile: &Profile, stats: &AggregateStats) -> String {
    let mut languages = String::new();
    for (language, count) in stats.languages.iter().take(LANGUAGES_SHOWN) {
        languages.push_str(&format!(
            r#"<span class="language-chip"><span class="language-dot" style="background-color: {}"></span>{} ({})</span>"#,
            language_color(language),
            html_escape(language),
            count
        ));
    }
    let languages_html = if languages.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="language-row">{}</div>"#, languages)
    };

    format!(
        r#"<section class="stats-panel">
    <dl class="stat-list">
        <div class="stat"><dt>Repositories</dt><dd>{repos}</dd></div>
        <div class="stat"><dt>Followers</dt><dd>{followers}</dd></div>
        <div class="stat"><dt>Following</dt><dd>{following}</dd></div>
        <div class="stat"><dt>Total stars</dt><dd>{stars}</dd></div>
        <div class="stat"><dt>Total forks</dt><dd>{forks}</dd></div>
    </dl>
    {languages_html}
</section>"#,
        repos = profile.public_repos,
        followers = profile.followers,
        following = profile.following,
        stars = stats.total_stars,
        forks = stats.total_forks,
        languages_html = languages_html,
    )
}

/// Filter bar showing which orderings the active preset offers and which
/// one produced the current view.
pub fn build_filter_nav(variant: Variant, selection: SortOrder) -> String {
    let mut chips = String::new();
    for order in variant.sort_orders() {
        let class = if *order == selection {
            "filter-chip active"
        } else {
            "filter-chip"
        };
        chips.push_str(&format!(
            r#"<span class="{}" data-sort="{}">{}</span>"#,
            class,
            order.as_str(),
            order.label()
        ));
    }
    format!(
        r#"<nav class="filter-bar" aria-label="Repository order">{}</nav>"#,
        chips
    )
}

/// One repository card. Missing descriptions and languages get their fixed
/// placeholders; the language marker is always rendered.
pub fn build_repo_card(repo: &Repository, reference: DateTime<Utc>) -> String {
    let description = match repo.description.as_deref().map(str::trim) {
        Some(desc) if !desc.is_empty() => html_escape(desc),
        _ => NO_DESCRIPTION.to_string(),
    };

    let (language_label, color) = match repo.language.as_deref() {
        Some(language) => (html_escape(language), language_color(language)),
        None => (LANGUAGE_UNKNOWN.to_string(), LANGUAGE_FALLBACK_COLOR),
    };

    format!(
        r#"<article class="repo-card">
    <h3 class="repo-name"><a href="{url}" target="_blank" rel="noopener">{name}</a></h3>
    <p class="repo-description">{description}</p>
    <div class="repo-footer">
        <span class="repo-language"><span class="language-dot" style="background-color: {color}"></span>{language}</span>
        <span class="repo-stat repo-stars">&#9733; {stars}</span>
        <span class="repo-stat repo-forks">&#8916; {forks}</span>
        <span class="repo-updated">Updated {updated}</span>
    </div>
</article>"#,
        url = html_escape(&repo.html_url),
        name = html_escape(&repo.name),
        description = description,
        color = color,
        language = language_label,
        stars = repo.stargazers_count,
        forks = repo.forks_count,
        updated = relative_updated(repo.updated_at, reference),
    )
}

/// Repository grid over the already-ordered, already-capped view.
pub fn build_repo_grid(view: &[&Repository], reference: DateTime<Utc>) -> String {
    if view.is_empty() {
        return format!(r#"<p class="empty-state">{}</p>"#, NO_REPOSITORIES);
    }

    let mut html = String::from(r#"<div class="repo-grid">"#);
    for repo in view {
        html.push_str(&build_repo_card(repo, reference));
    }
    html.push_str("</div>");
    html
}

/// Render the complete page for one snapshot.
///
/// Pure with respect to its inputs: the same snapshot, view, stats and
/// settings always produce byte-identical output. All data that reaches
/// the markup went through `html_escape`.
pub fn render_page(
    snapshot: &Snapshot,
    view: &[&Repository],
    stats: &AggregateStats,
    variant: Variant,
    selection: SortOrder,
    theme: Theme,
) -> String {
    let profile = &snapshot.profile;
    let reference = snapshot.fetched_at;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | Portfolio</title>
    <style>{theme_css}{base_css}</style>
</head>
<body data-theme="{theme}" data-variant="{variant}">
    <div class="page">
        <header class="page-header">
            <span class="page-title">Portfolio</span>
            <button id="theme-toggle" type="button" aria-label="Toggle color theme">&#9681;</button>
        </header>
        {profile_card}
        {stats_panel}
        <section class="repositories">
            <div class="repositories-header">
                <h2>Repositories</h2>
                {filter_nav}
            </div>
            <p class="view-note">Showing {shown} of {total} repositories</p>
            {repo_grid}
        </section>
        <footer class="page-footer">
            <p>Data from the GitHub API. Generated {generated}.</p>
        </footer>
    </div>
    <script>{theme_js}</script>
</body>
</html>"#,
        title = html_escape(profile.display_name()),
        theme_css = THEME_CSS,
        base_css = BASE_CSS,
        theme = theme.as_str(),
        variant = variant.as_str(),
        profile_card = build_profile_card(profile),
        stats_panel = build_stats_panel(profile, stats),
        filter_nav = build_filter_nav(variant, selection),
        shown = view.len(),
        total = snapshot.repositories.len(),
        repo_grid = build_repo_grid(view, reference),
        generated = format!("{} UTC", reference.format("%b %-d, %Y %H:%M")),
        theme_js = THEME_JS,
    )
}

/// Color variables for both themes. The light block doubles as the
/// fallback when the body carries no recognized theme attribute.
const THEME_CSS: &str = r#"
body, body[data-theme="light"] {
    --color-bg: #ffffff;
    --color-surface: #f6f8fa;
    --color-text: #1f2328;
    --color-muted: #57606a;
    --color-border: #d0d7de;
    --color-accent: #0969da;
}

body[data-theme="dark"] {
    --color-bg: #0d1117;
    --color-surface: #161b22;
    --color-text: #e6edf3;
    --color-muted: #8b949e;
    --color-border: #30363d;
    --color-accent: #58a6ff;
}
"#;

const BASE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
    color: var(--color-text);
    background: var(--color-bg);
    line-height: 1.6;
}

a { color: var(--color-accent); text-decoration: none; }
a:hover { text-decoration: underline; }

.page { max-width: 960px; margin: 0 auto; padding: 2rem 1.5rem; }

.page-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 2rem;
}

.page-title { font-weight: 600; color: var(--color-muted); letter-spacing: 0.05em; }

#theme-toggle {
    font-size: 1.1rem;
    line-height: 1;
    padding: 0.4rem 0.6rem;
    color: var(--color-text);
    background: var(--color-surface);
    border: 1px solid var(--color-border);
    border-radius: 6px;
    cursor: pointer;
}

.profile-card { display: flex; gap: 1.5rem; align-items: flex-start; }

.avatar { border-radius: 50%; border: 1px solid var(--color-border); }

.profile-name { font-size: 1.6rem; }

.profile-login { color: var(--color-muted); margin-bottom: 0.5rem; }

.profile-meta { list-style: none; margin-top: 0.5rem; }
.profile-meta .meta-item { display: inline-block; margin-right: 1rem; color: var(--color-muted); }

.stats-panel {
    margin-top: 1.5rem;
    padding: 1rem;
    background: var(--color-surface);
    border: 1px solid var(--color-border);
    border-radius: 8px;
}

.stat-list { display: flex; flex-wrap: wrap; gap: 1.5rem; }
.stat dt { font-size: 0.8rem; color: var(--color-muted); }
.stat dd { font-size: 1.2rem; font-weight: 600; }

.language-row { margin-top: 0.75rem; }
.language-chip { margin-right: 0.75rem; font-size: 0.85rem; color: var(--color-muted); }

.language-dot {
    display: inline-block;
    width: 10px;
    height: 10px;
    border-radius: 50%;
    margin-right: 0.3rem;
}

.repositories { margin-top: 2rem; }

.repositories-header {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.filter-bar .filter-chip {
    font-size: 0.85rem;
    padding: 0.25rem 0.6rem;
    margin-left: 0.4rem;
    color: var(--color-muted);
    border: 1px solid var(--color-border);
    border-radius: 999px;
}

.filter-bar .filter-chip.active {
    color: var(--color-accent);
    border-color: var(--color-accent);
}

.view-note { margin-top: 0.5rem; font-size: 0.85rem; color: var(--color-muted); }

.repo-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1rem;
    margin-top: 1rem;
}

.repo-card {
    display: flex;
    flex-direction: column;
    padding: 1rem;
    background: var(--color-surface);
    border: 1px solid var(--color-border);
    border-radius: 8px;
}

.repo-description { flex-grow: 1; margin: 0.5rem 0; font-size: 0.9rem; color: var(--color-muted); }

.repo-footer { display: flex; flex-wrap: wrap; gap: 0.75rem; font-size: 0.8rem; color: var(--color-muted); }

.empty-state {
    margin-top: 1rem;
    padding: 2rem;
    text-align: center;
    color: var(--color-muted);
    border: 1px dashed var(--color-border);
    border-radius: 8px;
}

.page-footer { margin-top: 2.5rem; font-size: 0.8rem; color: var(--color-muted); text-align: center; }
"#;

/// Applies a theme stored by earlier visits, then lets the button flip
/// and store it. The server-set attribute stays in effect until the
/// visitor makes a choice.
const THEME_JS: &str = r#"
(function () {
    var body = document.body;
    var stored = null;
    try { stored = localStorage.getItem('portfolio-theme'); } catch (e) {}
    if (stored === 'light' || stored === 'dark') {
        body.setAttribute('data-theme', stored);
    }
    var btn = document.getElementById('theme-toggle');
    if (!btn) { return; }
    btn.addEventListener('click', function () {
        var next = body.getAttribute('data-theme') === 'dark' ? 'light' : 'dark';
        body.setAttribute('data-theme', next);
        try { localStorage.setItem('portfolio-theme', next); } catch (e) {}
    });
})();
"#;
