//! Repository slug extraction

/// Prefix stripped from repository URLs
const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// Suffix stripped from repository URLs
const GIT_SUFFIX: &str = ".git";

/// Derive the `owner/repo` slug from a repository URL.
///
/// Strips a literal `https://github.com/` prefix and a trailing `.git`, each at
/// most once. The result is not validated; a malformed slug simply makes the
/// remote lookups fail.
pub fn repository_slug(repository_url: &str) -> &str {
    let slug = repository_url
        .strip_prefix(GITHUB_URL_PREFIX)
        .unwrap_or(repository_url);
    slug.strip_suffix(GIT_SUFFIX).unwrap_or(slug)
}
