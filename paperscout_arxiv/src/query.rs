//! arXiv search-query construction.

/// Build the export-API search query for recent papers by any roster member
/// in the given category.
///
/// Member names are the raw roster lines, quoted verbatim; the approximate
/// matching happens later, on the bylines that come back.
pub fn build_query<'a, I>(category: &str, members: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let clauses: Vec<String> = members
        .into_iter()
        .map(|name| format!("au:\"{name}\""))
        .collect();
    if clauses.is_empty() {
        return format!("cat:{category}");
    }
    format!("cat:{category} AND ({})", clauses.join(" OR "))
}
