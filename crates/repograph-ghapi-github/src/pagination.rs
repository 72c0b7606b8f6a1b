//! `Link` header helpers.

/// Page count announced by a `Link` header.
///
/// Uses the `rel="last"` page, then the `rel="next"` one. Counts always
/// request the first page, so a lone `next` page number is a lower bound:
/// at least that many pages exist.
pub(crate) fn page_count_from_link(link: &str) -> Option<u64> {
    find_rel_page(link, "last").or_else(|| find_rel_page(link, "next"))
}

fn find_rel_page(link: &str, rel: &str) -> Option<u64> {
    let expected = format!("rel=\"{rel}\"");

    link.split(',').find_map(|part| {
        let mut sections = part.split(';');
        let url = sections
            .next()?
            .trim()
            .trim_start_matches('<')
            .trim_end_matches('>');

        if sections.any(|s| s.trim() == expected) {
            page_param(url)
        } else {
            None
        }
    })
}

fn page_param(url: &str) -> Option<u64> {
    let (_, query) = url.split_once('?')?;
    query.split('&').find_map(|pair| match pair.split_once('=') {
        Some(("page", value)) => value.parse().ok(),
        _ => None,
    })
}
