/// Parse a 1-based page selection like "1,3-5" into sorted, deduplicated
/// 0-based page indices, checked against `page_count`.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, String> {
    let mut pages = Vec::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((start, end)) => (page_number(start, page_count)?, page_number(end, page_count)?),
            None => {
                let page = page_number(part, page_count)?;
                (page, page)
            }
        };
        if start > end {
            return Err(format!("invalid page range: '{part}' (start after end)"));
        }
        pages.extend(start - 1..end);
    }

    if pages.is_empty() {
        return Err(format!("invalid page range: '{input}' selects no pages"));
    }

    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}

fn page_number(text: &str, page_count: usize) -> Result<usize, String> {
    let text = text.trim();
    let page: usize = text
        .parse()
        .map_err(|_| format!("invalid page number: '{text}'"))?;

    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    if page > page_count {
        return Err(format!(
            "page {page} exceeds document page count ({page_count})"
        ));
    }
    Ok(page)
}
