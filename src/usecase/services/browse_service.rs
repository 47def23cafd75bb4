use crate::domain::entities::country::Country;
use crate::domain::entities::paging::{BrowseView, PageControl};

/// Case-insensitive substring filter over the official name. Only the
/// exactly-empty query disables filtering; whitespace counts as a search
/// term. Relative order of the input is preserved.
pub fn filter_countries(countries: &[Country], query: &str) -> Vec<Country> {
    if query.is_empty() {
        return countries.to_vec();
    }

    let needle = query.to_lowercase();
    countries
        .iter()
        .filter(|country| country.name.official.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size)
}

/// Slices out the 1-based `current_page` window and reports the total page
/// count. A page past the end yields an empty window rather than an error;
/// an empty sequence has zero pages.
pub fn page_window<T: Clone>(items: &[T], page_size: usize, current_page: usize) -> (Vec<T>, usize) {
    let total = total_pages(items.len(), page_size);
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return (Vec::new(), total);
    }

    let end = (start + page_size).min(items.len());
    (items[start..end].to_vec(), total)
}

/// Builds the pagination control row: page 1, a collapsed run left of the
/// current page, the current page with its immediate neighbours, a
/// collapsed run right of it, and the last page. Collapsed runs carry the
/// exact pages they hide so the UI can expose them as a selectable
/// sub-list. Guards keep every page number unique and every page reachable
/// through exactly one entry.
pub fn page_controls(current_page: usize, total_pages: usize) -> Vec<PageControl> {
    let mut controls = Vec::new();
    if total_pages == 0 {
        return controls;
    }

    controls.push(PageControl::Number {
        page: 1,
        is_active: current_page == 1,
    });

    if current_page > 3 {
        controls.push(PageControl::Ellipsis {
            hidden: (2..current_page - 1).collect(),
        });
    }

    let first_neighbour = current_page.saturating_sub(1).max(2);
    let last_neighbour = (current_page + 1).min(total_pages.saturating_sub(1));
    for page in first_neighbour..=last_neighbour {
        controls.push(PageControl::Number {
            page,
            is_active: page == current_page,
        });
    }

    if current_page + 2 < total_pages {
        controls.push(PageControl::Ellipsis {
            hidden: (current_page + 2..total_pages).collect(),
        });
    }

    if total_pages > 1 {
        controls.push(PageControl::Number {
            page: total_pages,
            is_active: current_page == total_pages,
        });
    }

    controls
}

pub fn previous_page(current_page: usize) -> usize {
    current_page.saturating_sub(1).max(1)
}

pub fn next_page(current_page: usize, total_pages: usize) -> usize {
    (current_page + 1).min(total_pages.max(1))
}

pub fn select_page(requested_page: usize, total_pages: usize) -> usize {
    requested_page.clamp(1, total_pages.max(1))
}

/// Derives one render's worth of view data. The page count always comes
/// from the filtered set, so an active query can never produce page
/// numbers with no entities behind them.
pub fn browse_view(
    countries: &[Country],
    query: &str,
    page_size: usize,
    current_page: usize,
) -> BrowseView {
    let filtered = filter_countries(countries, query);
    let (visible, total_pages) = page_window(&filtered, page_size, current_page);
    let controls = page_controls(current_page, total_pages);

    BrowseView {
        visible,
        current_page,
        total_pages,
        controls,
    }
}
