use serde::{Deserialize, Serialize};

/// One page of a newest-first listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Entry in a pager control: a page number or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageMarker {
    Number(usize),
    Ellipsis,
}

/// Number of pages needed for `total_items`. Always at least one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total_items.div_ceil(size).max(1)
}

/// Slices `items` to the requested 1-based page, clamping out-of-range requests.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let size = page_size.max(1);
    let total = total_pages(items.len(), size);
    let page = page.clamp(1, total);
    let start = (page - 1) * size;
    let end = (start + size).min(items.len());
    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        total_pages: total,
        total_items: items.len(),
    }
}

/// Page numbers to render around `current`, with gaps for long ranges.
///
/// Seven pages or fewer are all shown. Otherwise the first and last page are
/// always present and a window of pages surrounds the current one.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Number};

    if total <= 7 {
        return (1..=total).map(Number).collect();
    }

    let mut markers = Vec::with_capacity(9);
    if current <= 3 {
        markers.extend((1..=5).map(Number));
        markers.push(Ellipsis);
        markers.push(Number(total));
    } else if current >= total - 2 {
        markers.push(Number(1));
        markers.push(Ellipsis);
        markers.extend((total - 4..=total).map(Number));
    } else {
        markers.push(Number(1));
        markers.push(Ellipsis);
        markers.extend((current - 1..=current + 1).map(Number));
        markers.push(Ellipsis);
        markers.push(Number(total));
    }
    markers
}
