//! Feedback board queries - filter, sort, paginate.
//!
//! Pure derivations over the feedback collection. Filtering and sorting
//! never fail; a page index past the end yields an empty page (callers
//! re-derive the page count from the filtered length and clamp before
//! asking).

use crate::records::Feedback;
use std::cmp::Reverse;

/// Fixed page size for the board list.
pub const PAGE_SIZE: usize = 6;

/// Free-text and attribute filter.
#[derive(Clone, Debug, Default)]
pub struct BoardFilter {
    /// Case-insensitive substring match against title, description, and
    /// author username
    pub search: String,
    /// Keep only posts with exactly this rating when set
    pub rating: Option<u8>,
}

/// Sort orders for the board list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first by creation instant
    #[default]
    Recent,
    /// Highest rating first
    TopRated,
    /// Most likes first
    MostLiked,
}

/// One page of the filtered, sorted board.
#[derive(Clone, Debug)]
pub struct Page<'a> {
    /// Posts on this page, at most [`PAGE_SIZE`]
    pub items: Vec<&'a Feedback>,
    /// Zero-based page index that was requested
    pub index: usize,
    /// Total pages of the filtered sequence; zero when nothing matched
    pub total_pages: usize,
}

/// Applies the filter, preserving store order.
#[must_use]
pub fn filter_feedback<'a>(items: &'a [Feedback], filter: &BoardFilter) -> Vec<&'a Feedback> {
    let needle = filter.search.to_lowercase();

    items
        .iter()
        .filter(|fb| {
            let matches_search = needle.is_empty()
                || fb.title.to_lowercase().contains(&needle)
                || fb.description.to_lowercase().contains(&needle)
                || fb.author.username.to_lowercase().contains(&needle);
            let matches_rating = filter.rating.is_none_or(|r| fb.rating == r);
            matches_search && matches_rating
        })
        .collect()
}

/// Sorts the filtered sequence in place. The sort is stable, so posts that
/// compare equal keep their store order.
pub fn sort_feedback(items: &mut [&Feedback], key: SortKey) {
    match key {
        SortKey::Recent => items.sort_by_key(|fb| Reverse(fb.timestamp)),
        SortKey::TopRated => items.sort_by_key(|fb| Reverse(fb.rating)),
        SortKey::MostLiked => items.sort_by_key(|fb| Reverse(fb.like_count())),
    }
}

/// Slices one page out of the filtered, sorted sequence.
#[must_use]
pub fn paginate<'a>(items: &[&'a Feedback], index: usize) -> Page<'a> {
    let total_pages = items.len().div_ceil(PAGE_SIZE);
    let page_items = items
        .iter()
        .skip(index.saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .copied()
        .collect();

    Page {
        items: page_items,
        index,
        total_pages,
    }
}

/// Filter, sort, and slice in one call.
#[must_use]
pub fn query<'a>(
    items: &'a [Feedback],
    filter: &BoardFilter,
    sort: SortKey,
    page: usize,
) -> Page<'a> {
    let mut filtered = filter_feedback(items, filter);
    sort_feedback(&mut filtered, sort);
    paginate(&filtered, page)
}
