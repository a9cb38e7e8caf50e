//! Pure derivation of the render-ready list view.
//!
//! Every function in here takes its inputs by reference and returns a new
//! value; nothing mutates the working set of posts.

use super::SortField;
use crate::api::Post;
use std::cmp::{Ordering, Reverse};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Counts shown in the table captions.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub filtered_count: usize,
    pub total_count: usize,
    pub range_start: usize,
    pub range_end: usize,
    pub total_pages: usize,
}

/// Derived output of the pipeline: the posts on the current page and the
/// counts describing them.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListView {
    pub page: Vec<Post>,
    pub summary: Summary,
}

/// Return the posts whose title contains the search term, ignoring case.
///
pub fn filter<'a>(items: &'a [Post], search_term: &str) -> Vec<&'a Post> {
    if search_term.is_empty() {
        return items.iter().collect();
    }
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|post| post.title.to_lowercase().contains(&needle))
        .collect()
}

/// Stably sort the filtered posts ascending on the given field.
///
pub fn sort(posts: &mut [&Post], field: Option<SortField>) {
    if let Some(field) = field {
        posts.sort_by_cached_key(|post| CollationKey::new(field.value(post)));
    }
}

/// Compare two strings the way a default collator orders them: base letters
/// first, then accents, then case with lowercase first.
///
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Precomputed sort key with one level per collation strength.
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    accents: String,
    case: Reverse<String>,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let accents: String = text.to_lowercase().nfd().collect();
        let base = accents.chars().filter(|c| !is_combining_mark(*c)).collect();
        CollationKey {
            base,
            accents,
            case: Reverse(text.to_owned()),
        }
    }
}

/// Return the slice of posts on the 1-indexed page, empty when out of range.
///
pub fn paginate<T>(sorted: &[T], current_page: usize, size: usize) -> &[T] {
    if current_page == 0 || size == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(size);
    if start >= sorted.len() {
        return &[];
    }
    let end = current_page.saturating_mul(size).min(sorted.len());
    &sorted[start..end]
}

/// Compute caption counts for the page.
///
pub fn summarize(
    total_count: usize,
    filtered_count: usize,
    current_page: usize,
    size: usize,
) -> Summary {
    let total_pages = if size == 0 {
        0
    } else {
        (filtered_count + size - 1) / size
    };
    let (range_start, range_end) = if filtered_count == 0 {
        (1, 0)
    } else {
        (
            current_page.saturating_sub(1).saturating_mul(size) + 1,
            current_page.saturating_mul(size).min(filtered_count),
        )
    };
    Summary {
        filtered_count,
        total_count,
        range_start,
        range_end,
        total_pages,
    }
}

/// Run the whole pipeline: filter, sort, paginate and count.
///
pub fn derive_view(
    items: &[Post],
    search_term: &str,
    sort_field: Option<SortField>,
    current_page: usize,
    page_size: usize,
) -> ListView {
    let mut sorted = filter(items, search_term);
    sort(&mut sorted, sort_field);
    let page = paginate(&sorted, current_page, page_size)
        .iter()
        .map(|post| (*post).to_owned())
        .collect();
    ListView {
        page,
        summary: summarize(items.len(), sorted.len(), current_page, page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PostId;
    use crate::pipeline::PageSize;
    use fake::{Fake, Faker};

    fn post(id: i64, title: &str, body: &str) -> Post {
        Post {
            id: PostId::Int(id),
            title: title.to_string(),
            body: body.to_string(),
            user_id: None,
        }
    }

    fn ids(posts: &[Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.to_string()).collect()
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn empty_search_term_keeps_every_post() {
        let items: Vec<Post> = (0..12).map(|_| Faker.fake()).collect();
        let filtered = filter(&items, "");
        assert_eq!(filtered.len(), items.len());
        assert!(filtered.iter().zip(items.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn filter_matches_title_case_insensitively() {
        let items = vec![
            post(1, "Banana bread", "x"),
            post(2, "apple pie", "banana"),
            post(3, "BANANA split", "y"),
        ];
        let filtered = filter(&items, "bAnAnA");
        let matched: Vec<PostId> = filtered.iter().map(|p| p.id.clone()).collect();
        assert_eq!(matched, vec![PostId::Int(1), PostId::Int(3)]);
        for excluded in items.iter().filter(|p| !matched.contains(&p.id)) {
            assert!(!excluded.title.to_lowercase().contains("banana"));
        }
    }

    #[test]
    fn locale_cmp_orders_case_insensitively() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Banana", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn locale_cmp_orders_accents_after_base_letters() {
        assert_eq!(locale_cmp("école", "fable"), Ordering::Less);
        assert_eq!(locale_cmp("eagle", "école"), Ordering::Less);
        assert_eq!(locale_cmp("ecole", "école"), Ordering::Less);
        assert_eq!(locale_cmp("École", "école"), Ordering::Greater);
    }

    #[test]
    fn derive_sorts_accented_titles_with_their_base_letter() {
        let items = vec![
            post(1, "zèbre", "a"),
            post(2, "école", "b"),
            post(3, "eagle", "c"),
            post(4, "fable", "d"),
        ];
        let view = derive_view(&items, "", Some(SortField::Title), 1, 10);
        assert_eq!(titles(&view.page), vec!["eagle", "école", "fable", "zèbre"]);
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let items = vec![
            post(1, "b", "same"),
            post(2, "a", "same"),
            post(3, "c", "other"),
        ];
        let mut once = filter(&items, "");
        sort(&mut once, Some(SortField::Body));
        let once_ids: Vec<String> = once.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(once_ids, vec!["3", "1", "2"]);

        let mut twice = once.clone();
        sort(&mut twice, Some(SortField::Body));
        let twice_ids: Vec<String> = twice.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn sort_without_field_keeps_order() {
        let items = vec![post(2, "z", "z"), post(1, "a", "a")];
        let mut posts = filter(&items, "");
        sort(&mut posts, None);
        assert_eq!(posts[0].id, PostId::Int(2));
    }

    #[test]
    fn paginate_never_exceeds_page_size() {
        let items: Vec<u32> = (0..47).collect();
        for size in PageSize::ALL.iter().map(PageSize::get) {
            let pages = (items.len() + size - 1) / size;
            for page in 1..=pages {
                let slice = paginate(&items, page, size);
                assert!(slice.len() <= size);
                if page < pages {
                    assert_eq!(slice.len(), size);
                }
            }
        }
    }

    #[test]
    fn paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, 2, 10).is_empty());
        assert!(paginate(&items, usize::MAX, 10).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
    }

    #[test]
    fn derive_sorted_by_title() {
        let items = vec![post(1, "Banana", "b"), post(2, "apple", "a")];
        let view = derive_view(&items, "", Some(SortField::Title), 1, 10);
        assert_eq!(ids(&view.page), vec!["2", "1"]);
        assert_eq!(
            view.summary,
            Summary {
                filtered_count: 2,
                total_count: 2,
                range_start: 1,
                range_end: 2,
                total_pages: 1,
            }
        );
    }

    #[test]
    fn derive_with_search_term() {
        let items = vec![post(1, "Banana", "b"), post(2, "apple", "a")];
        let view = derive_view(&items, "ban", None, 1, 10);
        assert_eq!(ids(&view.page), vec!["1"]);
        assert_eq!(view.summary.filtered_count, 1);
        assert_eq!(view.summary.total_count, 2);
    }

    #[test]
    fn second_item_on_second_page_of_one() {
        let items = vec![post(1, "Banana", "b"), post(2, "apple", "a")];
        let view = derive_view(&items, "", None, 2, 1);
        assert_eq!(ids(&view.page), vec!["2"]);
        assert_eq!(view.summary.range_start, 2);
        assert_eq!(view.summary.range_end, 2);
        assert_eq!(view.summary.total_pages, 2);
    }

    #[test]
    fn summary_for_empty_result() {
        let summary = summarize(4, 0, 1, 20);
        assert_eq!(summary.range_start, 1);
        assert_eq!(summary.range_end, 0);
        assert_eq!(summary.total_pages, 0);
    }

    #[test]
    fn summary_for_last_partial_page() {
        let summary = summarize(100, 45, 3, 20);
        assert_eq!(summary.range_start, 41);
        assert_eq!(summary.range_end, 45);
        assert_eq!(summary.total_pages, 3);
    }
}
