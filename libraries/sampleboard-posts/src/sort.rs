//! Title sorting

use crate::state::SortDirection;
use sampleboard_core::Post;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two titles the way a reader expects.
///
/// Letters are compared by their base form first, ignoring accents and
/// case, so "éclair" sorts between "dune" and "fig". Remaining ties are
/// broken by accents (unaccented first), then by case (lowercase first).
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| case_rank(x).cmp(&case_rank(y)))
        })
        .then_with(|| a.cmp(b))
}

/// Lowercased, decomposed characters with combining marks removed
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    folded(s).filter(|c| !is_combining_mark(*c))
}

/// Lowercased, decomposed characters
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_rank(c: char) -> u8 {
    u8::from(!c.is_lowercase())
}

/// Return `posts` ordered by title in `direction`.
///
/// The sort is stable: posts with equal titles keep their input order.
/// `Reset` returns the input order unchanged.
pub fn sort_posts(posts: &[Post], direction: SortDirection) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by(|p1, p2| compare_titles(&p1.title, &p2.title)),
        SortDirection::Desc => sorted.sort_by(|p1, p2| compare_titles(&p2.title, &p1.title)),
        SortDirection::Reset => {}
    }
    sorted
}
