//! Shared list helpers: search, sorting and the related UI bits
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Types that can be matched against a free-text search query
pub trait Searchable {
    /// `filter` is already lower-cased and non-empty
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be ordered by one of their fields
pub trait Sortable<F> {
    fn compare_by_field(&self, other: &Self, field: F) -> Ordering;
}

/// Stable sort by `field`; descending reverses every comparison
pub fn sort_list<T: Sortable<F>, F: Copy>(items: &mut [T], field: F, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Keeps items matching `filter` (case-insensitive); empty filter keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }
    let filter = filter.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

/// `a < b ? -1 : a > b ? 1 : 0`; incomparable values tie
pub fn loose_cmp<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Highlight case-insensitive matches of `filter` in `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of non-overlapping case-insensitive matches.
///
/// Empty when the pattern is empty or when lower-casing changes byte lengths,
/// since offsets in the lowered text would not line up with `text`.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current applied filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value after the debounce delay, or immediately on clear
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Dropping the previous Timeout cancels it
        let timeout = Timeout::new(300, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class=move || if value.get().is_empty() {
                    "search-input__field"
                } else {
                    "search-input__field search-input__field--active"
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(is_current: bool, ascending: bool) -> &'static str {
    if is_current {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(is_current: bool) -> &'static str {
    if is_current {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        rank: u32,
    }

    #[derive(Clone, Copy)]
    enum Field {
        Rank,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(filter)
        }
    }

    impl Sortable<Field> for Row {
        fn compare_by_field(&self, other: &Self, field: Field) -> Ordering {
            match field {
                Field::Rank => self.rank.cmp(&other.rank),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "North Lot", rank: 2 },
            Row { name: "south lot", rank: 1 },
            Row { name: "Garage", rank: 2 },
        ]
    }

    #[test]
    fn test_filter_list_case_insensitive() {
        let names: Vec<_> = filter_list(rows(), "LOT").into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["North Lot", "south lot"]);
        assert_eq!(filter_list(rows(), "").len(), 3);
    }

    #[test]
    fn test_sort_list_is_stable() {
        let mut items = rows();
        sort_list(&mut items, Field::Rank, true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["south lot", "North Lot", "Garage"]);

        sort_list(&mut items, Field::Rank, false);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["North Lot", "Garage", "south lot"]);
    }

    #[test]
    fn test_loose_cmp_ties_on_nan() {
        assert_eq!(loose_cmp(&1.0, &2.0), Ordering::Less);
        assert_eq!(loose_cmp(&f64::NAN, &2.0), Ordering::Equal);
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Lot A lot B", "lot"), vec![(0, 3), (6, 9)]);
        assert!(match_ranges("Lot", "").is_empty());
        assert!(match_ranges("Lot", "x").is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(true, true), " ▲");
        assert_eq!(get_sort_indicator(true, false), " ▼");
        assert_eq!(get_sort_indicator(false, true), " ⇅");
    }
}
