//! Category filter, text search and page window over an in-memory list.

/// Items that can be narrowed by [`FilterPaginator`].
pub trait Filterable {
    type Category: Copy + Eq;

    fn category(&self) -> Self::Category;

    /// Text fields matched by the search box.
    fn search_fields(&self) -> Vec<&str>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + Eq> CategoryFilter<C> {
    pub fn admits(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterPaginator<C> {
    filter: CategoryFilter<C>,
    search_term: String,
    needle: String,
    current_page: usize,
    page_size: usize,
    filtered_count: usize,
}

impl<C: Copy + Eq> FilterPaginator<C> {
    pub fn new<T>(items: &[T], page_size: usize) -> Self
    where
        T: Filterable<Category = C>,
    {
        let mut paginator = Self {
            filter: CategoryFilter::All,
            search_term: String::new(),
            needle: String::new(),
            current_page: 0,
            page_size: page_size.max(1),
            filtered_count: 0,
        };
        paginator.refresh(items);
        paginator
    }

    pub fn active_filter(&self) -> CategoryFilter<C> {
        self.filter
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count.div_ceil(self.page_size)
    }

    pub fn set_filter<T>(&mut self, filter: CategoryFilter<C>, items: &[T])
    where
        T: Filterable<Category = C>,
    {
        self.filter = filter;
        self.current_page = 0;
        self.refresh(items);
    }

    /// Searching always restarts from the first page, the same as a
    /// filter change.
    pub fn set_search<T>(&mut self, term: &str, items: &[T])
    where
        T: Filterable<Category = C>,
    {
        self.search_term = term.to_string();
        self.needle = term.to_lowercase();
        self.current_page = 0;
        self.refresh(items);
    }

    pub fn clear<T>(&mut self, items: &[T])
    where
        T: Filterable<Category = C>,
    {
        self.filter = CategoryFilter::All;
        self.search_term.clear();
        self.needle.clear();
        self.current_page = 0;
        self.refresh(items);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if total > 1 {
            self.current_page = (self.current_page + 1) % total;
        }
    }

    pub fn prev_page(&mut self) {
        let total = self.total_pages();
        if total > 1 {
            self.current_page = (self.current_page + total - 1) % total;
        }
    }

    /// Returns false and leaves the page unchanged when `page` is out of range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < self.total_pages() {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Filterable<Category = C>,
    {
        self.filter.admits(item.category())
            && (self.needle.is_empty()
                || item
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&self.needle)))
    }

    #[cfg(test)]
    pub fn filtered<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Filterable<Category = C>,
    {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    pub fn page_window<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Filterable<Category = C>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .skip(self.current_page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Number of items admitted by `filter`, ignoring the search term.
    pub fn count_for<T>(filter: CategoryFilter<C>, items: &[T]) -> usize
    where
        T: Filterable<Category = C>,
    {
        items
            .iter()
            .filter(|item| filter.admits(item.category()))
            .count()
    }

    /// Recounts the filtered set, e.g. after the item list changed.
    pub fn refresh<T>(&mut self, items: &[T])
    where
        T: Filterable<Category = C>,
    {
        self.filtered_count = items.iter().filter(|item| self.matches(*item)).count();
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        if total == 0 {
            self.current_page = 0;
        } else if self.current_page >= total {
            self.current_page = total - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Shelf {
        Red,
        Blue,
    }

    #[derive(Debug)]
    struct Book {
        title: &'static str,
        blurb: &'static str,
        shelf: Shelf,
    }

    impl Filterable for Book {
        type Category = Shelf;

        fn category(&self) -> Shelf {
            self.shelf
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.blurb]
        }
    }

    fn book(title: &'static str, shelf: Shelf) -> Book {
        Book {
            title,
            blurb: "",
            shelf,
        }
    }

    fn letters() -> Vec<Book> {
        ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(|title| book(title, Shelf::Red))
            .collect()
    }

    fn mixed() -> Vec<Book> {
        vec![
            Book {
                title: "Rust in Action",
                blurb: "systems programming",
                shelf: Shelf::Red,
            },
            Book {
                title: "Zero to Production",
                blurb: "backend services in Rust",
                shelf: Shelf::Blue,
            },
            Book {
                title: "Crafting Interpreters",
                blurb: "parsers and virtual machines",
                shelf: Shelf::Blue,
            },
            Book {
                title: "The Pragmatic Programmer",
                blurb: "career advice",
                shelf: Shelf::Red,
            },
        ]
    }

    fn titles(window: Vec<&Book>) -> Vec<&'static str> {
        window.into_iter().map(|book| book.title).collect()
    }

    #[test]
    fn five_items_in_pages_of_three_wrap_around() {
        let items = letters();
        let mut pager = FilterPaginator::new(&items, 3);

        assert_eq!(pager.total_pages(), 2);
        assert_eq!(titles(pager.page_window(&items)), ["A", "B", "C"]);

        pager.next_page();
        assert_eq!(pager.current_page(), 1);
        assert_eq!(titles(pager.page_window(&items)), ["D", "E"]);

        pager.next_page();
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn prev_page_wraps_to_last() {
        let items = letters();
        let mut pager = FilterPaginator::new(&items, 2);

        pager.prev_page();
        assert_eq!(pager.current_page(), 2);
        assert_eq!(titles(pager.page_window(&items)), ["E"]);
    }

    #[test]
    fn single_page_navigation_is_noop() {
        let items = letters();
        let mut pager = FilterPaginator::new(&items, 5);

        pager.next_page();
        pager.prev_page();
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn set_filter_resets_page_and_counts_category() {
        let items = mixed();
        let mut pager = FilterPaginator::new(&items, 1);
        pager.go_to_page(3);

        pager.set_filter(CategoryFilter::Only(Shelf::Blue), &items);
        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.filtered_count(), 2);

        pager.set_filter(CategoryFilter::All, &items);
        assert_eq!(pager.filtered_count(), items.len());
    }

    #[test]
    fn search_is_case_insensitive_across_fields_and_resets_page() {
        let items = mixed();
        let mut pager = FilterPaginator::new(&items, 1);
        pager.go_to_page(2);

        pager.set_search("RUST", &items);
        assert_eq!(pager.current_page(), 0);
        assert_eq!(
            titles(pager.filtered(&items)),
            ["Rust in Action", "Zero to Production"]
        );

        pager.set_filter(CategoryFilter::Only(Shelf::Blue), &items);
        assert_eq!(titles(pager.filtered(&items)), ["Zero to Production"]);
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let items = mixed();
        let mut pager = FilterPaginator::new(&items, 3);

        pager.set_search("Rust ", &items);
        assert_eq!(titles(pager.page_window(&items)), ["Rust in Action"]);
        assert_eq!(pager.search_term(), "Rust ");

        pager.set_search(" ", &items);
        assert_eq!(pager.filtered_count(), 4);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let items = mixed();
        let mut pager = FilterPaginator::new(&items, 3);

        pager.set_search("cobol", &items);
        assert_eq!(pager.filtered_count(), 0);
        assert_eq!(pager.total_pages(), 0);
        assert_eq!(pager.current_page(), 0);
        assert!(pager.page_window(&items).is_empty());
        assert!(!pager.go_to_page(0));
    }

    #[test]
    fn clear_restores_everything() {
        let items = mixed();
        let mut pager = FilterPaginator::new(&items, 3);
        pager.set_filter(CategoryFilter::Only(Shelf::Red), &items);
        pager.set_search("advice", &items);

        pager.clear(&items);
        assert_eq!(pager.active_filter(), CategoryFilter::All);
        assert_eq!(pager.search_term(), "");
        assert_eq!(pager.filtered_count(), 4);
    }

    #[test]
    fn shrinking_page_count_clamps_current_page() {
        let items = letters();
        let mut pager = FilterPaginator::new(&items, 1);
        assert!(pager.go_to_page(4));

        pager.set_page_size(3);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(titles(pager.page_window(&items)), ["D", "E"]);
    }

    #[test]
    fn out_of_range_page_is_ignored() {
        let items = letters();
        let mut pager = FilterPaginator::new(&items, 3);

        assert!(!pager.go_to_page(2));
        assert_eq!(pager.current_page(), 0);
        assert!(pager.go_to_page(1));
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let items = letters();
        let pager = FilterPaginator::new(&items, 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.total_pages(), 5);
    }

    #[test]
    fn count_for_ignores_search() {
        let items = mixed();
        assert_eq!(
            FilterPaginator::<Shelf>::count_for(CategoryFilter::Only(Shelf::Red), &items),
            2
        );
        assert_eq!(
            FilterPaginator::<Shelf>::count_for(CategoryFilter::All, &items),
            4
        );
    }

    fn arb_books() -> impl Strategy<Value = Vec<Book>> {
        prop::collection::vec(prop::bool::ANY, 0..40).prop_map(|shelves| {
            shelves
                .into_iter()
                .map(|red| book("item", if red { Shelf::Red } else { Shelf::Blue }))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn next_page_is_cyclic(items in arb_books(), page_size in 1usize..7, start in 0usize..40) {
            let mut pager = FilterPaginator::new(&items, page_size);
            pager.go_to_page(start);
            let original = pager.current_page();

            for _ in 0..pager.total_pages() {
                pager.next_page();
            }
            prop_assert_eq!(pager.current_page(), original);
        }

        #[test]
        fn page_stays_in_range(items in arb_books(), sizes in prop::collection::vec(1usize..7, 1..8), red in prop::bool::ANY) {
            let mut pager = FilterPaginator::new(&items, 1);
            pager.go_to_page(items.len().saturating_sub(1));
            pager.set_filter(CategoryFilter::Only(if red { Shelf::Red } else { Shelf::Blue }), &items);
            prop_assert_eq!(pager.current_page(), 0);

            for size in sizes {
                pager.next_page();
                pager.set_page_size(size);
                if pager.filtered_count() > 0 {
                    prop_assert!(pager.current_page() * pager.page_size() < pager.filtered_count());
                } else {
                    prop_assert_eq!(pager.current_page(), 0);
                }
            }
        }
    }
}
