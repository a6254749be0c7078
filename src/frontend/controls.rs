//! Reducer and widgets shared by the filterable, paged listings.

use crate::pagination::{CategoryFilter, FilterPaginator, Filterable};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum PagerAction<C> {
    Filter(CategoryFilter<C>),
    Search(String),
    Clear,
    Next,
    Prev,
    Go(usize),
    PageSize(usize),
}

/// A [`FilterPaginator`] bound to its static item list.
pub struct Pager<T: Filterable + 'static> {
    items: &'static [T],
    pub paginator: FilterPaginator<T::Category>,
}

impl<T: Filterable + 'static> Pager<T> {
    pub fn new(items: &'static [T], page_size: usize) -> Self {
        Self {
            items,
            paginator: FilterPaginator::new(items, page_size),
        }
    }

    pub fn page(&self) -> Vec<&'static T> {
        self.paginator.page_window(self.items)
    }

    pub fn count_for(&self, filter: CategoryFilter<T::Category>) -> usize {
        FilterPaginator::count_for(filter, self.items)
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_narrowed(&self) -> bool {
        self.paginator.active_filter() != CategoryFilter::All
            || !self.paginator.search_term().is_empty()
    }
}

impl<T> Reducible for Pager<T>
where
    T: Filterable + 'static,
    T::Category: 'static,
{
    type Action = PagerAction<T::Category>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut paginator = self.paginator.clone();
        match action {
            PagerAction::Filter(filter) => paginator.set_filter(filter, self.items),
            PagerAction::Search(term) => paginator.set_search(&term, self.items),
            PagerAction::Clear => paginator.clear(self.items),
            PagerAction::Next => paginator.next_page(),
            PagerAction::Prev => paginator.prev_page(),
            PagerAction::Go(page) => {
                if !paginator.go_to_page(page) {
                    return self;
                }
            }
            PagerAction::PageSize(size) => paginator.set_page_size(size),
        }

        if paginator == self.paginator {
            return self;
        }

        Rc::new(Self {
            items: self.items,
            paginator,
        })
    }
}

/// Keeps the page size in step with `page_size` across re-renders.
#[hook]
pub fn use_pager<T>(items: &'static [T], page_size: usize) -> UseReducerHandle<Pager<T>>
where
    T: Filterable + 'static,
    T::Category: 'static,
{
    let pager = use_reducer(|| Pager::new(items, page_size));

    {
        let pager = pager.clone();
        use_effect_with(page_size, move |size| {
            pager.dispatch(PagerAction::PageSize(*size));
            || ()
        });
    }

    pager
}

pub struct FilterOption<C> {
    pub filter: CategoryFilter<C>,
    pub label: &'static str,
    pub count: usize,
}

pub fn filter_buttons<C>(
    options: Vec<FilterOption<C>>,
    active: CategoryFilter<C>,
    on_select: Callback<CategoryFilter<C>>,
) -> Html
where
    C: Copy + Eq + 'static,
{
    html! {
        <div class="filter-buttons" role="group" aria-label="Filter by category">
            { for options.into_iter().map(|option| {
                let selected = option.filter == active;
                let on_select = on_select.clone();
                let filter = option.filter;
                html! {
                    <button
                        type="button"
                        class={classes!("filter-button", selected.then_some("is-active"))}
                        aria-pressed={selected.to_string()}
                        onclick={Callback::from(move |_| on_select.emit(filter))}
                    >
                        { option.label }
                        <span class="filter-count">{ option.count }</span>
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub on_search: Callback<String>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <label class="search-box">
            <span class="sr-only">{ props.placeholder.clone() }</span>
            <input
                type="search"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                oninput={oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageControlsProps {
    pub current: usize,
    pub total: usize,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_go: Callback<usize>,
}

/// Hidden when everything fits on one page.
#[function_component(PageControls)]
pub fn page_controls(props: &PageControlsProps) -> Html {
    if props.total <= 1 {
        return Html::default();
    }

    let on_prev = props.on_prev.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());

    html! {
        <nav class="page-controls" aria-label="Pagination">
            <button type="button" class="page-arrow" aria-label="Previous page" onclick={on_prev}>
                { "‹" }
            </button>
            { for (0..props.total).map(|page| {
                let on_go = props.on_go.clone();
                let current = page == props.current;
                html! {
                    <button
                        type="button"
                        class={classes!("page-number", current.then_some("is-active"))}
                        aria-current={current.then_some("page")}
                        onclick={Callback::from(move |_| on_go.emit(page))}
                    >
                        { page + 1 }
                    </button>
                }
            }) }
            <button type="button" class="page-arrow" aria-label="Next page" onclick={on_next}>
                { "›" }
            </button>
        </nav>
    }
}
