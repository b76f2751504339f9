//! Paginated list state for one resource page.
//!
//! A controller owns the current [`ResourcePage`], the [`ViewMode`], the
//! selected record and the last issued query. Every fetch takes a new
//! generation number; when a response arrives after a newer fetch was
//! issued it is discarded, so the page shown is always the one requested
//! last. State sits behind a mutex so overlapping fetches can be awaited
//! from a single task.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use glamping_api::types::{Resource, ResourcePage};
use glamping_api::{Client, Error, FilterMap, ListQuery};

use crate::dispatcher::{classify_error, FailureKind};

/// What the page is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Loading,
    View,
    Edit,
    Add,
    /// The last fetch failed; [`ListController::retry`] re-issues it.
    Error,
}

/// Backend a controller loads pages from.
pub trait ResourceSource<T: Resource> {
    fn fetch_page(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = Result<ResourcePage<T>, Error>> + Send;
}

impl<T: Resource + Send> ResourceSource<T> for Client {
    async fn fetch_page(&self, query: &ListQuery) -> Result<ResourcePage<T>, Error> {
        self.list::<T>(query).await
    }
}

struct State<T> {
    page: ResourcePage<T>,
    mode: ViewMode,
    selected: Option<T>,
    query: ListQuery,
    generation: u64,
    failure: Option<FailureKind>,
}

pub struct ListController<T, S> {
    source: S,
    state: Mutex<State<T>>,
}

impl<T, S> ListController<T, S>
where
    T: Resource + Clone,
    S: ResourceSource<T>,
{
    /// A new controller shows `Loading` until its first fetch settles.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(State {
                page: ResourcePage::default(),
                mode: ViewMode::Loading,
                selected: None,
                query: ListQuery::default(),
                generation: 0,
                failure: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads `page` with `filters`. Returns `true` when the response was
    /// applied; a failed or superseded fetch returns `false`.
    pub async fn fetch(&self, page: u32, filters: FilterMap) -> bool {
        let (generation, query) = {
            let mut state = self.lock();
            state.generation += 1;
            state.mode = ViewMode::Loading;
            state.query = ListQuery::default().with_page(page).with_filters(filters);
            (state.generation, state.query.clone())
        };
        tracing::debug!(
            "fetch {} page {} (generation {})",
            T::BASE_PATH,
            query.page,
            generation
        );

        let result = self.source.fetch_page(&query).await;

        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!(
                "discarding stale {} page {} (generation {}, latest {})",
                T::BASE_PATH,
                query.page,
                generation,
                state.generation
            );
            return false;
        }
        match result {
            Ok(page) => {
                state.page = page;
                state.mode = ViewMode::List;
                state.failure = None;
                true
            }
            Err(err) => {
                tracing::warn!("failed to fetch {} page {}: {}", T::BASE_PATH, query.page, err);
                state.failure = Some(classify_error(&err));
                state.mode = ViewMode::Error;
                false
            }
        }
    }

    /// Re-issues the last requested page with the same filters.
    pub async fn retry(&self) -> bool {
        let query = self.lock().query.clone();
        self.fetch(query.page, query.filters).await
    }

    /// Loads page 1 keeping the current filters.
    pub async fn refresh_first_page(&self) -> bool {
        let filters = self.filters();
        self.fetch(1, filters).await
    }

    /// Applies a new filter set, starting again from page 1.
    pub async fn apply_filters(&self, filters: FilterMap) -> bool {
        self.fetch(1, filters).await
    }

    pub async fn next_page(&self) -> bool {
        let (current, can_move, filters) = {
            let state = self.lock();
            (
                state.page.current_page,
                state.page.has_next(),
                state.query.filters.clone(),
            )
        };
        if !can_move {
            return false;
        }
        self.fetch(current + 1, filters).await
    }

    pub async fn previous_page(&self) -> bool {
        let (current, can_move, filters) = {
            let state = self.lock();
            (
                state.page.current_page,
                state.page.has_previous(),
                state.query.filters.clone(),
            )
        };
        if !can_move {
            return false;
        }
        self.fetch(current - 1, filters).await
    }

    pub fn has_previous(&self) -> bool {
        self.lock().page.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.lock().page.has_next()
    }

    pub fn current_page(&self) -> u32 {
        self.lock().page.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.lock().page.total_pages
    }

    pub fn items(&self) -> Vec<T> {
        self.lock().page.items.clone()
    }

    pub fn page(&self) -> ResourcePage<T> {
        self.lock().page.clone()
    }

    pub fn mode(&self) -> ViewMode {
        self.lock().mode
    }

    pub fn selected(&self) -> Option<T> {
        self.lock().selected.clone()
    }

    pub fn filters(&self) -> FilterMap {
        self.lock().query.filters.clone()
    }

    pub fn failure(&self) -> Option<FailureKind> {
        self.lock().failure.clone()
    }

    pub fn open_view(&self, item: T) {
        let mut state = self.lock();
        state.selected = Some(item);
        state.mode = ViewMode::View;
    }

    pub fn open_edit(&self, item: T) {
        let mut state = self.lock();
        state.selected = Some(item);
        state.mode = ViewMode::Edit;
    }

    pub fn open_add(&self) {
        let mut state = self.lock();
        state.selected = None;
        state.mode = ViewMode::Add;
    }

    pub fn back_to_list(&self) {
        let mut state = self.lock();
        state.selected = None;
        state.mode = ViewMode::List;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use glamping_api::types::Faq;

    use super::*;

    /// Replies from a fixed script, one per fetch.
    struct Scripted {
        replies: Mutex<VecDeque<Result<ResourcePage<Faq>, Error>>>,
        seen: Mutex<Vec<ListQuery>>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<ResourcePage<Faq>, Error>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<ListQuery> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl ResourceSource<Faq> for Scripted {
        async fn fetch_page(&self, query: &ListQuery) -> Result<ResourcePage<Faq>, Error> {
            self.seen.lock().unwrap().push(query.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Network("script exhausted".to_string())))
        }
    }

    fn page(current: u32, total: u32) -> ResourcePage<Faq> {
        ResourcePage {
            items: vec![Faq {
                id: i64::from(current),
                question: format!("q{}", current),
                answer: "a".to_string(),
            }],
            current_page: current,
            total_pages: total,
        }
    }

    #[tokio::test]
    async fn fetch_success_moves_to_list() {
        let controller = ListController::new(Scripted::new(vec![Ok(page(1, 3))]));
        assert_eq!(controller.mode(), ViewMode::Loading);
        assert!(controller.fetch(1, FilterMap::new()).await);
        assert_eq!(controller.mode(), ViewMode::List);
        assert_eq!(controller.items().len(), 1);
        assert!(!controller.has_previous());
        assert!(controller.has_next());
    }

    #[tokio::test]
    async fn pagination_guards_do_not_fetch() {
        let source = Scripted::new(vec![Ok(page(1, 1))]);
        let controller = ListController::new(source);
        controller.fetch(1, FilterMap::new()).await;
        assert!(!controller.next_page().await);
        assert!(!controller.previous_page().await);
        assert_eq!(controller.source.seen().len(), 1);
    }

    #[tokio::test]
    async fn next_page_keeps_filters() {
        let filters: FilterMap = [("question", "pets")].into_iter().collect();
        let controller =
            ListController::new(Scripted::new(vec![Ok(page(1, 2)), Ok(page(2, 2))]));
        controller.fetch(1, filters.clone()).await;
        assert!(controller.next_page().await);
        assert_eq!(controller.current_page(), 2);
        assert!(!controller.has_next());
        let seen = controller.source.seen();
        assert_eq!(seen[1].page, 2);
        assert_eq!(seen[1].filters, filters);
    }

    #[tokio::test]
    async fn failure_enters_error_mode_and_retry_recovers() {
        let controller = ListController::new(Scripted::new(vec![
            Err(Error::Network("refused".to_string())),
            Ok(page(3, 4)),
        ]));
        assert!(!controller.fetch(3, FilterMap::new()).await);
        assert_eq!(controller.mode(), ViewMode::Error);
        assert_eq!(controller.failure(), Some(FailureKind::Network));

        assert!(controller.retry().await);
        assert_eq!(controller.mode(), ViewMode::List);
        assert_eq!(controller.current_page(), 3);
        assert!(controller.failure().is_none());
        assert_eq!(controller.source.seen()[1].page, 3);
    }

    #[tokio::test]
    async fn view_transitions() {
        let controller = ListController::new(Scripted::new(vec![]));
        let faq = page(1, 1).items.remove(0);

        controller.open_view(faq.clone());
        assert_eq!(controller.mode(), ViewMode::View);
        assert_eq!(controller.selected(), Some(faq.clone()));

        controller.open_edit(faq);
        assert_eq!(controller.mode(), ViewMode::Edit);

        controller.open_add();
        assert_eq!(controller.mode(), ViewMode::Add);
        assert!(controller.selected().is_none());

        controller.back_to_list();
        assert_eq!(controller.mode(), ViewMode::List);
    }
}
