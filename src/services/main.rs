use crate::domain::paging::PagingDirective;
use crate::dto::main::SearchPageData;
use crate::forms::main::{PagingForm, SearchForm};
use crate::index::{HOTEL_PROJECTION, SearchIndex, SearchQuery};
use crate::pagination::{Paginated, PagingSettings, plan};
use crate::services::{ServiceError, ServiceResult};
use crate::session::PagingSession;

/// Runs one paged query and plans the page window around `page`.
pub async fn run_query<I>(
    index: &I,
    settings: &PagingSettings,
    search_text: &str,
    page: usize,
    previous_left_most: usize,
) -> ServiceResult<SearchPageData>
where
    I: SearchIndex + ?Sized,
{
    let query = SearchQuery::new(search_text)
        .select(HOTEL_PROJECTION)
        .paginate(page, settings.results_per_page)
        .include_total_count();

    let results = index.search(query).await.map_err(|err| {
        log::error!("Failed to search for {search_text:?} (page {page}): {err}");
        err
    })?;

    let window = plan(page, previous_left_most, results.total, settings);
    log::debug!(
        "Search {search_text:?} matched {} documents, window {window:?}",
        results.total
    );

    Ok(SearchPageData {
        results: Paginated::new(results.documents, results.total, window),
        search_text: search_text.to_string(),
    })
}

/// Handles a submission of the search box and starts a new paging sequence.
pub async fn submit_search<I, S>(
    index: &I,
    session: &S,
    settings: &PagingSettings,
    form: SearchForm,
) -> ServiceResult<SearchPageData>
where
    I: SearchIndex + ?Sized,
    S: PagingSession + ?Sized,
{
    let search_text = form.into_search_text()?;

    let data = run_query(index, settings, &search_text, 0, 0).await?;
    session.store_paging_state(&data.paging_state())?;

    Ok(data)
}

/// Moves to another page of the query stored in the session.
pub async fn change_page<I, S>(
    index: &I,
    session: &S,
    settings: &PagingSettings,
    form: PagingForm,
) -> ServiceResult<SearchPageData>
where
    I: SearchIndex + ?Sized,
    S: PagingSession + ?Sized,
{
    let directive: PagingDirective = form.paging.parse()?;

    let state = session
        .take_paging_state()?
        .ok_or(ServiceError::MissingSessionState)?;

    let page = directive.resolve(state.page);
    let data = run_query(
        index,
        settings,
        &state.search_text,
        page,
        state.left_most_page,
    )
    .await?;
    session.store_paging_state(&data.paging_state())?;

    Ok(data)
}
