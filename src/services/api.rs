use futures::try_join;

use crate::forms::api::{SuggestForm, TermForm};
use crate::index::{AutocompleteQuery, HighlightTags, SearchIndex, SuggestQuery};
use crate::services::ServiceResult;

pub const AUTOCOMPLETE_TOP: usize = 6;
pub const SUGGEST_TOP: usize = 8;

/// Top completions of the term, best first.
pub async fn autocomplete<I>(index: &I, form: TermForm) -> ServiceResult<Vec<String>>
where
    I: SearchIndex + ?Sized,
{
    let term = form.into_term()?;

    let query = AutocompleteQuery::new(term)
        .fuzzy(false)
        .top(AUTOCOMPLETE_TOP);

    let completions = index.autocomplete(query).await.map_err(|err| {
        log::error!("Failed to autocomplete: {err}");
        err
    })?;

    Ok(completions)
}

/// Documents suggested for the term, optionally fuzzy and highlighted.
///
/// Highlighted suggestions are returned as HTML fragments; everything but
/// the markup of the highlight tags is escaped.
pub async fn suggest<I>(
    index: &I,
    form: SuggestForm,
    tags: &HighlightTags,
) -> ServiceResult<Vec<String>>
where
    I: SearchIndex + ?Sized,
{
    let form = form.normalize()?;

    let mut query = SuggestQuery::new(form.term)
        .fuzzy(form.fuzzy)
        .top(SUGGEST_TOP);
    if form.highlights {
        query = query.highlight(tags.clone());
    }

    let suggestions = index.suggest(query).await.map_err(|err| {
        log::error!("Failed to fetch suggestions: {err}");
        err
    })?;

    if form.highlights {
        Ok(suggestions.iter().map(|s| ammonia::clean(s)).collect())
    } else {
        Ok(suggestions)
    }
}

/// Best completion followed by the suggestions for the same term.
///
/// The first entry is always present and empty when nothing completes the
/// term. Both lookups run concurrently; a failure of either fails the whole
/// call.
pub async fn autocomplete_and_suggest<I>(index: &I, form: TermForm) -> ServiceResult<Vec<String>>
where
    I: SearchIndex + ?Sized,
{
    let term = form.into_term()?;

    let completion = AutocompleteQuery::new(term.as_str())
        .fuzzy(false)
        .top(1);
    let suggestion = SuggestQuery::new(term.as_str())
        .fuzzy(false)
        .top(SUGGEST_TOP);

    let (completions, suggestions) =
        try_join!(index.autocomplete(completion), index.suggest(suggestion)).map_err(|err| {
            log::error!("Failed to autocomplete and suggest {term:?}: {err}");
            err
        })?;

    let mut results = Vec::with_capacity(suggestions.len() + 1);
    results.push(completions.into_iter().next().unwrap_or_default());
    results.extend(suggestions);

    Ok(results)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use mockall::predicate::function;

    use super::*;
    use crate::index::AutocompleteMode;
    use crate::index::errors::SearchIndexError;
    use crate::index::mock::MockSearchIndex;
    use crate::services::ServiceError;

    fn term(term: &str) -> TermForm {
        TermForm::new(term)
    }

    fn suggest_form(term: &str, fuzzy: bool, highlights: bool) -> SuggestForm {
        SuggestForm {
            term: term.to_string(),
            fuzzy,
            highlights,
        }
    }

    #[test]
    fn merges_completion_and_suggestions_in_order() {
        let mut index = MockSearchIndex::new();
        index
            .expect_autocomplete()
            .with(function(|q: &AutocompleteQuery| q.search == "lak" && q.top == 1))
            .returning(|_| Ok(vec!["lake view".to_string()]));
        index
            .expect_suggest()
            .with(function(|q: &SuggestQuery| {
                q.search == "lak" && q.top == 8 && !q.fuzzy && q.highlight.is_none()
            }))
            .returning(|_| Ok(vec!["lakeside inn".to_string(), "lake house".to_string()]));

        let results = block_on(autocomplete_and_suggest(&index, term("lak"))).unwrap();

        assert_eq!(results, vec!["lake view", "lakeside inn", "lake house"]);
    }

    #[test]
    fn empty_completion_keeps_first_slot() {
        let mut index = MockSearchIndex::new();
        index.expect_autocomplete().returning(|_| Ok(vec![]));
        index
            .expect_suggest()
            .returning(|_| Ok(vec!["lakeside inn".to_string()]));

        let results = block_on(autocomplete_and_suggest(&index, term("lak"))).unwrap();

        assert_eq!(results, vec!["", "lakeside inn"]);
    }

    #[test]
    fn merged_call_fails_when_either_lookup_fails() {
        let mut index = MockSearchIndex::new();
        index
            .expect_autocomplete()
            .returning(|_| Ok(vec!["lake view".to_string()]));
        index
            .expect_suggest()
            .returning(|_| Err(SearchIndexError::Unauthorized("bad key".into())));

        let result = block_on(autocomplete_and_suggest(&index, term("lak")));

        assert!(matches!(result, Err(ServiceError::SearchService(_))));
    }

    #[test]
    fn autocomplete_requests_six_contextual_completions() {
        let mut index = MockSearchIndex::new();
        index
            .expect_autocomplete()
            .with(function(|q: &AutocompleteQuery| {
                q.search == "sea"
                    && q.top == 6
                    && !q.fuzzy
                    && q.mode == AutocompleteMode::OneTermWithContext
            }))
            .times(1)
            .returning(|_| Ok(vec!["seaside".to_string(), "sea view".to_string()]));

        let results = block_on(autocomplete(&index, term(" sea "))).unwrap();

        assert_eq!(results, vec!["seaside", "sea view"]);
    }

    #[test]
    fn blank_term_is_rejected_without_remote_call() {
        let mut index = MockSearchIndex::new();
        index.expect_autocomplete().never();
        index.expect_suggest().never();

        assert!(matches!(
            block_on(autocomplete(&index, term("  "))),
            Err(ServiceError::Form(_))
        ));
        assert!(matches!(
            block_on(autocomplete_and_suggest(&index, term(""))),
            Err(ServiceError::Form(_))
        ));
        assert!(matches!(
            block_on(suggest(&index, suggest_form("", true, true), &HighlightTags::default())),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn suggest_passes_flags_and_tags() {
        let mut index = MockSearchIndex::new();
        index
            .expect_suggest()
            .with(function(|q: &SuggestQuery| {
                q.fuzzy
                    && q.top == 8
                    && q.highlight
                        == Some(HighlightTags {
                            pre: "<b>".to_string(),
                            post: "</b>".to_string(),
                        })
            }))
            .times(1)
            .returning(|_| Ok(vec!["<b>Lake</b>side Inn".to_string()]));

        let results = block_on(suggest(
            &index,
            suggest_form("lake", true, true),
            &HighlightTags::default(),
        ))
        .unwrap();

        assert_eq!(results, vec!["<b>Lake</b>side Inn"]);
    }

    #[test]
    fn highlighted_suggestions_are_sanitized() {
        let mut index = MockSearchIndex::new();
        index
            .expect_suggest()
            .returning(|_| Ok(vec!["<b>Spa</b><script>alert(1)</script>".to_string()]));

        let results = block_on(suggest(
            &index,
            suggest_form("spa", false, true),
            &HighlightTags::default(),
        ))
        .unwrap();

        assert_eq!(results, vec!["<b>Spa</b>"]);
    }

    #[test]
    fn plain_suggestions_are_returned_verbatim() {
        let mut index = MockSearchIndex::new();
        index
            .expect_suggest()
            .with(function(|q: &SuggestQuery| q.highlight.is_none() && !q.fuzzy))
            .returning(|_| Ok(vec!["Tom & Jerry's".to_string()]));

        let results = block_on(suggest(
            &index,
            suggest_form("tom", false, false),
            &HighlightTags::default(),
        ))
        .unwrap();

        assert_eq!(results, vec!["Tom & Jerry's"]);
    }
}
