use hotel_search::index::azure::AzureSearchIndex;
use hotel_search::index::errors::SearchIndexError;
use hotel_search::index::{
    AutocompleteQuery, HOTEL_PROJECTION, HighlightTags, SearchIndex, SearchQuery, SuggestQuery,
};
use hotel_search::models::config::SearchConfig;
use mockito::{Matcher, Server};
use serde_json::json;

fn index_for(url: String) -> AzureSearchIndex {
    let config = SearchConfig {
        endpoint: Some(url),
        query_api_key: "query-key".to_string(),
        ..SearchConfig::default()
    };
    AzureSearchIndex::new(&config, reqwest::Client::new()).expect("valid config")
}

fn api_version() -> Matcher {
    Matcher::UrlEncoded("api-version".into(), "2020-06-30".into())
}

#[actix_web::test]
async fn search_posts_paged_query_and_reads_count() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/indexes/hotels/docs/search")
        .match_query(api_version())
        .match_header("api-key", "query-key")
        .match_body(Matcher::Json(json!({
            "search": "pool",
            "select": "HotelName,Description",
            "searchMode": "all",
            "skip": 3,
            "top": 3,
            "count": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "@odata.count": 7,
                "value": [
                    {"@search.score": 1.2, "HotelName": "Pool House", "Description": "Warm water"},
                    {"@search.score": 0.8, "HotelName": "Dry Inn", "Description": null}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let index = index_for(server.url());
    let query = SearchQuery::new("pool")
        .select(HOTEL_PROJECTION)
        .paginate(1, 3)
        .include_total_count();

    let results = index.search(query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(results.total, 7);
    assert_eq!(results.documents.len(), 2);
    assert_eq!(results.documents[0].name, "Pool House");
    assert_eq!(results.documents[1].description, None);
}

#[actix_web::test]
async fn autocomplete_sends_suggester_and_mode() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/indexes/hotels/docs/autocomplete")
        .match_query(api_version())
        .match_body(Matcher::Json(json!({
            "search": "lak",
            "suggesterName": "sg",
            "autocompleteMode": "oneTermWithContext",
            "fuzzy": false,
            "top": 6
        })))
        .with_status(200)
        .with_body(
            json!({"value": [
                {"text": "lake", "queryPlusText": "lake"},
                {"text": "lakeside", "queryPlusText": "lakeside"}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let index = index_for(server.url());
    let query = AutocompleteQuery::new("lak").top(6);

    let completions = index.autocomplete(query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(completions, vec!["lake", "lakeside"]);
}

#[actix_web::test]
async fn suggest_sends_highlight_tags() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/indexes/hotels/docs/suggest")
        .match_query(api_version())
        .match_body(Matcher::Json(json!({
            "search": "lak",
            "suggesterName": "sg",
            "fuzzy": true,
            "top": 8,
            "highlightPreTag": "<b>",
            "highlightPostTag": "</b>"
        })))
        .with_status(200)
        .with_body(json!({"value": [{"@search.text": "<b>Lake</b>side Inn", "HotelId": "1"}]}).to_string())
        .create_async()
        .await;

    let index = index_for(server.url());
    let query = SuggestQuery::new("lak")
        .fuzzy(true)
        .top(8)
        .highlight(HighlightTags::default());

    let suggestions = index.suggest(query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(suggestions, vec!["<b>Lake</b>side Inn"]);
}

#[actix_web::test]
async fn rejected_key_maps_to_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/indexes/hotels/docs/search")
        .match_query(Matcher::Any)
        .with_status(403)
        .create_async()
        .await;

    let index = index_for(server.url());
    let result = index.search(SearchQuery::new("pool")).await;

    assert!(matches!(result, Err(SearchIndexError::Unauthorized(_))));
}

#[actix_web::test]
async fn server_error_keeps_status_code() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/indexes/hotels/docs/suggest")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("service unavailable")
        .create_async()
        .await;

    let index = index_for(server.url());
    let result = index.suggest(SuggestQuery::new("lak")).await;

    match result {
        Err(SearchIndexError::Status { code, message }) => {
            assert_eq!(code, 503);
            assert_eq!(message, "service unavailable");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[actix_web::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/indexes/hotels/docs/autocomplete")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let index = index_for(server.url());
    let result = index.autocomplete(AutocompleteQuery::new("lak")).await;

    assert!(matches!(result, Err(SearchIndexError::Decode(_))));
}
