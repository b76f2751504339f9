use std::time::Duration;

use glamping_admin::list_controller::{ListController, ViewMode};
use glamping_admin::FailureKind;
use glamping_api::types::Faq;
use glamping_api::{Client, FilterMap};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn faq_page(current: u32, total: u32) -> String {
    serde_json::json!({
        "faqs": [
            { "id": current, "question": format!("Question {}", current), "answer": "Yes" }
        ],
        "currentPage": current,
        "totalPages": total
    })
    .to_string()
}

async fn mount_page(server: &MockServer, page: u32, total: u32, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/faqs"))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(faq_page(page, total))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn stale_first_page_is_discarded() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, 3, Duration::from_millis(300)).await;
    mount_page(&mock_server, 2, 3, Duration::ZERO).await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let controller: ListController<Faq, Client> = ListController::new(client);

    let (first, second) = tokio::join!(
        controller.fetch(1, FilterMap::new()),
        controller.fetch(2, FilterMap::new())
    );

    assert!(!first, "page 1 resolved last and must be dropped");
    assert!(second);
    assert_eq!(controller.current_page(), 2);
    assert_eq!(controller.items()[0].question, "Question 2");
    assert_eq!(controller.mode(), ViewMode::List);
}

#[tokio::test]
async fn filters_are_forwarded_and_kept_across_pages() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/faqs"))
        .and(query_param("page", "1"))
        .and(query_param("question", "pets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(faq_page(1, 2)))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/faqs"))
        .and(query_param("page", "2"))
        .and(query_param("question", "pets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(faq_page(2, 2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let controller: ListController<Faq, Client> = ListController::new(client);
    let filters: FilterMap = [("question", "pets")].into_iter().collect();

    assert!(controller.apply_filters(filters).await);
    assert!(controller.next_page().await);
    assert!(!controller.next_page().await);
    assert_eq!(controller.current_page(), 2);
}

#[tokio::test]
async fn server_error_is_classified() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/faqs"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"message":"Forbidden"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let controller: ListController<Faq, Client> = ListController::new(client);

    assert!(!controller.fetch(1, FilterMap::new()).await);
    assert_eq!(controller.mode(), ViewMode::Error);
    assert_eq!(
        controller.failure(),
        Some(FailureKind::Business {
            status: 403,
            message: "Forbidden".to_string()
        })
    );
}

#[tokio::test]
async fn empty_collection_is_a_single_page() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/faqs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"faqs":[],"currentPage":0,"totalPages":0}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let controller: ListController<Faq, Client> = ListController::new(client);

    assert!(controller.fetch(1, FilterMap::new()).await);
    assert!(controller.items().is_empty());
    assert!(!controller.has_previous());
    assert!(!controller.has_next());
}
