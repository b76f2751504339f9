use glamping_api::payload::FaqPayload;
use glamping_api::types::{Faq, Glamping, SignInRequest, StatisticsStep, User};
use glamping_api::{Client, Error, ListQuery, StatisticsQuery};
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn list_glampings_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("glampings.json");

    Mock::given(method("GET"))
        .and(path("/glampings"))
        .and(query_param("page", "2"))
        .and(query_param("status", "ACTIVE"))
        .and(header("accept-language", "es"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri())
        .unwrap()
        .with_locale("es")
        .with_token("secret");
    let query = ListQuery::default()
        .with_page(2)
        .with_filter("status", "ACTIVE");
    let result = client.list::<Glamping>(&query).await;
    assert!(result.is_ok());

    let page = result.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.items[0].title, "Geodesic Dome");
}

#[tokio::test]
async fn list_without_token_sends_no_authorization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header_regex("authorization", ".+"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("users.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    assert!(!client.is_authenticated());
    let page = client.list::<User>(&ListQuery::default()).await.unwrap();
    assert_eq!(page.items[0].email, "ana@example.com");
}

#[tokio::test]
async fn list_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/faqs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.list::<Faq>(&ListQuery::default()).await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        _ => panic!("expected HttpStatus error"),
    }
}

#[tokio::test]
async fn long_error_body_is_kept_whole() {
    let mock_server = MockServer::start().await;
    let body = format!(r#"{{"message":"{}"}}"#, "x".repeat(3000));

    Mock::given(method("GET"))
        .and(path("/faqs"))
        .respond_with(ResponseTemplate::new(400).set_body_string(body.clone()))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    match client.list::<Faq>(&ListQuery::default()).await {
        Err(Error::HttpStatus { status, body: kept }) => {
            assert_eq!(status, 400);
            assert_eq!(kept, body);
        }
        _ => panic!("expected HttpStatus error"),
    }
}

#[tokio::test]
async fn list_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/faqs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.list::<Faq>(&ListQuery::default()).await;
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let client = Client::with_base_url("http://127.0.0.1:1").unwrap();
    let result = client.list::<Faq>(&ListQuery::default()).await;
    assert!(matches!(result, Err(Error::Network(_))));
}

#[tokio::test]
async fn create_faq_posts_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/faqs"))
        .and(body_json(serde_json::json!({
            "question": "Are pets allowed?",
            "answer": "Only in cabins."
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(r#"{"message":"FAQ created"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let payload = FaqPayload {
        question: "Are pets allowed?".to_string(),
        answer: "Only in cabins.".to_string(),
    };
    let resp = client.create(&payload).await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("FAQ created"));
}

#[tokio::test]
async fn update_faq_puts_to_record_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/faqs/12"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let payload = FaqPayload {
        question: "Check-in time?".to_string(),
        answer: "From 3pm.".to_string(),
    };
    let resp = client.update(12, &payload).await.unwrap();
    assert!(resp.message.is_none());
}

#[tokio::test]
async fn delete_enable_disable_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/glampings/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/glampings/7/enable"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/3/disable"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    client.delete::<Glamping>(7).await.unwrap();
    client.enable::<Glamping>(7).await.unwrap();
    client.disable::<User>(3).await.unwrap();
}

#[tokio::test]
async fn sign_in_returns_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .and(body_json(serde_json::json!({
            "email": "ana@example.com",
            "password": "Secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("session.json")))
        .mount(&mock_server)
        .await;

    let mut client = Client::with_base_url(&mock_server.uri()).unwrap();
    let session = client
        .sign_in(&SignInRequest {
            email: "ana@example.com".to_string(),
            password: "Secret123".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(session.user.id, 1);
    client.set_token(Some(session.token));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn sign_in_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message":"Invalid credentials"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client
        .sign_in(&SignInRequest {
            email: "ana@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    assert_eq!(result.unwrap_err().status(), Some(401));
}

#[tokio::test]
async fn statistics_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/statistics/net-sales"))
        .and(query_param("step", "year"))
        .and(query_param("type", "period"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("net_sales.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/statistics/reserve-quantity"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("reserve_quantity.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let query = StatisticsQuery::default().with_step(StatisticsStep::Year);
    let sales = client.net_sales(&query).await.unwrap();
    assert_eq!(sales.len(), 3);
    let quantities = client.reserve_quantity(&query).await.unwrap();
    assert_eq!(quantities.len(), 2);
}
