//! Client option ordering and per-call configuration.

use dnbapi::{ClientOption, CompanySearchRequest, DnbClient, BASE_URL_V1, BASE_URL_V3};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn reply(transaction_id: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "transactionDetail": {"transactionID": transaction_id}
    }))
}

#[tokio::test]
async fn test_per_call_base_url_override() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/criteria"))
        .respond_with(reply("from-primary"))
        .expect(2)
        .mount(&primary)
        .await;

    Mock::given(method("POST"))
        .and(path("/search/criteria"))
        .respond_with(reply("from-secondary"))
        .expect(1)
        .mount(&secondary)
        .await;

    let client = DnbClient::new([
        ClientOption::base_url(primary.uri()),
        ClientOption::bearer_token("test-token"),
    ])
    .unwrap();
    let request = CompanySearchRequest::default();

    let first = client.criteria_search(&request).await.unwrap();
    let overridden = client
        .with_options([ClientOption::base_url(secondary.uri())])
        .unwrap()
        .criteria_search(&request)
        .await
        .unwrap();
    let again = client.criteria_search(&request).await.unwrap();

    assert_eq!(first.transaction_detail.transaction_id, "from-primary");
    assert_eq!(overridden.transaction_detail.transaction_id, "from-secondary");
    assert_eq!(again.transaction_detail.transaction_id, "from-primary");
}

#[tokio::test]
async fn test_last_bearer_token_wins() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/criteria"))
        .and(header("authorization", "Bearer second"))
        .respond_with(reply("rrt-ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = DnbClient::new([
        ClientOption::base_url(mock_server.uri()),
        ClientOption::bearer_token("first"),
        ClientOption::bearer_token("second"),
    ])
    .unwrap();

    let result = client
        .criteria_search(&CompanySearchRequest::default())
        .await
        .unwrap();
    assert_eq!(result.transaction_detail.transaction_id, "rrt-ok");
}

#[tokio::test]
async fn test_concurrent_calls_on_shared_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/criteria"))
        .respond_with(reply("rrt-shared"))
        .expect(8)
        .mount(&mock_server)
        .await;

    let client = DnbClient::new([
        ClientOption::base_url(mock_server.uri()),
        ClientOption::bearer_token("test-token"),
    ])
    .unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let request = CompanySearchRequest {
                search_term: Some(format!("term-{i}")),
                ..Default::default()
            };
            client.criteria_search(&request).await
        }));
    }

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.transaction_detail.transaction_id, "rrt-shared");
    }
}

#[test]
fn test_version_base_urls() {
    let v1 = DnbClient::new([ClientOption::base_url(BASE_URL_V1)]).unwrap();
    let v3 = v1
        .with_options([ClientOption::base_url(BASE_URL_V3)])
        .unwrap();

    assert_eq!(v1.base_url().as_str(), "https://plus.dnb.com/v1/");
    assert_eq!(v3.base_url().as_str(), "https://plus.dnb.com/v3/");
}

#[test]
fn test_caller_supplied_http_client() {
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();

    let client = DnbClient::new([
        ClientOption::http_client(http),
        ClientOption::bearer_token("tok"),
    ])
    .unwrap();
    assert!(client.has_token());
}
