//! Criteria and company list search tests.
//!
//! Uses wiremock to mock the Direct+ search endpoints.

use dnbapi::{
    ClientOption, CompanySearchRequest, DnbClient, NavigatorFacet, Operation, SortCriteria,
    ValueRange,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DnbClient {
    DnbClient::new([
        ClientOption::base_url(server.uri()),
        ClientOption::bearer_token("test-token"),
    ])
    .unwrap()
}

fn gorman_reply() -> serde_json::Value {
    serde_json::json!({
        "transactionDetail": {
            "transactionID": "rrt-0f7a1b",
            "transactionTimestamp": "2024-03-01T12:00:00.000Z",
            "inLanguage": "en-US",
            "serviceVersion": "1"
        },
        "inquiryDetail": {"searchTerm": "gorman", "countryISOAlpha2Code": "US"},
        "candidatesMatchedQuantity": 2,
        "candidatesReturnedQuantity": 2,
        "navigators": {
            "countryISOAlpha2Code": [{"query": "US", "description": "United States", "candidatesMatchedQuantity": 2}]
        },
        "searchCandidates": [
            {
                "displaySequence": 1,
                "organization": {
                    "duns": "804735132",
                    "primaryName": "Gorman Manufacturing Company, Inc.",
                    "dunsControlStatus": {"isOutOfBusiness": false},
                    "primaryAddress": {
                        "addressCountry": {"isoAlpha2Code": "US"},
                        "addressLocality": {"name": "San Francisco"}
                    }
                }
            },
            {
                "displaySequence": 2,
                "organization": {
                    "duns": "123456789",
                    "primaryName": "Gorman Shipping Co",
                    "dunsControlStatus": {"isOutOfBusiness": true}
                }
            }
        ]
    })
}

// ============================================================================
// Criteria Search
// ============================================================================

#[tokio::test]
async fn test_criteria_search_posts_request_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/criteria"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(serde_json::json!({
            "searchTerm": "gorman",
            "countryISOAlpha2Code": "US",
            "isOutOfBusiness": false,
            "yearlyRevenue": {"minimumValue": 1000000.0, "maximumValue": 50000000.0},
            "pageSize": 25,
            "sort": [{"item": "primaryName", "direction": "ascending"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gorman_reply()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = CompanySearchRequest {
        search_term: Some("gorman".to_string()),
        country_iso_alpha2_code: Some("US".to_string()),
        is_out_of_business: Some(false),
        yearly_revenue: Some(ValueRange::between(1_000_000.0, 50_000_000.0)),
        page_size: Some(25),
        sort: vec![SortCriteria::ascending("primaryName")],
        ..Default::default()
    };

    let result = client_for(&mock_server)
        .criteria_search(&request)
        .await
        .unwrap();

    assert_eq!(result.transaction_detail.transaction_id, "rrt-0f7a1b");
    assert_eq!(result.candidates_matched_quantity, Some(2));
    assert_eq!(result.search_candidates.len(), 2);

    let first = &result.search_candidates[0].organization;
    assert_eq!(first.duns, "804735132");
    assert!(!first.is_out_of_business());
    assert!(result.search_candidates[1].organization.is_out_of_business());

    assert!(matches!(
        result.navigators.get("countryISOAlpha2Code"),
        Some(NavigatorFacet::Buckets(buckets)) if buckets[0].candidates_matched_quantity == Some(2)
    ));
}

#[tokio::test]
async fn test_empty_request_sends_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/criteria"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(gorman_reply()))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server)
        .criteria_search(&CompanySearchRequest::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_criteria_search_error_is_wrapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/criteria"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "transactionDetail": {"transactionID": "rrt-err"},
            "error": {"errorCode": "10001", "errorMessage": "Insufficient search criteria"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .criteria_search(&CompanySearchRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.operation(), Some(Operation::CriteriaSearch));
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.api_message(), Some("Insufficient search criteria"));
    assert_eq!(
        err.to_string(),
        "search criteria failed: D&B API error (HTTP 400): Insufficient search criteria"
    );
}

#[tokio::test]
async fn test_non_200_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    // Only 200 counts as success
    Mock::given(method("POST"))
        .and(path("/search/criteria"))
        .respond_with(ResponseTemplate::new(202).set_body_json(gorman_reply()))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .criteria_search(&CompanySearchRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(202));
}

// ============================================================================
// Company List Search
// ============================================================================

#[tokio::test]
async fn test_company_list_search_uses_its_own_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/companyList"))
        .and(body_json(serde_json::json!({
            "dunsList": ["804735132", "123456789"],
            "familytreeRolesPlayed": [12775],
            "returnNavigators": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gorman_reply()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = CompanySearchRequest {
        duns_list: vec!["804735132".to_string(), "123456789".to_string()],
        familytree_roles_played: vec![12775],
        return_navigators: Some(true),
        ..Default::default()
    };

    let result = client_for(&mock_server)
        .company_list_search(&request)
        .await
        .unwrap();

    assert_eq!(result.transaction_detail.transaction_id, "rrt-0f7a1b");
    assert_eq!(
        result.organizations().map(|o| o.duns.as_str()).collect::<Vec<_>>(),
        vec!["804735132", "123456789"]
    );
}

#[tokio::test]
async fn test_company_list_search_error_is_wrapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/companyList"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .company_list_search(&CompanySearchRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.operation(), Some(Operation::CompanyListSearch));
    assert_eq!(err.api_message(), Some("HTTP 500"));
    assert!(err.to_string().starts_with("company list search failed: "));
}

#[tokio::test]
async fn test_malformed_reply_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/companyList"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"searchCandidates\": 5}"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .company_list_search(&CompanySearchRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.operation(), Some(Operation::CompanyListSearch));
    assert_eq!(err.status_code(), None);
}
