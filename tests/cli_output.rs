//! CLI output formatting tests.
//!
//! Covers JSON output with `--json` and the pretty-print default.

use dnbapi::{CompanySearch, ContactSearch, PrettyPrint, TypeaheadSearch};

fn make_company_search() -> CompanySearch {
    serde_json::from_value(serde_json::json!({
        "transactionDetail": {"transactionID": "rrt-out-1"},
        "candidatesMatchedQuantity": 42,
        "candidatesReturnedQuantity": 2,
        "navigators": {
            "countryISOAlpha2Code": [{"query": "US", "candidatesMatchedQuantity": 42}]
        },
        "searchCandidates": [
            {
                "displaySequence": 1,
                "organization": {
                    "duns": "804735132",
                    "primaryName": "Gorman Manufacturing Company, Inc.",
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
    }))
    .unwrap()
}

fn make_contact_search() -> ContactSearch {
    serde_json::from_value(serde_json::json!({
        "transactionDetail": {"transactionID": "rrt-out-2"},
        "candidatesMatchedQuantity": 3,
        "candidatesReturnedQuantity": 1,
        "links": {"next": "/search/contact?pageNumber=2&pageSize=1"},
        "searchCandidates": [{
            "displaySequence": 1,
            "contact": {
                "id": "gm-ceo-1",
                "givenName": "Leslie",
                "familyName": "Smith",
                "email": "leslie.smith@example.com",
                "organization": {"primaryName": "Gorman Manufacturing"},
                "jobTitles": [{"title": "Chief Executive Officer"}]
            }
        }]
    }))
    .unwrap()
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_uses_vendor_keys() {
    let json_output = serde_json::to_string_pretty(&make_company_search()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed["transactionDetail"]["transactionID"], "rrt-out-1");
    assert_eq!(parsed["candidatesMatchedQuantity"], 42);
    assert_eq!(
        parsed["searchCandidates"][0]["organization"]["duns"],
        "804735132"
    );
}

#[test]
fn test_json_output_omits_absent_fields() {
    let json_output = serde_json::to_string(&make_contact_search()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();

    let contact = &parsed["searchCandidates"][0]["contact"];
    assert!(contact.get("middleName").is_none());
    assert!(contact.get("telephone").is_none());
    assert!(parsed.get("navigators").is_none());
}

// ============================================================================
// Pretty-Print Tests
// ============================================================================

#[test]
fn test_default_output_is_not_json() {
    let pretty_output = make_company_search().pretty_print();

    let parse_result: Result<serde_json::Value, _> = serde_json::from_str(&pretty_output);
    assert!(
        parse_result.is_err(),
        "Default output should NOT be valid JSON"
    );
}

#[test]
fn test_company_search_pretty_print_shows_candidates() {
    let output = make_company_search().pretty_print();

    assert!(output.contains("Transaction:    rrt-out-1"));
    assert!(output.contains("Matched:        42"));
    assert!(output.contains("804735132  Gorman Manufacturing Company, Inc. (San Francisco, US)"));
    assert!(output.contains("123456789  Gorman Shipping Co [out of business]"));
    assert!(output.contains("Navigators:     countryISOAlpha2Code"));
}

#[test]
fn test_typeahead_pretty_print_header() {
    let result: TypeaheadSearch = serde_json::from_value(serde_json::json!({
        "transactionDetail": {"transactionID": "rrt-ta"},
        "candidatesMatchedQuantity": 0,
        "candidatesReturnedQuantity": 0
    }))
    .unwrap();

    let output = result.pretty_print();
    assert!(output.starts_with("Typeahead search\n"));
    assert!(output.contains("Matched:        0"));
}

#[test]
fn test_contact_search_pretty_print_shows_contact_line() {
    let output = make_contact_search().pretty_print();

    assert!(output.starts_with("Contact search"));
    assert!(output.contains(
        "gm-ceo-1  Leslie Smith, Chief Executive Officer <leslie.smith@example.com> @ Gorman Manufacturing"
    ));
    assert!(output.contains("Next page:      /search/contact?pageNumber=2&pageSize=1"));
}
