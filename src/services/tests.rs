//! Tests for the resource services

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::pagination::{ListOperation, ListOperationExt, ListOptions};
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMESTAMP: &str = "2023-01-16T22:08:07Z";

fn client_for(server: &MockServer) -> Client {
    Client::with_config(
        ClientConfig::builder()
            .base_url(server.uri())
            .access_token("test-token")
            .build(),
    )
}

fn domain_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "account_id": 1010,
        "registrant_id": null,
        "name": name,
        "unicode_name": name,
        "state": "hosted",
        "auto_renew": false,
        "private_whois": false,
        "expires_at": null,
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

fn record_json(id: u64, name: &str, record_type: &str, content: &str) -> Value {
    json!({
        "id": id,
        "zone_id": "example.com",
        "parent_id": null,
        "name": name,
        "content": content,
        "ttl": 3600,
        "priority": null,
        "type": record_type,
        "regions": ["global"],
        "system_record": false,
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

fn page_json(data: Vec<Value>, current_page: u64, total_pages: u64, total_entries: u64) -> Value {
    json!({
        "data": data,
        "pagination": {
            "current_page": current_page,
            "per_page": 2,
            "total_entries": total_entries,
            "total_pages": total_pages
        }
    })
}

async fn mount_domain_pages(server: &MockServer) {
    let pages = [
        vec![domain_json(1, "a.com"), domain_json(2, "b.com")],
        vec![domain_json(3, "c.com"), domain_json(4, "d.com")],
        vec![domain_json(5, "e.com")],
    ];

    for (index, data) in pages.into_iter().enumerate() {
        let page = index as u64 + 1;
        Mock::given(method("GET"))
            .and(path("/v2/1010/domains"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(data, page, 3, 5)))
            .expect(1)
            .mount(server)
            .await;
    }
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn test_segment_encoding() {
    assert_eq!(segment("example.com"), "example.com");
    assert_eq!(segment(1010), "1010");
    assert_eq!(segment("a b/c"), "a%20b%2Fc");
    assert_eq!(segment("x+y"), "x%2By");
}

#[test]
fn test_list_endpoint_paths() {
    let client = Client::new("token");

    assert_eq!(client.domains().list_domains(1010).path(), "/1010/domains");
    assert_eq!(
        client.zones().list_zone_records("1010", "example.com").path(),
        "/1010/zones/example.com/records"
    );
    assert_eq!(
        client.certificates().list_certificates(1, "ex ample.com").path(),
        "/1/domains/ex%20ample.com/certificates"
    );
    assert_eq!(client.tlds().list_tlds().path(), "/tlds");
    assert_eq!(client.billing().list_charges(7).path(), "/7/billing/charges");
    assert_eq!(client.contacts().list_contacts(7).path(), "/7/contacts");
    assert_eq!(client.webhooks().list_webhooks(7).path(), "/7/webhooks");
    assert_eq!(client.zones().list_zones(7).path(), "/7/zones");
}

// ============================================================================
// Identity / accounts
// ============================================================================

#[tokio::test]
async fn test_whoami() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/whoami"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "user": null,
                "account": {
                    "id": 1,
                    "email": "example-account@example.com",
                    "plan_identifier": "teams-v1-monthly",
                    "created_at": TIMESTAMP,
                    "updated_at": TIMESTAMP
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let whoami = client.identity().whoami().await.unwrap().data;

    assert!(whoami.user.is_none());
    let account = whoami.account.unwrap();
    assert_eq!(account.id, 1);
    assert_eq!(account.plan_identifier.as_deref(), Some("teams-v1-monthly"));
}

#[tokio::test]
async fn test_list_accounts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 123, "email": "john@example.com", "created_at": TIMESTAMP, "updated_at": TIMESTAMP},
                {"id": 456, "email": "ops@example.com", "created_at": TIMESTAMP, "updated_at": TIMESTAMP}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let accounts = client.accounts().list_accounts().await.unwrap().data;

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[1].email, "ops@example.com");
}

// ============================================================================
// Domains
// ============================================================================

#[tokio::test]
async fn test_list_domains_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains"))
        .and(query_param("sort", "name:asc"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![domain_json(1, "example-alpha.com")],
            1,
            1,
            1,
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .domains()
        .list_domains(1010)
        .fetch_page(ListOptions::new().sort("name:asc").page(1))
        .await
        .unwrap();

    assert_eq!(page.data[0].name, "example-alpha.com");
    assert_eq!(page.pagination.total_entries, 1);
}

#[tokio::test]
async fn test_collect_all_domains() {
    let server = MockServer::start().await;
    mount_domain_pages(&server).await;

    let client = client_for(&server);
    let domains = client
        .domains()
        .list_domains(1010)
        .collect_all(ListOptions::new())
        .await
        .unwrap();

    let names: Vec<&str> = domains.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a.com", "b.com", "c.com", "d.com", "e.com"]);
}

#[tokio::test]
async fn test_iterate_all_domains() {
    let server = MockServer::start().await;
    mount_domain_pages(&server).await;

    let client = client_for(&server);
    let endpoint = client.domains().list_domains(1010);
    let ids: Vec<u64> = endpoint
        .iterate_all(ListOptions::new())
        .map_ok(|domain| domain.id)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_get_domain_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/domains/missing.com"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Domain `missing.com` not found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.domains().get_domain(1010, "missing.com").await;

    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn test_create_and_delete_domain() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/1010/domains"))
        .and(body_json(json!({"name": "example-beta.com"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": domain_json(181_985, "example-beta.com")})),
        )
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/1010/domains/example-beta.com"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .domains()
        .create_domain(1010, &DomainAttributes::new("example-beta.com"))
        .await
        .unwrap()
        .data;
    assert_eq!(created.id, 181_985);

    client
        .domains()
        .delete_domain(1010, "example-beta.com")
        .await
        .unwrap();
}

// ============================================================================
// Zones
// ============================================================================

#[tokio::test]
async fn test_list_zone_records_with_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/zones/example.com/records"))
        .and(query_param("type", "A"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![
                record_json(1, "", "A", "1.2.3.4"),
                record_json(2, "www", "A", "1.2.3.5"),
            ],
            1,
            1,
            2,
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let records = client
        .zones()
        .list_zone_records(1010, "example.com")
        .collect_all(ListOptions::new().filter("type", "A"))
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "www");
    assert_eq!(records[0].record_type, "A");
    assert_eq!(records[0].regions, vec!["global".to_string()]);
}

#[tokio::test]
async fn test_create_zone_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/1010/zones/example.com/records"))
        .and(body_json(json!({
            "name": "mail",
            "type": "MX",
            "content": "mx.example.com",
            "ttl": 600,
            "priority": 10
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": record_json(64, "mail", "MX", "mx.example.com")
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let attributes = ZoneRecordAttributes::new("mail", "MX", "mx.example.com")
        .ttl(600)
        .priority(10);
    let record = client
        .zones()
        .create_zone_record(1010, "example.com", &attributes)
        .await
        .unwrap()
        .data;

    assert_eq!(record.id, 64);
    assert_eq!(record.content, "mx.example.com");
}

#[tokio::test]
async fn test_update_zone_record_sends_only_changes() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v2/1010/zones/example.com/records/5"))
        .and(body_json(json!({"content": "9.9.9.9"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": record_json(5, "", "A", "9.9.9.9")
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = ZoneRecordUpdate {
        content: Some("9.9.9.9".to_string()),
        ..ZoneRecordUpdate::default()
    };
    let record = client
        .zones()
        .update_zone_record(1010, "example.com", 5, &update)
        .await
        .unwrap()
        .data;

    assert_eq!(record.content, "9.9.9.9");
}

#[tokio::test]
async fn test_create_zone_record_validation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/1010/zones/example.com/records"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Validation failed",
            "errors": {"content": ["can't be blank"]}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .zones()
        .create_zone_record(1010, "example.com", &ZoneRecordAttributes::new("", "A", ""))
        .await;

    match result {
        Err(Error::Request {
            status: 400,
            message,
            errors: Some(errors),
        }) => {
            assert_eq!(message, "Validation failed");
            assert_eq!(errors["content"][0], "can't be blank");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

// ============================================================================
// Registrar / TLDs / webhooks / billing
// ============================================================================

#[tokio::test]
async fn test_check_domain() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/registrar/domains/ruby.codes/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"domain": "ruby.codes", "available": true, "premium": true}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let check = client
        .registrar()
        .check_domain(1010, "ruby.codes")
        .await
        .unwrap()
        .data;

    assert!(check.available);
    assert!(check.premium);
}

#[tokio::test]
async fn test_register_domain() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/1010/registrar/domains/example.com/registrations"))
        .and(body_json(json!({"registrant_id": 2, "auto_renew": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "id": 1,
                "domain_id": 999,
                "registrant_id": 2,
                "period": 1,
                "state": "new",
                "auto_renew": true,
                "whois_privacy": false,
                "created_at": TIMESTAMP,
                "updated_at": TIMESTAMP
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let attributes = RegistrationAttributes {
        registrant_id: 2,
        auto_renew: Some(true),
        ..RegistrationAttributes::default()
    };
    let registration = client
        .registrar()
        .register_domain(1010, "example.com", &attributes)
        .await
        .unwrap()
        .data;

    assert_eq!(registration.domain_id, 999);
    assert_eq!(registration.state, "new");
}

#[tokio::test]
async fn test_domain_delegation() {
    let server = MockServer::start().await;
    let name_servers = vec!["ns1.dnsimple.com".to_string(), "ns2.dnsimple.com".to_string()];

    Mock::given(method("GET"))
        .and(path("/v2/1010/registrar/domains/example.com/delegation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": ["ns1.example.net"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/1010/registrar/domains/example.com/delegation"))
        .and(body_json(json!(["ns1.dnsimple.com", "ns2.dnsimple.com"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": ["ns1.dnsimple.com", "ns2.dnsimple.com"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let registrar = client.registrar();

    let current = registrar
        .get_domain_delegation(1010, "example.com")
        .await
        .unwrap()
        .data;
    assert_eq!(current, vec!["ns1.example.net".to_string()]);

    let changed = registrar
        .change_domain_delegation(1010, "example.com", &name_servers)
        .await
        .unwrap()
        .data;
    assert_eq!(changed, name_servers);
}

#[tokio::test]
async fn test_get_tld() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/tlds/com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "tld": "com",
                "tld_type": 1,
                "whois_privacy": true,
                "auto_renew_only": false,
                "idn": true,
                "minimum_registration": 1,
                "registration_enabled": true,
                "renewal_enabled": true,
                "transfer_enabled": true,
                "dnssec_interface_type": "ds"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tld = client.tlds().get_tld("com").await.unwrap().data;

    assert_eq!(tld.tld, "com");
    assert_eq!(tld.dnssec_interface_type.as_deref(), Some("ds"));
}

#[tokio::test]
async fn test_webhooks_roundtrip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "url": "https://webhook.test"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/1010/webhooks"))
        .and(body_json(json!({"url": "https://webhook.test/new"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 2, "url": "https://webhook.test/new"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    // unpaginated body: traversal stops after one page
    let hooks = client
        .webhooks()
        .list_webhooks(1010)
        .collect_all(ListOptions::new())
        .await
        .unwrap();
    assert_eq!(hooks, vec![Webhook { id: 1, url: "https://webhook.test".to_string() }]);

    let created = client
        .webhooks()
        .create_webhook(1010, &WebhookAttributes::new("https://webhook.test/new"))
        .await
        .unwrap()
        .data;
    assert_eq!(created.id, 2);
}

#[tokio::test]
async fn test_list_charges_page_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/billing/charges"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![json!({
                "invoiced_at": TIMESTAMP,
                "total_amount": "14.50",
                "balance_amount": "0.00",
                "reference": "1-2",
                "state": "collected",
                "items": [{"description": "Register bubble-registered.com", "amount": "14.50"}]
            })],
            1,
            2,
            2,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/1010/billing/charges"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Authentication failed"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let endpoint = client.billing().list_charges(1010);

    let mut stream = endpoint.iterate_all(ListOptions::new().filter("start_date", "2023-01-01"));
    let first = stream.try_next().await.unwrap().unwrap();
    assert_eq!(first.items[0].amount, "14.50");
    assert!(matches!(
        stream.try_next().await,
        Err(Error::Authentication { .. })
    ));

    let eager = endpoint.collect_all(ListOptions::new()).await;
    assert!(matches!(eager, Err(Error::Authentication { .. })));
}
