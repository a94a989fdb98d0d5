use serde_json::{json, Value};
use wiki_time_travel::config::Config;
use wiki_time_travel::RevisionClient;
use wiremock::MockServer;

/// Configuration that routes every language edition to the mock server
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.site.endpoint_override = Some(server.uri());
    config
}

pub fn client_for(server: &MockServer) -> RevisionClient {
    RevisionClient::new(&config_for(server)).expect("Failed to build client")
}

/// A formatversion=2 revisions response holding one revision
pub fn revisions_body(title: &str, revid: u64, timestamp: &str) -> Value {
    json!({
        "batchcomplete": true,
        "query": {
            "pages": [{
                "pageid": 9228,
                "ns": 0,
                "title": title,
                "revisions": [{"revid": revid, "parentid": 0, "timestamp": timestamp}]
            }]
        }
    })
}

/// A formatversion=2 response for a page that does not exist
pub fn missing_page_body(title: &str) -> Value {
    json!({
        "batchcomplete": true,
        "query": {"pages": [{"ns": 0, "title": title, "missing": true}]}
    })
}
