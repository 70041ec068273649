// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the complete Veranda pipeline.
//!
//! Each test wires a real session to the real delivery clients against
//! wiremock collaborators, with configuration loaded the same way the
//! binary loads it. Tests are independent and order-insensitive.

use std::sync::Arc;

use serde_json::json;
use veranda_core::{CrmIntake, LeadStore, SubmissionResult};
use veranda_delivery::{CrmClient, LeadStoreClient};
use veranda_engine::{ChatSession, ChatStep, Script, SessionOptions};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(crm_uri: &str, store_uri: &str) -> veranda_config::VerandaConfig {
    let toml = format!(
        r#"
[concierge]
name = "veranda-e2e"
source = "chat"

[crm]
endpoint = "{crm_uri}"
portal_id = "50401797"
form_id = "ec59b695"

[lead_store]
endpoint = "{store_uri}/chat-submit"
api_token = "store-token"

[fallback]
whatsapp_number = "5511999998888"
"#
    );
    veranda_config::load_and_validate_str(&toml).expect("e2e config is valid")
}

fn open_session(
    config: &veranda_config::VerandaConfig,
) -> (
    ChatSession,
    tokio::sync::mpsc::UnboundedReceiver<veranda_engine::SessionEvent>,
) {
    let crm: Arc<dyn CrmIntake> = Arc::new(CrmClient::new(&config.crm).expect("crm client"));
    let store: Arc<dyn LeadStore> =
        Arc::new(LeadStoreClient::new(&config.lead_store).expect("store client"));
    ChatSession::open(
        Script::default(),
        crm,
        store,
        SessionOptions {
            source: config.concierge.source.clone(),
            fallback_whatsapp: config.fallback.whatsapp_number.clone(),
        },
    )
}

async fn settled(session: &ChatSession) -> SubmissionResult {
    let mut watch = session.result_watch();
    while *watch.borrow() == SubmissionResult::Pending {
        watch.changed().await.expect("session alive");
    }
    let result = *watch.borrow();
    result
}

// ---- Test 1: full conversation delivers the lead to both collaborators ----

#[tokio::test]
async fn full_conversation_delivers_lead_to_both_collaborators() {
    let crm_server = MockServer::start().await;
    let store_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/50401797/ec59b695"))
        .and(body_partial_json(json!({
            "fields": [
                {"name": "firstname", "value": "Maria"},
                {"name": "email", "value": "maria@example.com"},
                {"name": "phone", "value": "11999998888"},
                {"name": "message", "value": "11999998888"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&crm_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat-submit"))
        .and(header("authorization", "Bearer store-token"))
        .and(body_partial_json(json!({
            "name": "Maria",
            "email": "maria@example.com",
            "phone": "11999998888",
            "message": "11999998888",
            "whatsappConsent": true,
            "source": "chat"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"leadId": "lead-e2e-1"})))
        .expect(1)
        .mount(&store_server)
        .await;

    let config = config_for(&crm_server.uri(), &store_server.uri());
    let (mut session, _events) = open_session(&config);

    session.submit_reply("Maria").await;
    session.submit_reply("maria@").await; // rejected, step holds
    assert_eq!(session.step(), ChatStep::CollectEmail);
    session.submit_reply("maria@example.com").await;
    session.submit_reply("11999998888").await;
    assert_eq!(session.step(), ChatStep::Complete);

    assert_eq!(settled(&session).await, SubmissionResult::Success);
    session.close();
}

// ---- Test 2: CRM failure is fail-fast ----

#[tokio::test]
async fn crm_server_error_prevents_the_lead_store_call() {
    let crm_server = MockServer::start().await;
    let store_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/50401797/ec59b695"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&crm_server)
        .await;

    // The lead store must never be contacted.
    Mock::given(method("POST"))
        .and(path("/chat-submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"leadId": "nope"})))
        .expect(0)
        .mount(&store_server)
        .await;

    let config = config_for(&crm_server.uri(), &store_server.uri());
    let (mut session, _events) = open_session(&config);

    session.submit_reply("Maria").await;
    session.submit_reply("maria@example.com").await;
    session.submit_reply("11999998888").await;

    assert_eq!(settled(&session).await, SubmissionResult::Failure);
    session.close();
}

// ---- Test 3: repeated input after completion never re-submits ----

#[tokio::test]
async fn completed_conversation_submits_exactly_once() {
    let crm_server = MockServer::start().await;
    let store_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/50401797/ec59b695"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&crm_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat-submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"leadId": "only-one"})))
        .expect(1)
        .mount(&store_server)
        .await;

    let config = config_for(&crm_server.uri(), &store_server.uri());
    let (mut session, _events) = open_session(&config);

    session.submit_reply("Maria").await;
    session.submit_reply("maria@example.com").await;
    session.submit_reply("11999998888").await;
    assert_eq!(settled(&session).await, SubmissionResult::Success);

    // More input lands in the completed step's generic reply path.
    session.submit_reply("11999998888").await;
    session.submit_reply("did it work?").await;
    assert_eq!(session.step(), ChatStep::Complete);

    // Mock expectations (exactly one call each) are verified on drop.
    session.close();
}

// ---- Test 4: unconfigured collaborators fail closed ----

#[tokio::test]
async fn unconfigured_lead_store_fails_closed_without_network() {
    let crm_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/50401797/ec59b695"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&crm_server)
        .await;

    let toml = format!(
        r#"
[crm]
endpoint = "{}"
portal_id = "50401797"
form_id = "ec59b695"
"#,
        crm_server.uri()
    );
    let config = veranda_config::load_and_validate_str(&toml).expect("config valid");
    let (mut session, _events) = open_session(&config);

    session.submit_reply("Maria").await;
    session.submit_reply("maria@example.com").await;
    session.submit_reply("11999998888").await;

    // The missing lead-store credential surfaces as a failed submission,
    // not a crash, and the session stays alive.
    assert_eq!(settled(&session).await, SubmissionResult::Failure);
    assert_eq!(session.step(), ChatStep::Complete);
    session.close();
}

// ---- Test 5: visitor transcript survives rejections ----

#[tokio::test]
async fn transcript_keeps_rejected_replies_in_order() {
    let crm_server = MockServer::start().await;
    let store_server = MockServer::start().await;
    let config = config_for(&crm_server.uri(), &store_server.uri());
    let (mut session, _events) = open_session(&config);

    session.submit_reply("Maria").await;
    session.submit_reply("notanemail").await;
    session.submit_reply("maria@example.com").await;

    let visitor_texts: Vec<String> = session
        .messages()
        .await
        .into_iter()
        .filter(|m| m.sender == veranda_core::Sender::Visitor)
        .map(|m| m.text)
        .collect();
    assert_eq!(visitor_texts, ["Maria", "notanemail", "maria@example.com"]);
    session.close();
}
