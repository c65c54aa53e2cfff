//! Request payloads echoed back by the gateway decode into responses that keep
//! exactly the fields that were sent.

use kconf_cli::resources::{
    ConsumerRequest, ConsumerResponse, EntityRef, KeyAuthRequest, KeyAuthResponse, PluginInstall,
    PluginInstalled, PluginRequest, PluginResponse, RequestSizeLimitingConfig, Resource,
    RouteRequest, RouteResponse, ServiceRequest, ServiceResponse, UpstreamRequest,
    UpstreamResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

/// Serializes `request`, adds an id the way the gateway does, and decodes it.
fn echo<Req: Serialize, Resp: DeserializeOwned>(request: &Req, id: &str) -> (Value, Resp) {
    let mut sent = serde_json::to_value(request).unwrap();
    sent.as_object_mut()
        .unwrap()
        .insert("id".to_string(), json!(id));
    let response = serde_json::from_value(sent.clone()).unwrap();
    (sent, response)
}

#[test]
fn test_service_echo_keeps_absent_fields_absent() {
    let request = ServiceRequest {
        name: Some("orders".to_string()),
        url: None,
        enabled: Some(false),
        tags: vec!["team-a".to_string()],
    };
    let (sent, response): (_, ServiceResponse) = echo(&request, "s1");

    assert!(sent.get("url").is_none());
    assert_eq!(response.id(), "s1");
    assert_eq!(response.name.as_deref(), Some("orders"));
    assert_eq!(response.enabled, Some(false));
    assert_eq!(response.tags, Some(vec!["team-a".to_string()]));
    assert_eq!(response.host, None);
}

#[test]
fn test_route_echo() {
    let request = RouteRequest {
        name: Some("orders".to_string()),
        methods: vec!["GET".to_string()],
        strip_path: Some(true),
        service: Some(EntityRef { id: "s1".to_string() }),
        ..Default::default()
    };
    let (sent, response): (_, RouteResponse) = echo(&request, "r1");

    assert!(sent.get("protocols").is_none());
    assert_eq!(response.methods, Some(vec!["GET".to_string()]));
    assert_eq!(response.protocols, None);
    assert_eq!(response.strip_path, Some(true));
    assert_eq!(response.service, Some(EntityRef { id: "s1".to_string() }));
    assert_eq!(
        response.summary(),
        "orders --> protocols: [] methods: [GET] paths: [] service: s1"
    );
}

#[test]
fn test_consumer_echo() {
    let request = ConsumerRequest {
        username: Some("alice".to_string()),
        custom_id: None,
        tags: vec![],
    };
    let (sent, response): (_, ConsumerResponse) = echo(&request, "c1");

    assert_eq!(sent, json!({"id": "c1", "username": "alice"}));
    assert_eq!(response.summary(), "alice (custom id: )");
}

#[test]
fn test_key_auth_echo_drops_zero_ttl() {
    let request = KeyAuthRequest {
        key: Some("k-123".to_string()),
        ttl: Some(0),
    };
    let (_, response): (_, KeyAuthResponse) = echo(&request, "k1");

    assert_eq!(response.key.as_deref(), Some("k-123"));
    assert_eq!(response.ttl, None);
}

#[test]
fn test_plugin_echo_keeps_free_config() {
    let request = PluginRequest {
        name: Some("cors".to_string()),
        service: Some(EntityRef { id: "s1".to_string() }),
        enabled: Some(true),
        config: Some(json!({"origins": ["*"], "max_age": 3600})),
        ..Default::default()
    };
    let (_, response): (_, PluginResponse) = echo(&request, "p1");

    assert_eq!(response.config, Some(json!({"origins": ["*"], "max_age": 3600})));
    assert_eq!(response.route, None);
    assert_eq!(response.summary(), "cors enabled: true protocols: [] scope: service=s1");
}

#[test]
fn test_consumer_plugin_envelope_echo() {
    let install = PluginInstall::new(
        "request-size-limiting",
        None,
        RequestSizeLimitingConfig {
            allowed_payload_size: Some(8),
            size_unit: Some("megabytes".to_string()),
            require_content_length: None,
        },
    );
    let (sent, response): (_, PluginInstalled<RequestSizeLimitingConfig>) = echo(&install, "p9");

    assert!(sent.get("instance_name").is_none());
    let config = response.config.unwrap();
    assert_eq!(config.allowed_payload_size, Some(8));
    assert_eq!(config.size_unit.as_deref(), Some("megabytes"));
    assert_eq!(config.require_content_length, None);
}

#[test]
fn test_upstream_echo() {
    let request = UpstreamRequest {
        name: Some("pool".to_string()),
        algorithm: Some("least-connections".to_string()),
        slots: Some(1000),
        ..Default::default()
    };
    let (_, response): (_, UpstreamResponse) = echo(&request, "u1");

    assert_eq!(response.slots, Some(1000));
    assert_eq!(response.hash_on, None);
    assert_eq!(response.summary(), "pool algorithm: least-connections");
}
