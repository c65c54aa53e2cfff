//! Operation descriptors: the table that binds every resource kind to the
//! generic request/response protocol.
//!
//! A [`Descriptor`] carries everything [`super::executor::execute`] needs to
//! perform one round trip: the HTTP method, the path below the admin base URL,
//! the status that counts as success and whether a 404 should be reported as a
//! missing resource.

use crate::constants;
use reqwest::{Method, StatusCode};
use std::fmt;

/// What an invocation does to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Status,
    Add,
    Query,
    List,
    Update,
    Delete,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Add => "add",
            Self::Query => "query",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// HTTP method for the action.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Status | Self::Query | Self::List => Method::GET,
            Self::Add => Method::POST,
            Self::Update => Method::PATCH,
            Self::Delete => Method::DELETE,
        }
    }

    /// Status code the gateway answers with when the action succeeds.
    #[must_use]
    pub const fn success_status(self) -> StatusCode {
        match self {
            Self::Add => StatusCode::CREATED,
            Self::Status | Self::Query | Self::List | Self::Update => StatusCode::OK,
            Self::Delete => StatusCode::NO_CONTENT,
        }
    }

    /// Whether the action addresses a single resource by its own id.
    #[must_use]
    pub const fn targets_id(self) -> bool {
        matches!(self, Self::Query | Self::Update | Self::Delete)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every resource kind the admin API exposes to this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// The admin API root, used by the status check.
    Node,
    Service,
    Route,
    Consumer,
    BasicAuth,
    KeyAuth,
    Jwt,
    IpRestriction,
    RateLimiting,
    RequestSizeLimiting,
    Syslog,
    Plugin,
    Upstream,
    UpstreamTarget,
}

impl ResourceKind {
    /// Human readable singular label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Node => "Kong",
            Self::Service => "service",
            Self::Route => "route",
            Self::Consumer => "consumer",
            Self::BasicAuth => "consumer basic auth",
            Self::KeyAuth => "consumer key auth",
            Self::Jwt => "consumer JWT",
            Self::IpRestriction => "consumer IP restriction",
            Self::RateLimiting => "consumer rate limiting",
            Self::RequestSizeLimiting => "consumer request size limiting",
            Self::Syslog => "consumer syslog",
            Self::Plugin => "plugin",
            Self::Upstream => "upstream",
            Self::UpstreamTarget => "upstream target",
        }
    }

    /// Plural label used by list operations.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Node => "Kong nodes",
            Self::Service => "services",
            Self::Route => "routes",
            Self::Consumer => "consumers",
            Self::BasicAuth => "consumer basic auths",
            Self::KeyAuth => "consumer key auths",
            Self::Jwt => "consumer JWTs",
            Self::IpRestriction => "consumer IP restrictions",
            Self::RateLimiting => "consumer rate limitings",
            Self::RequestSizeLimiting => "consumer request size limitings",
            Self::Syslog => "consumer syslogs",
            Self::Plugin => "plugins",
            Self::Upstream => "upstreams",
            Self::UpstreamTarget => "upstream targets",
        }
    }

    /// Label of the resource a child kind is nested under.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::BasicAuth
            | Self::KeyAuth
            | Self::Jwt
            | Self::IpRestriction
            | Self::RateLimiting
            | Self::RequestSizeLimiting
            | Self::Syslog => Some(Self::Consumer),
            Self::UpstreamTarget => Some(Self::Upstream),
            _ => None,
        }
    }

    /// Plugin name for kinds installed through the generic plugin envelope.
    ///
    /// These kinds post to `/consumers/{id}/plugins` with a body of
    /// `{name, instance_name, config}`, while the credential kinds post their
    /// fields directly to a dedicated sub-resource.
    #[must_use]
    pub const fn plugin_name(self) -> Option<&'static str> {
        match self {
            Self::IpRestriction => Some(constants::PLUGIN_IP_RESTRICTION),
            Self::RateLimiting => Some(constants::PLUGIN_RATE_LIMITING),
            Self::RequestSizeLimiting => Some(constants::PLUGIN_REQUEST_SIZE_LIMITING),
            Self::Syslog => Some(constants::PLUGIN_SYSLOG),
            _ => None,
        }
    }

    /// Path segment of the collection below its parent (or the root).
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Node => "",
            Self::Service => constants::PATH_SERVICES,
            Self::Route => constants::PATH_ROUTES,
            Self::Consumer => constants::PATH_CONSUMERS,
            Self::BasicAuth => constants::PATH_BASIC_AUTH,
            Self::KeyAuth => constants::PATH_KEY_AUTH,
            Self::Jwt => constants::PATH_JWT,
            Self::IpRestriction
            | Self::RateLimiting
            | Self::RequestSizeLimiting
            | Self::Syslog
            | Self::Plugin => constants::PATH_PLUGINS,
            Self::Upstream => constants::PATH_UPSTREAMS,
            Self::UpstreamTarget => constants::PATH_TARGETS,
        }
    }
}

/// Resource reported as missing when the gateway answers 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundScope {
    pub resource: &'static str,
    pub id: String,
}

/// A fully resolved operation against the admin API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub action: Action,
    pub kind: ResourceKind,
    pub method: Method,
    pub segments: Vec<String>,
    pub success: StatusCode,
    pub not_found: Option<NotFoundScope>,
}

impl Descriptor {
    /// Builds the descriptor for `action` on `kind`.
    ///
    /// `parent` is the id of the owning consumer or upstream for nested kinds,
    /// `id` the resource's own id for query, update and delete.
    #[must_use]
    pub fn new(action: Action, kind: ResourceKind, parent: Option<&str>, id: Option<&str>) -> Self {
        let mut segments = Vec::with_capacity(4);
        if let Some(parent_kind) = kind.parent() {
            segments.push(parent_kind.collection().to_string());
            segments.push(encode_segment(parent.unwrap_or_default()));
        }
        if !kind.collection().is_empty() {
            segments.push(kind.collection().to_string());
        }
        if let Some(id) = id.filter(|_| action.targets_id()) {
            segments.push(encode_segment(id));
        }

        let not_found = not_found_scope(action, kind, parent, id);

        Self {
            action,
            kind,
            method: action.method(),
            segments,
            success: action.success_status(),
            not_found,
        }
    }

    /// Descriptor for the admin API root status check.
    #[must_use]
    pub fn status() -> Self {
        Self::new(Action::Status, ResourceKind::Node, None, None)
    }

    /// Path below the base URL, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Full request URL for the given admin base URL.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if self.segments.is_empty() {
            base.to_string()
        } else {
            format!("{base}{}", self.path())
        }
    }

    /// Operation name as used in error messages, e.g. `add upstream target`.
    #[must_use]
    pub fn operation_name(&self) -> String {
        match self.action {
            Action::Status => "check status".to_string(),
            Action::List => format!("list {}", self.kind.plural()),
            action => format!("{action} {}", self.kind.label()),
        }
    }
}

fn not_found_scope(
    action: Action,
    kind: ResourceKind,
    parent: Option<&str>,
    id: Option<&str>,
) -> Option<NotFoundScope> {
    if action.targets_id() {
        return id.map(|id| NotFoundScope {
            resource: kind.label(),
            id: id.to_string(),
        });
    }

    if matches!(action, Action::Add | Action::List) {
        let parent_kind = kind.parent()?;
        return parent.map(|id| NotFoundScope {
            resource: parent_kind.label(),
            id: id.to_string(),
        });
    }

    None
}

fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_paths() {
        let add = Descriptor::new(Action::Add, ResourceKind::Service, None, None);
        assert_eq!(add.path(), "/services");
        assert_eq!(add.method, Method::POST);
        assert_eq!(add.success, StatusCode::CREATED);
        assert!(add.not_found.is_none());

        let query = Descriptor::new(Action::Query, ResourceKind::Route, None, Some("r1"));
        assert_eq!(query.path(), "/routes/r1");
        assert_eq!(query.method, Method::GET);
        assert_eq!(query.success, StatusCode::OK);
    }

    #[test]
    fn test_credential_kinds_post_to_dedicated_sub_resource() {
        let cases = [
            (ResourceKind::BasicAuth, "/consumers/c1/basic-auth"),
            (ResourceKind::KeyAuth, "/consumers/c1/key-auth"),
            (ResourceKind::Jwt, "/consumers/c1/jwt"),
        ];
        for (kind, expected) in cases {
            let descriptor = Descriptor::new(Action::Add, kind, Some("c1"), None);
            assert_eq!(descriptor.path(), expected);
            assert!(kind.plugin_name().is_none());
        }
    }

    #[test]
    fn test_envelope_kinds_post_to_consumer_plugins() {
        for kind in [
            ResourceKind::IpRestriction,
            ResourceKind::RateLimiting,
            ResourceKind::RequestSizeLimiting,
            ResourceKind::Syslog,
        ] {
            let descriptor = Descriptor::new(Action::Add, kind, Some("c1"), None);
            assert_eq!(descriptor.path(), "/consumers/c1/plugins");
            assert!(kind.plugin_name().is_some());
        }
    }

    #[test]
    fn test_upstream_target_paths() {
        let list = Descriptor::new(Action::List, ResourceKind::UpstreamTarget, Some("u1"), None);
        assert_eq!(list.path(), "/upstreams/u1/targets");

        let delete = Descriptor::new(
            Action::Delete,
            ResourceKind::UpstreamTarget,
            Some("u1"),
            Some("t1"),
        );
        assert_eq!(delete.path(), "/upstreams/u1/targets/t1");
        assert_eq!(delete.method, Method::DELETE);
        assert_eq!(delete.success, StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_update_uses_patch() {
        let update = Descriptor::new(Action::Update, ResourceKind::Upstream, None, Some("u1"));
        assert_eq!(update.method, Method::PATCH);
        assert_eq!(update.success, StatusCode::OK);
        assert_eq!(update.path(), "/upstreams/u1");
    }

    #[test]
    fn test_not_found_scope_by_action() {
        let query = Descriptor::new(Action::Query, ResourceKind::Service, None, Some("missing"));
        assert_eq!(
            query.not_found,
            Some(NotFoundScope {
                resource: "service",
                id: "missing".to_string()
            })
        );

        let add_credential = Descriptor::new(Action::Add, ResourceKind::BasicAuth, Some("1234"), None);
        assert_eq!(
            add_credential.not_found,
            Some(NotFoundScope {
                resource: "consumer",
                id: "1234".to_string()
            })
        );

        let list = Descriptor::new(Action::List, ResourceKind::Service, None, None);
        assert!(list.not_found.is_none());
        assert!(Descriptor::status().not_found.is_none());
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        let query = Descriptor::new(Action::Query, ResourceKind::Consumer, None, Some("john doe"));
        assert_eq!(query.path(), "/consumers/john%20doe");
    }

    #[test]
    fn test_url_joins_base() {
        let status = Descriptor::status();
        assert_eq!(status.url("http://localhost:8001/"), "http://localhost:8001");

        let list = Descriptor::new(Action::List, ResourceKind::Plugin, None, None);
        assert_eq!(list.url("http://localhost:8001"), "http://localhost:8001/plugins");
    }

    #[test]
    fn test_operation_names() {
        let add = Descriptor::new(Action::Add, ResourceKind::UpstreamTarget, Some("u1"), None);
        assert_eq!(add.operation_name(), "add upstream target");

        let list = Descriptor::new(Action::List, ResourceKind::Service, None, None);
        assert_eq!(list.operation_name(), "list services");

        assert_eq!(Descriptor::status().operation_name(), "check status");
    }
}
