//! Capability-scoped operations, one trait per resource family.
//!
//! The CLI dispatcher only needs the family a command addresses; each trait
//! is implemented by [`KongClient`] on top of its generic helpers.

#![allow(async_fn_in_trait)]

use super::KongClient;
use crate::engine::descriptor::ResourceKind;
use crate::error::Error;
use crate::resources::{
    BasicAuthRequest, BasicAuthResponse, ConsumerRequest, ConsumerResponse, IpRestrictionConfig,
    JwtRequest, JwtResponse, KeyAuthRequest, KeyAuthResponse, PluginInstall, PluginInstalled,
    PluginRequest, PluginResponse, RateLimitingConfig, RequestSizeLimitingConfig, RouteRequest,
    RouteResponse, ServiceRequest, ServiceResponse, SyslogConfig, TargetRequest, TargetResponse,
    UpstreamRequest, UpstreamResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;

pub trait ServiceOps {
    async fn add_service(&mut self, service: &ServiceRequest) -> Result<(), Error>;
    async fn query_service(&mut self, id: &str) -> Result<(), Error>;
    async fn list_services(&mut self) -> Result<(), Error>;
    async fn update_service(&mut self, id: &str, service: &ServiceRequest) -> Result<(), Error>;
    async fn delete_service(&mut self, id: &str) -> Result<(), Error>;
}

pub trait RouteOps {
    async fn add_route(&mut self, route: &RouteRequest) -> Result<(), Error>;
    async fn query_route(&mut self, id: &str) -> Result<(), Error>;
    async fn list_routes(&mut self) -> Result<(), Error>;
    async fn update_route(&mut self, id: &str, route: &RouteRequest) -> Result<(), Error>;
    async fn delete_route(&mut self, id: &str) -> Result<(), Error>;
}

/// Consumers and everything attached to a consumer: credentials and the
/// consumer-scoped plugins.
pub trait ConsumerOps {
    async fn add_consumer(&mut self, consumer: &ConsumerRequest) -> Result<(), Error>;
    async fn query_consumer(&mut self, id: &str) -> Result<(), Error>;
    async fn list_consumers(&mut self) -> Result<(), Error>;
    async fn update_consumer(&mut self, id: &str, consumer: &ConsumerRequest) -> Result<(), Error>;
    async fn delete_consumer(&mut self, id: &str) -> Result<(), Error>;

    async fn add_consumer_basic_auth(&mut self, consumer_id: &str, config: &BasicAuthRequest) -> Result<(), Error>;
    async fn add_consumer_key_auth(&mut self, consumer_id: &str, config: &KeyAuthRequest) -> Result<(), Error>;
    async fn add_consumer_jwt(&mut self, consumer_id: &str, config: &JwtRequest) -> Result<(), Error>;
    async fn add_consumer_ip_restriction(
        &mut self,
        consumer_id: &str,
        instance_name: Option<String>,
        config: IpRestrictionConfig,
    ) -> Result<(), Error>;
    async fn add_consumer_rate_limiting(
        &mut self,
        consumer_id: &str,
        instance_name: Option<String>,
        config: RateLimitingConfig,
    ) -> Result<(), Error>;
    async fn add_consumer_request_size_limiting(
        &mut self,
        consumer_id: &str,
        instance_name: Option<String>,
        config: RequestSizeLimitingConfig,
    ) -> Result<(), Error>;
    async fn add_consumer_syslog(
        &mut self,
        consumer_id: &str,
        instance_name: Option<String>,
        config: SyslogConfig,
    ) -> Result<(), Error>;
}

pub trait PluginOps {
    async fn add_plugin(&mut self, plugin: &PluginRequest) -> Result<(), Error>;
    async fn query_plugin(&mut self, id: &str) -> Result<(), Error>;
    async fn list_plugins(&mut self) -> Result<(), Error>;
    async fn update_plugin(&mut self, id: &str, plugin: &PluginRequest) -> Result<(), Error>;
    async fn delete_plugin(&mut self, id: &str) -> Result<(), Error>;
}

/// Upstreams and their targets.
pub trait UpstreamOps {
    async fn add_upstream(&mut self, upstream: &UpstreamRequest) -> Result<(), Error>;
    async fn query_upstream(&mut self, id: &str) -> Result<(), Error>;
    async fn list_upstreams(&mut self) -> Result<(), Error>;
    async fn update_upstream(&mut self, id: &str, upstream: &UpstreamRequest) -> Result<(), Error>;
    async fn delete_upstream(&mut self, id: &str) -> Result<(), Error>;

    async fn add_upstream_target(&mut self, upstream_id: &str, target: &TargetRequest) -> Result<(), Error>;
    async fn query_upstream_target(&mut self, upstream_id: &str, id: &str) -> Result<(), Error>;
    async fn list_upstream_targets(&mut self, upstream_id: &str) -> Result<(), Error>;
    async fn delete_upstream_target(&mut self, upstream_id: &str, id: &str) -> Result<(), Error>;
}

impl<W: Write> ServiceOps for KongClient<W> {
    async fn add_service(&mut self, service: &ServiceRequest) -> Result<(), Error> {
        self.create::<ServiceResponse, _>(ResourceKind::Service, None, service).await
    }

    async fn query_service(&mut self, id: &str) -> Result<(), Error> {
        self.fetch::<ServiceResponse>(ResourceKind::Service, None, id).await
    }

    async fn list_services(&mut self) -> Result<(), Error> {
        self.list::<ServiceResponse>(ResourceKind::Service, None).await
    }

    async fn update_service(&mut self, id: &str, service: &ServiceRequest) -> Result<(), Error> {
        self.modify::<ServiceResponse, _>(ResourceKind::Service, id, service).await
    }

    async fn delete_service(&mut self, id: &str) -> Result<(), Error> {
        self.remove(ResourceKind::Service, None, id).await
    }
}

impl<W: Write> RouteOps for KongClient<W> {
    async fn add_route(&mut self, route: &RouteRequest) -> Result<(), Error> {
        self.create::<RouteResponse, _>(ResourceKind::Route, None, route).await
    }

    async fn query_route(&mut self, id: &str) -> Result<(), Error> {
        self.fetch::<RouteResponse>(ResourceKind::Route, None, id).await
    }

    async fn list_routes(&mut self) -> Result<(), Error> {
        self.list::<RouteResponse>(ResourceKind::Route, None).await
    }

    async fn update_route(&mut self, id: &str, route: &RouteRequest) -> Result<(), Error> {
        self.modify::<RouteResponse, _>(ResourceKind::Route, id, route).await
    }

    async fn delete_route(&mut self, id: &str) -> Result<(), Error> {
        self.remove(ResourceKind::Route, None, id).await
    }
}

impl<W: Write> KongClient<W> {
    /// Installs a consumer-scoped plugin through the generic plugin envelope.
    async fn install_consumer_plugin<C>(
        &mut self,
        kind: ResourceKind,
        consumer_id: &str,
        instance_name: Option<String>,
        config: C,
    ) -> Result<(), Error>
    where
        C: Serialize + DeserializeOwned,
    {
        let Some(name) = kind.plugin_name() else {
            return Err(Error::invalid_argument(format!(
                "{} is not installed as a plugin",
                kind.label()
            )));
        };
        let install = PluginInstall::new(name, instance_name, config);
        self.create::<PluginInstalled<C>, _>(kind, Some(consumer_id), &install)
            .await
    }
}

impl<W: Write> ConsumerOps for KongClient<W> {
    async fn add_consumer(&mut self, consumer: &ConsumerRequest) -> Result<(), Error> {
        self.create::<ConsumerResponse, _>(ResourceKind::Consumer, None, consumer).await
    }

    async fn query_consumer(&mut self, id: &str) -> Result<(), Error> {
        self.fetch::<ConsumerResponse>(ResourceKind::Consumer, None, id).await
    }

    async fn list_consumers(&mut self) -> Result<(), Error> {
        self.list::<ConsumerResponse>(ResourceKind::Consumer, None).await
    }

    async fn update_consumer(&mut self, id: &str, consumer: &ConsumerRequest) -> Result<(), Error> {
        self.modify::<ConsumerResponse, _>(ResourceKind::Consumer, id, consumer).await
    }

    async fn delete_consumer(&mut self, id: &str) -> Result<(), Error> {
        self.remove(ResourceKind::Consumer, None, id).await
    }

    async fn add_consumer_basic_auth(&mut self, consumer_id: &str, config: &BasicAuthRequest) -> Result<(), Error> {
        self.create::<BasicAuthResponse, _>(ResourceKind::BasicAuth, Some(consumer_id), config)
            .await
    }

    async fn add_consumer_key_auth(&mut self, consumer_id: &str, config: &KeyAuthRequest) -> Result<(), Error> {
        self.create::<KeyAuthResponse, _>(ResourceKind::KeyAuth, Some(consumer_id), config)
            .await
    }

    async fn add_consumer_jwt(&mut self, consumer_id: &str, config: &JwtRequest) -> Result<(), Error> {
        self.create::<JwtResponse, _>(ResourceKind::Jwt, Some(consumer_id), config)
            .await
    }

    async fn add_consumer_ip_restriction(
        &mut self,
        consumer_id: &str,
        instance_name: Option<String>,
        config: IpRestrictionConfig,
    ) -> Result<(), Error> {
        self.install_consumer_plugin(ResourceKind::IpRestriction, consumer_id, instance_name, config)
            .await
    }

    async fn add_consumer_rate_limiting(
        &mut self,
        consumer_id: &str,
        instance_name: Option<String>,
        config: RateLimitingConfig,
    ) -> Result<(), Error> {
        self.install_consumer_plugin(ResourceKind::RateLimiting, consumer_id, instance_name, config)
            .await
    }

    async fn add_consumer_request_size_limiting(
        &mut self,
        consumer_id: &str,
        instance_name: Option<String>,
        config: RequestSizeLimitingConfig,
    ) -> Result<(), Error> {
        self.install_consumer_plugin(
            ResourceKind::RequestSizeLimiting,
            consumer_id,
            instance_name,
            config,
        )
        .await
    }

    async fn add_consumer_syslog(
        &mut self,
        consumer_id: &str,
        instance_name: Option<String>,
        config: SyslogConfig,
    ) -> Result<(), Error> {
        self.install_consumer_plugin(ResourceKind::Syslog, consumer_id, instance_name, config)
            .await
    }
}

impl<W: Write> PluginOps for KongClient<W> {
    async fn add_plugin(&mut self, plugin: &PluginRequest) -> Result<(), Error> {
        self.create::<PluginResponse, _>(ResourceKind::Plugin, None, plugin).await
    }

    async fn query_plugin(&mut self, id: &str) -> Result<(), Error> {
        self.fetch::<PluginResponse>(ResourceKind::Plugin, None, id).await
    }

    async fn list_plugins(&mut self) -> Result<(), Error> {
        self.list::<PluginResponse>(ResourceKind::Plugin, None).await
    }

    async fn update_plugin(&mut self, id: &str, plugin: &PluginRequest) -> Result<(), Error> {
        self.modify::<PluginResponse, _>(ResourceKind::Plugin, id, plugin).await
    }

    async fn delete_plugin(&mut self, id: &str) -> Result<(), Error> {
        self.remove(ResourceKind::Plugin, None, id).await
    }
}

impl<W: Write> UpstreamOps for KongClient<W> {
    async fn add_upstream(&mut self, upstream: &UpstreamRequest) -> Result<(), Error> {
        self.create::<UpstreamResponse, _>(ResourceKind::Upstream, None, upstream).await
    }

    async fn query_upstream(&mut self, id: &str) -> Result<(), Error> {
        self.fetch::<UpstreamResponse>(ResourceKind::Upstream, None, id).await
    }

    async fn list_upstreams(&mut self) -> Result<(), Error> {
        self.list::<UpstreamResponse>(ResourceKind::Upstream, None).await
    }

    async fn update_upstream(&mut self, id: &str, upstream: &UpstreamRequest) -> Result<(), Error> {
        self.modify::<UpstreamResponse, _>(ResourceKind::Upstream, id, upstream).await
    }

    async fn delete_upstream(&mut self, id: &str) -> Result<(), Error> {
        self.remove(ResourceKind::Upstream, None, id).await
    }

    async fn add_upstream_target(&mut self, upstream_id: &str, target: &TargetRequest) -> Result<(), Error> {
        self.create::<TargetResponse, _>(ResourceKind::UpstreamTarget, Some(upstream_id), target)
            .await
    }

    async fn query_upstream_target(&mut self, upstream_id: &str, id: &str) -> Result<(), Error> {
        self.fetch::<TargetResponse>(ResourceKind::UpstreamTarget, Some(upstream_id), id)
            .await
    }

    async fn list_upstream_targets(&mut self, upstream_id: &str) -> Result<(), Error> {
        self.list::<TargetResponse>(ResourceKind::UpstreamTarget, Some(upstream_id))
            .await
    }

    async fn delete_upstream_target(&mut self, upstream_id: &str, id: &str) -> Result<(), Error> {
        self.remove(ResourceKind::UpstreamTarget, Some(upstream_id), id)
            .await
    }
}
