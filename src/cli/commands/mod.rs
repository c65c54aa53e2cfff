//! CLI command handlers.
//!
//! [`run`] routes a parsed [`Commands`] value to the handler of the entity
//! family it addresses. Each handler only depends on the capability trait of
//! its family.

#[allow(clippy::missing_errors_doc)]
pub mod consumer;
#[allow(clippy::missing_errors_doc)]
pub mod plugin;
#[allow(clippy::missing_errors_doc)]
pub mod route;
#[allow(clippy::missing_errors_doc)]
pub mod service;
#[allow(clippy::missing_errors_doc)]
pub mod upstream;

use crate::cli::{AddEntity, Commands, DeleteEntity, ListEntity, QueryEntity, UpdateEntity};
use crate::client::{ConsumerOps, KongClient, PluginOps, RouteOps, ServiceOps, UpstreamOps};
use crate::error::Error;
use std::io::Write;

/// Executes one command against the admin API.
///
/// # Errors
///
/// Returns the first protocol, argument or rendering error.
pub async fn run<W: Write>(client: &mut KongClient<W>, command: Commands) -> Result<(), Error> {
    match command {
        Commands::Status => client.check_status().await,
        Commands::Add { entity } => add(client, entity).await,
        Commands::Query { entity } => query(client, entity).await,
        Commands::List { entity } => list(client, entity).await,
        Commands::Update { entity } => update(client, entity).await,
        Commands::Delete { entity } => delete(client, entity).await,
    }
}

async fn add<W: Write>(client: &mut KongClient<W>, entity: AddEntity) -> Result<(), Error> {
    match entity {
        AddEntity::Service(args) => service::add(client, args).await,
        AddEntity::Route(args) => route::add(client, args).await,
        AddEntity::Consumer(args) => consumer::add(client, args).await,
        AddEntity::ConsumerBasicAuth(args) => consumer::add_basic_auth(client, args).await,
        AddEntity::ConsumerKeyAuth(args) => consumer::add_key_auth(client, args).await,
        AddEntity::ConsumerJwt(args) => consumer::add_jwt(client, args).await,
        AddEntity::ConsumerIpRestriction(args) => consumer::add_ip_restriction(client, args).await,
        AddEntity::ConsumerRateLimiting(args) => consumer::add_rate_limiting(client, args).await,
        AddEntity::ConsumerRequestSizeLimiting(args) => {
            consumer::add_request_size_limiting(client, args).await
        }
        AddEntity::ConsumerSyslog(args) => consumer::add_syslog(client, args).await,
        AddEntity::Plugin(args) => plugin::add(client, args).await,
        AddEntity::Upstream(args) => upstream::add(client, args).await,
        AddEntity::UpstreamTarget(args) => upstream::add_target(client, args).await,
    }
}

async fn query<W: Write>(client: &mut KongClient<W>, entity: QueryEntity) -> Result<(), Error> {
    match entity {
        QueryEntity::Service(args) => client.query_service(&args.id).await,
        QueryEntity::Route(args) => client.query_route(&args.id).await,
        QueryEntity::Consumer(args) => client.query_consumer(&args.id).await,
        QueryEntity::Plugin(args) => client.query_plugin(&args.id).await,
        QueryEntity::Upstream(args) => client.query_upstream(&args.id).await,
        QueryEntity::UpstreamTarget(args) => {
            client
                .query_upstream_target(&args.upstream_id, &args.id)
                .await
        }
    }
}

async fn list<W: Write>(client: &mut KongClient<W>, entity: ListEntity) -> Result<(), Error> {
    match entity {
        ListEntity::Service => client.list_services().await,
        ListEntity::Route => client.list_routes().await,
        ListEntity::Consumer => client.list_consumers().await,
        ListEntity::Plugin => client.list_plugins().await,
        ListEntity::Upstream => client.list_upstreams().await,
        ListEntity::UpstreamTarget(args) => client.list_upstream_targets(&args.upstream_id).await,
    }
}

async fn update<W: Write>(client: &mut KongClient<W>, entity: UpdateEntity) -> Result<(), Error> {
    match entity {
        UpdateEntity::Service(args) => service::update(client, args).await,
        UpdateEntity::Route(args) => route::update(client, args).await,
        UpdateEntity::Consumer(args) => consumer::update(client, args).await,
        UpdateEntity::Plugin(args) => plugin::update(client, args).await,
        UpdateEntity::Upstream(args) => upstream::update(client, args).await,
    }
}

async fn delete<W: Write>(client: &mut KongClient<W>, entity: DeleteEntity) -> Result<(), Error> {
    match entity {
        DeleteEntity::Service(args) => client.delete_service(&args.id).await,
        DeleteEntity::Route(args) => client.delete_route(&args.id).await,
        DeleteEntity::Consumer(args) => client.delete_consumer(&args.id).await,
        DeleteEntity::Plugin(args) => client.delete_plugin(&args.id).await,
        DeleteEntity::Upstream(args) => client.delete_upstream(&args.id).await,
        DeleteEntity::UpstreamTarget(args) => {
            client
                .delete_upstream_target(&args.upstream_id, &args.id)
                .await
        }
    }
}
