//! Handlers for `kconf <action> plugin`.

use crate::cli::{PluginArgs, UpdatePluginArgs};
use crate::client::PluginOps;
use crate::error::Error;
use crate::resources::{EntityRef, PluginRequest};
use serde_json::Value;

impl TryFrom<PluginArgs> for PluginRequest {
    type Error = Error;

    fn try_from(args: PluginArgs) -> Result<Self, Self::Error> {
        let config = args.config.as_deref().map(parse_config).transpose()?;
        Ok(Self {
            name: args.name,
            instance_name: args.instance_name,
            service: EntityRef::from_id(args.service_id),
            route: EntityRef::from_id(args.route_id),
            consumer: EntityRef::from_id(args.consumer_id),
            protocols: args.protocols,
            enabled: args.enabled,
            config,
            tags: args.tags,
        })
    }
}

/// `--config` must hold a JSON object.
fn parse_config(raw: &str) -> Result<Value, Error> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| Error::invalid_argument(format!("--config is not valid JSON: {e}")))?;
    if !value.is_object() {
        return Err(Error::invalid_argument("--config must be a JSON object"));
    }
    Ok(value)
}

pub async fn add<C: PluginOps>(client: &mut C, args: PluginArgs) -> Result<(), Error> {
    let plugin = PluginRequest::try_from(args)?;
    client.add_plugin(&plugin).await
}

pub async fn update<C: PluginOps>(client: &mut C, args: UpdatePluginArgs) -> Result<(), Error> {
    let plugin = PluginRequest::try_from(args.fields)?;
    client.update_plugin(&args.id, &plugin).await
}
