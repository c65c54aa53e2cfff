//! Handlers for `kconf <action> upstream` and `upstream-target`.

use crate::cli::{TargetArgs, UpdateUpstreamArgs, UpstreamArgs};
use crate::client::UpstreamOps;
use crate::error::Error;
use crate::resources::{TargetRequest, UpstreamRequest};

impl From<UpstreamArgs> for UpstreamRequest {
    fn from(args: UpstreamArgs) -> Self {
        Self {
            name: args.name,
            algorithm: args.algorithm,
            hash_on: args.hash_on,
            hash_fallback: args.hash_fallback,
            hash_on_header: args.hash_on_header,
            slots: args.slots,
            host_header: args.host_header,
            tags: args.tags,
        }
    }
}

pub async fn add<C: UpstreamOps>(client: &mut C, args: UpstreamArgs) -> Result<(), Error> {
    client.add_upstream(&args.into()).await
}

pub async fn update<C: UpstreamOps>(client: &mut C, args: UpdateUpstreamArgs) -> Result<(), Error> {
    client.update_upstream(&args.id, &args.fields.into()).await
}

pub async fn add_target<C: UpstreamOps>(client: &mut C, args: TargetArgs) -> Result<(), Error> {
    let target = TargetRequest {
        target: args.target,
        weight: args.weight,
        tags: args.tags,
    };
    client.add_upstream_target(&args.upstream_id, &target).await
}
