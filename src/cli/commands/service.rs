//! Handlers for `kconf <action> service`.

use crate::cli::{ServiceArgs, UpdateServiceArgs};
use crate::client::ServiceOps;
use crate::error::Error;
use crate::resources::ServiceRequest;

impl From<ServiceArgs> for ServiceRequest {
    fn from(args: ServiceArgs) -> Self {
        Self {
            name: args.name,
            url: args.url,
            enabled: args.enabled,
            tags: args.tags,
        }
    }
}

/// New services are enabled unless `--enabled=false` is given.
pub async fn add<C: ServiceOps>(client: &mut C, args: ServiceArgs) -> Result<(), Error> {
    let mut service = ServiceRequest::from(args);
    service.enabled.get_or_insert(true);
    client.add_service(&service).await
}

pub async fn update<C: ServiceOps>(client: &mut C, args: UpdateServiceArgs) -> Result<(), Error> {
    client.update_service(&args.id, &args.fields.into()).await
}
