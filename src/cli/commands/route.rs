//! Handlers for `kconf <action> route`.

use crate::cli::{RouteArgs, UpdateRouteArgs};
use crate::client::RouteOps;
use crate::error::Error;
use crate::resources::{EntityRef, RouteRequest};

impl From<RouteArgs> for RouteRequest {
    fn from(args: RouteArgs) -> Self {
        Self {
            name: args.name,
            protocols: args.protocols,
            methods: args.methods,
            paths: args.paths,
            hosts: args.hosts,
            strip_path: args.strip_path,
            service: EntityRef::from_id(args.service_id),
            tags: args.tags,
        }
    }
}

pub async fn add<C: RouteOps>(client: &mut C, args: RouteArgs) -> Result<(), Error> {
    client.add_route(&args.into()).await
}

pub async fn update<C: RouteOps>(client: &mut C, args: UpdateRouteArgs) -> Result<(), Error> {
    client.update_route(&args.id, &args.fields.into()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_id_becomes_reference() {
        let request = RouteRequest::from(RouteArgs {
            name: Some("r".to_string()),
            paths: vec!["/a".to_string()],
            service_id: Some("s1".to_string()),
            ..Default::default()
        });
        assert_eq!(request.service, Some(EntityRef { id: "s1".to_string() }));
        assert_eq!(request.paths, vec!["/a"]);
    }

    #[test]
    fn test_empty_service_id_is_dropped() {
        let request = RouteRequest::from(RouteArgs {
            service_id: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(request.service, None);
    }
}
