//! Handlers for `kconf <action> consumer` and the consumer-scoped
//! credentials and plugins.

use crate::cli::{
    BasicAuthArgs, ConsumerArgs, IpRestrictionArgs, JwtArgs, KeyAuthArgs, RateLimitingArgs,
    RequestSizeLimitingArgs, SyslogArgs, UpdateConsumerArgs,
};
use crate::client::ConsumerOps;
use crate::error::Error;
use crate::resources::{
    BasicAuthRequest, ConsumerRequest, IpRestrictionConfig, JwtRequest, KeyAuthRequest,
    RateLimitingConfig, RequestSizeLimitingConfig, SyslogConfig,
};

impl From<ConsumerArgs> for ConsumerRequest {
    fn from(args: ConsumerArgs) -> Self {
        Self {
            username: args.username,
            custom_id: args.custom_id,
            tags: args.tags,
        }
    }
}

pub async fn add<C: ConsumerOps>(client: &mut C, args: ConsumerArgs) -> Result<(), Error> {
    client.add_consumer(&args.into()).await
}

pub async fn update<C: ConsumerOps>(client: &mut C, args: UpdateConsumerArgs) -> Result<(), Error> {
    client.update_consumer(&args.id, &args.fields.into()).await
}

pub async fn add_basic_auth<C: ConsumerOps>(client: &mut C, args: BasicAuthArgs) -> Result<(), Error> {
    let credential = BasicAuthRequest {
        username: args.username,
        password: args.password,
    };
    client.add_consumer_basic_auth(&args.id, &credential).await
}

pub async fn add_key_auth<C: ConsumerOps>(client: &mut C, args: KeyAuthArgs) -> Result<(), Error> {
    let credential = KeyAuthRequest {
        key: args.key,
        ttl: args.ttl,
    };
    client.add_consumer_key_auth(&args.id, &credential).await
}

pub async fn add_jwt<C: ConsumerOps>(client: &mut C, args: JwtArgs) -> Result<(), Error> {
    let credential = JwtRequest {
        algorithm: args.algorithm,
        key: args.key,
        secret: args.secret,
    };
    client.add_consumer_jwt(&args.id, &credential).await
}

pub async fn add_ip_restriction<C: ConsumerOps>(client: &mut C, args: IpRestrictionArgs) -> Result<(), Error> {
    let config = IpRestrictionConfig::new(args.allow, args.deny);
    client
        .add_consumer_ip_restriction(&args.id, args.instance_name, config)
        .await
}

pub async fn add_rate_limiting<C: ConsumerOps>(client: &mut C, args: RateLimitingArgs) -> Result<(), Error> {
    let config = RateLimitingConfig {
        second: args.second,
        minute: args.minute,
        hour: args.hour,
        day: args.day,
        error_code: args.error_code,
        error_message: args.error_message,
    };
    client
        .add_consumer_rate_limiting(&args.id, args.instance_name, config)
        .await
}

pub async fn add_request_size_limiting<C: ConsumerOps>(
    client: &mut C,
    args: RequestSizeLimitingArgs,
) -> Result<(), Error> {
    let config = RequestSizeLimitingConfig {
        allowed_payload_size: args.allowed_payload_size,
        size_unit: args.size_unit,
        require_content_length: args.require_content_length,
    };
    client
        .add_consumer_request_size_limiting(&args.id, args.instance_name, config)
        .await
}

pub async fn add_syslog<C: ConsumerOps>(client: &mut C, args: SyslogArgs) -> Result<(), Error> {
    let config = SyslogConfig {
        log_level: args.log_level,
        successful_severity: args.successful_severity,
        client_errors_severity: args.client_errors_severity,
        server_errors_severity: args.server_errors_severity,
        facility: args.facility,
    };
    client
        .add_consumer_syslog(&args.id, args.instance_name, config)
        .await
}
