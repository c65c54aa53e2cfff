pub mod commands;
pub mod errors;
pub mod tracing_init;

use crate::config::{Options, ServerEndpoint};
use crate::constants;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "kconf",
    author,
    version,
    about = "kconf: declarative configuration of a Kong gateway through its admin API",
    long_about = "kconf issues configuration commands against the Kong admin API.\n\
                  Each invocation performs one request and prints the outcome.\n\n\
                  Examples:\n  \
                  kconf status\n  \
                  kconf add service --name=orders --url=http://orders.internal:8080\n  \
                  kconf add route --name=orders --paths=/orders --service-id=<id>\n  \
                  kconf --verbose list service\n  \
                  kconf --json-output query upstream --id=<id>"
)]
pub struct Cli {
    /// Host name or address of the admin API
    #[arg(
        long,
        global = true,
        value_name = "HOST",
        default_value = constants::DEFAULT_KONG_ADDRESS
    )]
    pub kong_address: String,

    /// Admin API port; 0 uses the address as a complete base URL
    #[arg(
        long,
        global = true,
        value_name = "N",
        default_value_t = constants::DEFAULT_KONG_PORT
    )]
    pub port: u16,

    /// Use JSON output for every command: the status line and the raw response body
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Run in verbose mode: the status line and labeled fields
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Increase logging verbosity (-d for debug, -dd for trace)
    #[arg(short = 'd', long = "debug", global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub fn endpoint(&self) -> ServerEndpoint {
        ServerEndpoint::from_cli(&self.kong_address, self.port)
    }

    #[must_use]
    pub const fn options(&self) -> Options {
        Options::from_flags(self.json_output, self.verbose)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the admin API is reachable
    Status,
    /// Create an entity
    Add {
        #[command(subcommand)]
        entity: AddEntity,
    },
    /// Show one entity
    Query {
        #[command(subcommand)]
        entity: QueryEntity,
    },
    /// List the first page of a collection
    List {
        #[command(subcommand)]
        entity: ListEntity,
    },
    /// Change fields of an existing entity
    Update {
        #[command(subcommand)]
        entity: UpdateEntity,
    },
    /// Remove an entity
    Delete {
        #[command(subcommand)]
        entity: DeleteEntity,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddEntity {
    Service(ServiceArgs),
    Route(RouteArgs),
    Consumer(ConsumerArgs),
    /// Basic-auth credential for a consumer
    ConsumerBasicAuth(BasicAuthArgs),
    /// Key-auth credential for a consumer
    ConsumerKeyAuth(KeyAuthArgs),
    /// JWT credential for a consumer
    ConsumerJwt(JwtArgs),
    /// IP restriction plugin bound to a consumer
    ConsumerIpRestriction(IpRestrictionArgs),
    /// Rate limiting plugin bound to a consumer
    ConsumerRateLimiting(RateLimitingArgs),
    /// Request size limiting plugin bound to a consumer
    ConsumerRequestSizeLimiting(RequestSizeLimitingArgs),
    /// Syslog plugin bound to a consumer
    ConsumerSyslog(SyslogArgs),
    Plugin(PluginArgs),
    Upstream(UpstreamArgs),
    UpstreamTarget(TargetArgs),
}

#[derive(Subcommand, Debug)]
pub enum QueryEntity {
    Service(IdArgs),
    Route(IdArgs),
    Consumer(IdArgs),
    Plugin(IdArgs),
    Upstream(IdArgs),
    UpstreamTarget(TargetIdArgs),
}

#[derive(Subcommand, Debug)]
pub enum ListEntity {
    #[command(alias = "services")]
    Service,
    #[command(alias = "routes")]
    Route,
    #[command(alias = "consumers")]
    Consumer,
    #[command(alias = "plugins")]
    Plugin,
    #[command(alias = "upstreams")]
    Upstream,
    #[command(alias = "upstream-targets")]
    UpstreamTarget(UpstreamIdArgs),
}

#[derive(Subcommand, Debug)]
pub enum UpdateEntity {
    Service(UpdateServiceArgs),
    Route(UpdateRouteArgs),
    Consumer(UpdateConsumerArgs),
    Plugin(UpdatePluginArgs),
    Upstream(UpdateUpstreamArgs),
}

#[derive(Subcommand, Debug)]
pub enum DeleteEntity {
    Service(IdArgs),
    Route(IdArgs),
    Consumer(IdArgs),
    Plugin(IdArgs),
    Upstream(IdArgs),
    UpstreamTarget(TargetIdArgs),
}

#[derive(Args, Debug, Clone)]
pub struct IdArgs {
    /// Entity id (or name, where the gateway accepts one)
    #[arg(long)]
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct UpstreamIdArgs {
    #[arg(long, value_name = "ID")]
    pub upstream_id: String,
}

#[derive(Args, Debug, Clone)]
pub struct TargetIdArgs {
    #[arg(long, value_name = "ID")]
    pub upstream_id: String,
    /// Target id
    #[arg(long)]
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct UpdateServiceArgs {
    #[arg(long)]
    pub id: String,
    #[command(flatten)]
    pub fields: ServiceArgs,
}

#[derive(Args, Debug, Clone)]
pub struct UpdateRouteArgs {
    #[arg(long)]
    pub id: String,
    #[command(flatten)]
    pub fields: RouteArgs,
}

#[derive(Args, Debug, Clone)]
pub struct UpdateConsumerArgs {
    #[arg(long)]
    pub id: String,
    #[command(flatten)]
    pub fields: ConsumerArgs,
}

#[derive(Args, Debug, Clone)]
pub struct UpdatePluginArgs {
    #[arg(long)]
    pub id: String,
    #[command(flatten)]
    pub fields: PluginArgs,
}

#[derive(Args, Debug, Clone)]
pub struct UpdateUpstreamArgs {
    #[arg(long)]
    pub id: String,
    #[command(flatten)]
    pub fields: UpstreamArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServiceArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Upstream URL, e.g. http://orders.internal:8080/v1
    #[arg(long)]
    pub url: Option<String>,
    /// Defaults to true on add
    #[arg(long, value_name = "BOOL")]
    pub enabled: Option<bool>,
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RouteArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub protocols: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub methods: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub paths: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub hosts: Vec<String>,
    #[arg(long, value_name = "BOOL")]
    pub strip_path: Option<bool>,
    #[arg(long, value_name = "ID")]
    pub service_id: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConsumerArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub custom_id: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct BasicAuthArgs {
    /// Consumer id or username
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct KeyAuthArgs {
    /// Consumer id or username
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub key: Option<String>,
    /// Seconds until the key expires
    #[arg(long)]
    pub ttl: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct JwtArgs {
    /// Consumer id or username
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub algorithm: Option<String>,
    #[arg(long)]
    pub key: Option<String>,
    #[arg(long)]
    pub secret: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct IpRestrictionArgs {
    /// Consumer id or username
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub instance_name: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub allow: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub deny: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RateLimitingArgs {
    /// Consumer id or username
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub instance_name: Option<String>,
    #[arg(long)]
    pub second: Option<i32>,
    #[arg(long)]
    pub minute: Option<i32>,
    #[arg(long)]
    pub hour: Option<i32>,
    #[arg(long)]
    pub day: Option<i32>,
    #[arg(long)]
    pub error_code: Option<i32>,
    #[arg(long)]
    pub error_message: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RequestSizeLimitingArgs {
    /// Consumer id or username
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub instance_name: Option<String>,
    #[arg(long)]
    pub allowed_payload_size: Option<i32>,
    /// bytes, kilobytes or megabytes
    #[arg(long)]
    pub size_unit: Option<String>,
    #[arg(long, value_name = "BOOL")]
    pub require_content_length: Option<bool>,
}

#[derive(Args, Debug, Clone)]
pub struct SyslogArgs {
    /// Consumer id or username
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub instance_name: Option<String>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub successful_severity: Option<String>,
    #[arg(long)]
    pub client_errors_severity: Option<String>,
    #[arg(long)]
    pub server_errors_severity: Option<String>,
    #[arg(long)]
    pub facility: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PluginArgs {
    /// Plugin name, e.g. cors
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub instance_name: Option<String>,
    #[arg(long, value_name = "ID")]
    pub service_id: Option<String>,
    #[arg(long, value_name = "ID")]
    pub route_id: Option<String>,
    #[arg(long, value_name = "ID")]
    pub consumer_id: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub protocols: Vec<String>,
    #[arg(long, value_name = "BOOL")]
    pub enabled: Option<bool>,
    /// Plugin configuration as a JSON object
    #[arg(long, value_name = "JSON")]
    pub config: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UpstreamArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// round-robin, consistent-hashing, least-connections or latency
    #[arg(long)]
    pub algorithm: Option<String>,
    #[arg(long)]
    pub hash_on: Option<String>,
    #[arg(long)]
    pub hash_fallback: Option<String>,
    #[arg(long)]
    pub hash_on_header: Option<String>,
    #[arg(long)]
    pub slots: Option<u32>,
    #[arg(long)]
    pub host_header: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    #[arg(long, value_name = "ID")]
    pub upstream_id: String,
    /// host:port of the backend
    #[arg(long)]
    pub target: Option<String>,
    #[arg(long)]
    pub weight: Option<u32>,
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}
