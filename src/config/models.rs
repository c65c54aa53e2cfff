use crate::constants;
use crate::output::OutputMode;

/// Address of the Kong admin API.
///
/// When a port is given the base URL is `http://{address}:{port}`; without a
/// port the address is taken verbatim, which allows passing a full URL such as
/// `https://kong-admin.internal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    address: String,
    port: Option<u16>,
    base_url: String,
}

impl ServerEndpoint {
    #[must_use]
    pub fn new(address: impl Into<String>, port: Option<u16>) -> Self {
        let address = address.into();
        let base_url = derive_base_url(&address, port);
        Self {
            address,
            port,
            base_url,
        }
    }

    /// Builds an endpoint from CLI values, where port 0 means "no port".
    #[must_use]
    pub fn from_cli(address: &str, port: u16) -> Self {
        Self::new(address, (port != 0).then_some(port))
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ServerEndpoint {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_KONG_ADDRESS,
            Some(constants::DEFAULT_KONG_PORT),
        )
    }
}

fn derive_base_url(address: &str, port: Option<u16>) -> String {
    let address = address.trim_end_matches('/');
    let Some(port) = port else {
        return address.to_string();
    };

    if address.starts_with(constants::SCHEME_HTTP) || address.starts_with(constants::SCHEME_HTTPS)
    {
        format!("{address}:{port}")
    } else {
        format!("{}{address}:{port}", constants::SCHEME_HTTP)
    }
}

/// Per-invocation execution options, fixed once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: OutputMode,
}

impl Options {
    /// Raw JSON output takes precedence over verbose text.
    #[must_use]
    pub const fn from_flags(json_output: bool, verbose: bool) -> Self {
        let mode = if json_output {
            OutputMode::Json
        } else if verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Terse
        };
        Self { mode }
    }
}
