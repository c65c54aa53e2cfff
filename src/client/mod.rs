//! Kong admin API client.
//!
//! [`KongClient`] owns the endpoint and the output sink. Its generic helpers
//! pair a [`Descriptor`] with the protocol and the renderer; the
//! capability-scoped traits in [`ops`] bind each resource family onto those
//! helpers.

pub mod ops;

use crate::config::{Options, ServerEndpoint};
use crate::engine::descriptor::{Action, Descriptor, ResourceKind};
use crate::engine::executor;
use crate::error::Error;
use crate::output::Output;
use crate::resources::Resource;
use serde::Serialize;
use std::io::{self, Write};
use tracing::instrument;

pub use ops::{ConsumerOps, PluginOps, RouteOps, ServiceOps, UpstreamOps};

/// Client bound to one admin endpoint, rendering to `W`.
#[derive(Debug)]
pub struct KongClient<W = io::Stdout> {
    endpoint: ServerEndpoint,
    output: Output<W>,
}

impl KongClient<io::Stdout> {
    /// Client that renders to the process stdout.
    #[must_use]
    pub fn stdout(endpoint: ServerEndpoint, options: Options) -> Self {
        Self::new(endpoint, Output::stdout(options.mode))
    }
}

impl<W: Write> KongClient<W> {
    pub const fn new(endpoint: ServerEndpoint, output: Output<W>) -> Self {
        Self { endpoint, output }
    }

    pub fn into_output(self) -> Output<W> {
        self.output
    }

    /// Checks that the admin API answers on its root.
    ///
    /// # Errors
    ///
    /// Returns any protocol or rendering error.
    #[instrument(skip(self), fields(base_url = %self.endpoint.base_url()))]
    pub async fn check_status(&mut self) -> Result<(), Error> {
        let descriptor = Descriptor::status();
        let exchange = executor::execute(&self.endpoint, &descriptor, None::<&()>).await?;
        self.output.status(&exchange)
    }

    pub(crate) async fn create<R, B>(
        &mut self,
        kind: ResourceKind,
        parent: Option<&str>,
        body: &B,
    ) -> Result<(), Error>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        let descriptor = Descriptor::new(Action::Add, kind, parent, None);
        let exchange = executor::execute(&self.endpoint, &descriptor, Some(body)).await?;
        self.output.record::<R>(&descriptor, &exchange)
    }

    pub(crate) async fn fetch<R: Resource>(
        &mut self,
        kind: ResourceKind,
        parent: Option<&str>,
        id: &str,
    ) -> Result<(), Error> {
        let descriptor = Descriptor::new(Action::Query, kind, parent, Some(id));
        let exchange = executor::execute(&self.endpoint, &descriptor, None::<&()>).await?;
        self.output.record::<R>(&descriptor, &exchange)
    }

    pub(crate) async fn list<R: Resource>(
        &mut self,
        kind: ResourceKind,
        parent: Option<&str>,
    ) -> Result<(), Error> {
        let descriptor = Descriptor::new(Action::List, kind, parent, None);
        let exchange = executor::execute(&self.endpoint, &descriptor, None::<&()>).await?;
        self.output.collection::<R>(&descriptor, &exchange)
    }

    pub(crate) async fn modify<R, B>(
        &mut self,
        kind: ResourceKind,
        id: &str,
        body: &B,
    ) -> Result<(), Error>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        let descriptor = Descriptor::new(Action::Update, kind, None, Some(id));
        let exchange = executor::execute(&self.endpoint, &descriptor, Some(body)).await?;
        self.output.record::<R>(&descriptor, &exchange)
    }

    pub(crate) async fn remove(
        &mut self,
        kind: ResourceKind,
        parent: Option<&str>,
        id: &str,
    ) -> Result<(), Error> {
        let descriptor = Descriptor::new(Action::Delete, kind, parent, Some(id));
        let exchange = executor::execute(&self.endpoint, &descriptor, None::<&()>).await?;
        self.output.deleted(&descriptor, id, &exchange)
    }
}
