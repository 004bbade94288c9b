//! Miner API client.
//!
//! [`Client`] turns each API command into one method. Every call opens its
//! own connection, so a client can be cloned freely and used from several
//! tasks at once; nothing is shared between calls except configuration.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::command::{self, Command};
use crate::connection::Connection;
use crate::error::Result;
use crate::response::{
    DevDetailsResponse, DevsResponse, PoolsResponse, Response, StatsResponse, SummaryResponse,
    VersionResponse, exactly_one,
};
use crate::stats::GenericStats;
use crate::transport::{JsonTransport, Transport};
use crate::types::{Device, DeviceDetail, Pool, Summary, Version};

/// Default API port of cgminer and bmminer.
pub const DEFAULT_PORT: u16 = 4028;

/// Default budget for the dial, and separately for the request round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how patiently to talk to the miner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `host:port` of the API listener.
    pub addr: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            addr: format!("127.0.0.1:{DEFAULT_PORT}"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for one miner.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    shutdown: CancellationToken,
}

impl Client {
    /// Client for `addr` with the default timeout.
    pub fn new(addr: impl Into<String>) -> Self {
        Self::with_config(ClientConfig {
            addr: addr.into(),
            ..ClientConfig::default()
        })
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            transport: Arc::new(JsonTransport::new()),
            shutdown: CancellationToken::new(),
        }
    }

    /// Replace the wire encoding.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Abort in-flight calls when `shutdown` is cancelled.
    ///
    /// Calls made after cancellation fail immediately with a connect error.
    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn connect(&self) -> Result<Connection> {
        Connection::connect(
            &self.config.addr,
            self.config.timeout,
            self.shutdown.clone(),
        )
        .await
    }

    /// Issue `command` and decode the whole envelope into `R`.
    ///
    /// For commands without a dedicated method.
    pub async fn call<R: Response>(&self, command: &Command) -> Result<R> {
        self.connect()
            .await?
            .execute(self.transport.as_ref(), command)
            .await
    }

    /// Issue `command` and only check its status.
    ///
    /// An empty or undecodable reply counts as success.
    pub async fn call_discard(&self, command: &Command) -> Result<()> {
        self.connect()
            .await?
            .execute_discard(self.transport.as_ref(), command)
            .await
    }

    pub async fn version(&self) -> Result<Version> {
        let response: VersionResponse = self.call(&Command::new(command::VERSION)).await?;
        exactly_one(response.version, "VERSION")
    }

    pub async fn summary(&self) -> Result<Summary> {
        let response: SummaryResponse = self.call(&Command::new(command::SUMMARY)).await?;
        exactly_one(response.summary, "SUMMARY")
    }

    /// Board statistics, in the model-independent shape.
    ///
    /// Use [`GenericStats::narrow`] or one of its shorthands to get the
    /// fields of a specific model.
    pub async fn stats(&self) -> Result<GenericStats> {
        let response: StatsResponse = self.call(&Command::new(command::STATS)).await?;
        exactly_one(response.stats, "STATS")
    }

    pub async fn devs(&self) -> Result<Vec<Device>> {
        let response: DevsResponse = self.call(&Command::new(command::DEVS)).await?;
        Ok(response.devs)
    }

    pub async fn dev_details(&self) -> Result<Vec<DeviceDetail>> {
        let response: DevDetailsResponse = self.call(&Command::new(command::DEVDETAILS)).await?;
        Ok(response.dev_details)
    }

    pub async fn pools(&self) -> Result<Vec<Pool>> {
        let response: PoolsResponse = self.call(&Command::new(command::POOLS)).await?;
        Ok(response.pools)
    }

    /// Add a pool. None of the values may contain a comma.
    pub async fn add_pool(&self, url: &str, user: &str, password: &str) -> Result<()> {
        let parameter = format!("{url},{user},{password}");
        self.call_discard(&Command::with_parameter(command::ADDPOOL, parameter))
            .await
    }

    pub async fn enable_pool(&self, pool_id: i64) -> Result<()> {
        self.pool_command(command::ENABLEPOOL, pool_id).await
    }

    pub async fn disable_pool(&self, pool_id: i64) -> Result<()> {
        self.pool_command(command::DISABLEPOOL, pool_id).await
    }

    pub async fn remove_pool(&self, pool_id: i64) -> Result<()> {
        self.pool_command(command::REMOVEPOOL, pool_id).await
    }

    /// Make `pool_id` the active pool.
    pub async fn switch_pool(&self, pool_id: i64) -> Result<()> {
        self.pool_command(command::SWITCHPOOL, pool_id).await
    }

    async fn pool_command(&self, name: &str, pool_id: i64) -> Result<()> {
        self.call_discard(&Command::with_parameter(name, pool_id.to_string()))
            .await
    }

    /// Restart the miner process.
    pub async fn restart(&self) -> Result<()> {
        self.call_discard(&Command::new(command::RESTART)).await
    }

    /// Stop the miner process. The device may hang up without replying.
    pub async fn quit(&self) -> Result<()> {
        self.call_discard(&Command::new(command::QUIT)).await
    }
}
