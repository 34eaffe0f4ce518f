use crate::clients::BookingStoreClient;
use crate::clock::Clock;
use crate::config::BookingConfig;
use crate::domain::Principal;
use crate::session::{EmployeeSession, KitchenSession, SessionError};
use crate::store_actor;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the booking store actor and hands out sessions bound to it.
///
/// Every session gets a clone of the same store client, so a booking made in
/// an employee session is visible to the kitchen right away.
///
/// # Example
///
/// ```ignore
/// let system = BreakfastSystem::new(BookingConfig::from_env()?, Arc::new(SystemClock));
///
/// let mut employee = system.employee_session(Principal::employee("EMP001", "John")).await?;
/// employee.book_tomorrow(&item).await?;
///
/// drop(employee);
/// system.shutdown().await?;
/// ```
pub struct BreakfastSystem {
    store: BookingStoreClient,
    clock: Arc<dyn Clock>,
    config: BookingConfig,
    handle: tokio::task::JoinHandle<()>,
}

impl BreakfastSystem {
    /// Spawns the store actor. Must be called inside a Tokio runtime.
    pub fn new(config: BookingConfig, clock: Arc<dyn Clock>) -> Self {
        let (actor, store) = store_actor::new(config.store_buffer);
        let handle = tokio::spawn(actor.run());
        info!(
            cutoff_hour = config.cutoff_hour,
            code_ttl_minutes = config.code_ttl_minutes,
            "Breakfast system started"
        );

        Self {
            store,
            clock,
            config,
            handle,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// A client for the shared store, e.g. for seeding or inspection.
    pub fn store(&self) -> BookingStoreClient {
        self.store.clone()
    }

    pub async fn employee_session(
        &self,
        principal: Principal,
    ) -> Result<EmployeeSession<BookingStoreClient>, SessionError> {
        EmployeeSession::open(principal, self.store(), self.clock.clone(), &self.config).await
    }

    pub fn kitchen_session(
        &self,
        principal: Principal,
    ) -> Result<KitchenSession<BookingStoreClient>, SessionError> {
        KitchenSession::open(principal, self.store(), self.clock.clone())
    }

    /// Closes the store channel and waits for the actor to finish.
    ///
    /// Sessions hold their own store clients, so drop them first; otherwise
    /// the actor keeps running and this call waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down breakfast system...");
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store actor failed: {:?}", e);
            return Err(format!("Store actor failed: {:?}", e));
        }

        info!("Breakfast system shutdown complete.");
        Ok(())
    }
}
