// dms-client/src/client.rs
//! Client facade
//!
//! One entry point owning the transport and handing out services that share
//! it.

use crate::board::DealerOrderBoard;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::orchestrator::LifecycleOrchestrator;
use crate::services::{
    DealerOrderService, DeliveryService, IdentityService, InventoryService, OrderService,
    PaymentService, ReportService, SaleContractService,
};
use crate::session::{Session, SessionStore};
use shared::lifecycle::Role;
use std::sync::Arc;

/// Dealer management client
pub struct DmsClient<C> {
    http: Arc<C>,
}

impl<C> Clone for DmsClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

impl DmsClient<NetworkHttpClient> {
    /// Network client built from config, with the configured session store
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let session = config.build_session_store()?;
        let http = config.build_http_client(session)?;
        tracing::info!(base_url = %config.base_url, "DMS client ready");
        Ok(Self::new(http))
    }
}

#[cfg(feature = "in-process")]
impl DmsClient<crate::http::OneshotHttpClient> {
    /// Client that calls an axum `Router` directly
    pub fn in_process(router: axum::Router, session: Arc<dyn SessionStore>) -> Self {
        Self::new(crate::http::OneshotHttpClient::new(router, session))
    }
}

impl<C: HttpClient> DmsClient<C> {
    pub fn new(http: C) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    pub fn http(&self) -> &Arc<C> {
        &self.http
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        self.http.session()
    }

    /// Store the token and profile returned by sign-in
    pub fn sign_in(&self, session: Session) -> ClientResult<()> {
        let username = session.user.as_ref().map(|u| u.username.clone());
        self.session().save(session)?;
        tracing::info!(username = ?username, "Signed in");
        Ok(())
    }

    pub fn sign_out(&self) -> ClientResult<()> {
        self.session().clear()?;
        tracing::info!("Signed out");
        Ok(())
    }

    pub fn role(&self) -> Role {
        self.session().role()
    }

    pub fn orders(&self) -> OrderService<C> {
        OrderService::new(self.http.clone())
    }

    pub fn dealer_orders(&self) -> DealerOrderService<C> {
        DealerOrderService::new(self.http.clone())
    }

    pub fn payments(&self) -> PaymentService<C> {
        PaymentService::new(self.http.clone())
    }

    pub fn deliveries(&self) -> DeliveryService<C> {
        DeliveryService::new(self.http.clone())
    }

    pub fn contracts(&self) -> SaleContractService<C> {
        SaleContractService::new(self.http.clone())
    }

    pub fn reports(&self) -> ReportService<C> {
        ReportService::new(self.http.clone())
    }

    pub fn identity(&self) -> IdentityService<C> {
        IdentityService::new(self.http.clone())
    }

    pub fn inventory(&self) -> InventoryService<C> {
        InventoryService::new(self.http.clone())
    }

    pub fn orchestrator(&self) -> LifecycleOrchestrator<C> {
        LifecycleOrchestrator::new(self.http.clone())
    }

    pub fn dealer_order_board(&self) -> DealerOrderBoard<C> {
        DealerOrderBoard::new(self.http.clone())
    }
}
