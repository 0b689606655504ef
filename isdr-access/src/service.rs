// isdr-access/src/service.rs

//! Caller-facing store-and-read-back operation.
//!
//! A query always yields a hex result string once its input is valid:
//! card statuses and host failures are encoded in that string, and only
//! bad input surfaces as an `Err`.

use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

use crate::config::SessionConfig;
use crate::constants::SW_INTERNAL_EXCEPTION;
use crate::session::ChannelSession;
use crate::transport::Transport;
use crate::types::StoreRequest;
use crate::Result;

/// Run one exchange for an already validated request.
///
/// The chain is planned before the channel is opened, so oversized
/// payloads never reach the card. Failing to open a channel, a transport
/// error and an exceeded continuation bound all report `6F00`.
pub fn run_exchange<T: Transport + ?Sized>(
    transport: &mut T,
    config: &SessionConfig,
    request: &StoreRequest,
) -> Result<String> {
    let plan = config.chainer()?.plan(request.as_hex())?;
    debug!(
        "storing {} bytes in {} block(s) on slot {}",
        request.len_bytes(),
        plan.len(),
        config.slot
    );

    let mut session = match ChannelSession::open(transport, config.slot, &config.aid) {
        Ok(session) => session,
        Err(e) => {
            warn!("cannot open channel: {}", e);
            return Ok(SW_INTERNAL_EXCEPTION.to_string());
        }
    };

    let result = match session.exchange(&plan, &config.reassembler()) {
        Ok(outcome) => outcome.into_hex(),
        Err(e) => {
            warn!("exchange on channel {} failed: {}", session.channel(), e);
            SW_INTERNAL_EXCEPTION.to_string()
        }
    };
    session.close();
    Ok(result)
}

/// Store-and-read-back service bound to one physical slot.
///
/// Requests are serialized on the transport so only one logical channel
/// is open on the slot at any time.
#[derive(Debug)]
pub struct StoreService<T> {
    transport: Mutex<T>,
    config: SessionConfig,
}

impl<T: Transport> StoreService<T> {
    pub fn new(transport: T, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport: Mutex::new(transport),
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Store `data_hex` on the applet and return the read-back result.
    ///
    /// Fails only with an invalid-argument error (see
    /// [`crate::Error::is_invalid_argument`]); everything else is reported in the
    /// returned hex string.
    pub fn query(&self, data_hex: &str) -> Result<String> {
        let request = StoreRequest::try_from(data_hex)?;
        // A panic mid-exchange already closed its channel on unwind.
        let mut transport = self.transport.lock().unwrap_or_else(PoisonError::into_inner);
        run_exchange(&mut *transport, &self.config, &request)
    }

    /// Direct access to the transport, e.g. to inspect a mock.
    pub fn transport_mut(&mut self) -> &mut T {
        self.transport.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_transport(self) -> T {
        self.transport.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(feature = "async")]
pub use self::nonblocking::{AsyncStore, AsyncStoreService};

#[cfg(feature = "async")]
mod nonblocking {
    use std::sync::Arc;

    use async_trait::async_trait;
    use log::warn;
    use tokio::sync::Mutex;

    use super::run_exchange;
    use crate::Result;
    use crate::config::SessionConfig;
    use crate::constants::SW_INTERNAL_EXCEPTION;
    use crate::transport::Transport;
    use crate::types::StoreRequest;

    /// Store-and-read-back for async hosts.
    #[async_trait]
    pub trait AsyncStore {
        async fn query(&self, data_hex: &str) -> Result<String>;
    }

    /// Runs the blocking exchange on tokio's blocking pool. The slot lock
    /// is held for the whole exchange.
    #[derive(Debug)]
    pub struct AsyncStoreService<T> {
        transport: Arc<Mutex<T>>,
        config: Arc<SessionConfig>,
    }

    impl<T: Transport + Send + 'static> AsyncStoreService<T> {
        pub fn new(transport: T, config: SessionConfig) -> Result<Self> {
            config.validate()?;
            Ok(Self {
                transport: Arc::new(Mutex::new(transport)),
                config: Arc::new(config),
            })
        }

        pub fn config(&self) -> &SessionConfig {
            &self.config
        }
    }

    impl<T> Clone for AsyncStoreService<T> {
        fn clone(&self) -> Self {
            Self {
                transport: Arc::clone(&self.transport),
                config: Arc::clone(&self.config),
            }
        }
    }

    #[async_trait]
    impl<T: Transport + Send + 'static> AsyncStore for AsyncStoreService<T> {
        async fn query(&self, data_hex: &str) -> Result<String> {
            let request = StoreRequest::try_from(data_hex)?;
            let mut transport = Arc::clone(&self.transport).lock_owned().await;
            let config = Arc::clone(&self.config);

            let joined = tokio::task::spawn_blocking(move || {
                run_exchange(&mut *transport, &config, &request)
            })
            .await;
            match joined {
                Ok(result) => result,
                Err(e) => {
                    warn!("exchange task did not complete: {}", e);
                    Ok(SW_INTERNAL_EXCEPTION.to_string())
                }
            }
        }
    }

}
