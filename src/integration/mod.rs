//! Adapters for the external services.
//!
//! Each service is held as an [`Integration`], so whether it is turned on is a
//! typed question rather than a null check. [`Integrations`] is an immutable
//! registry built from an [`IntegrationsConfig`] snapshot; [`IntegrationsHandle`]
//! swaps the active registry when settings change.

pub mod http;
pub mod media_manager;
pub mod overseerr;
pub mod prowlarr;
pub mod qbittorrent;

use std::{
    fmt,
    sync::{Arc, RwLock},
};

use crate::{
    config::IntegrationsConfig,
    error::{config::ConfigError, integration::IntegrationError},
};

use self::{
    media_manager::{RadarrClient, SonarrClient},
    overseerr::OverseerrClient,
    prowlarr::ProwlarrClient,
    qbittorrent::QBittorrentClient,
};

/// External services removarr talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Sonarr,
    Radarr,
    Overseerr,
    Prowlarr,
    QBittorrent,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sonarr => "sonarr",
            Self::Radarr => "radarr",
            Self::Overseerr => "overseerr",
            Self::Prowlarr => "prowlarr",
            Self::QBittorrent => "qbittorrent",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single service that is either switched off or ready to use.
#[derive(Debug)]
pub enum Integration<C> {
    Disabled,
    Enabled(C),
}

impl<C> Integration<C> {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Returns the client when the service is enabled.
    pub fn enabled(&self) -> Option<&C> {
        match self {
            Self::Enabled(client) => Some(client),
            Self::Disabled => None,
        }
    }

    /// Returns the client or a [`ConfigError::IntegrationDisabled`] naming the service.
    pub fn require(&self, service: Service) -> Result<&C, ConfigError> {
        self.enabled()
            .ok_or(ConfigError::IntegrationDisabled(service))
    }
}

/// Registry of every integration, built from one config snapshot.
#[derive(Debug)]
pub struct Integrations {
    pub sonarr: Integration<SonarrClient>,
    pub radarr: Integration<RadarrClient>,
    pub overseerr: Integration<OverseerrClient>,
    pub prowlarr: Integration<ProwlarrClient>,
    pub qbittorrent: Integration<QBittorrentClient>,
}

impl Integrations {
    /// Creates fresh adapter instances for every configured service.
    ///
    /// # Arguments
    /// - `config` - Settings snapshot; services set to `None` stay disabled
    ///
    /// # Returns
    /// - `Ok(Integrations)` - Registry with one entry per service
    /// - `Err(IntegrationError)` - An HTTP client could not be constructed
    pub fn from_config(config: &IntegrationsConfig) -> Result<Self, IntegrationError> {
        let timeout = config.request_timeout;

        Ok(Self {
            sonarr: match &config.sonarr {
                Some(c) => Integration::Enabled(SonarrClient::new(c, timeout)?),
                None => Integration::Disabled,
            },
            radarr: match &config.radarr {
                Some(c) => Integration::Enabled(RadarrClient::new(c, timeout)?),
                None => Integration::Disabled,
            },
            overseerr: match &config.overseerr {
                Some(c) => Integration::Enabled(OverseerrClient::new(c, timeout)?),
                None => Integration::Disabled,
            },
            prowlarr: match &config.prowlarr {
                Some(c) => Integration::Enabled(ProwlarrClient::new(c, timeout)?),
                None => Integration::Disabled,
            },
            qbittorrent: match &config.qbittorrent {
                Some(c) => Integration::Enabled(QBittorrentClient::new(c, timeout)?),
                None => Integration::Disabled,
            },
        })
    }
}

/// Shared pointer to the active [`Integrations`] registry.
///
/// Callers take one [`snapshot`](Self::snapshot) per operation and keep using it
/// even if the registry is replaced mid-way. The handle also keeps the config
/// the active registry was built from, so every reload path agrees on whether
/// settings changed.
#[derive(Clone)]
pub struct IntegrationsHandle {
    active: Arc<RwLock<Active>>,
}

struct Active {
    config: IntegrationsConfig,
    integrations: Arc<Integrations>,
}

impl IntegrationsHandle {
    /// Builds the registry for `config` and makes it active.
    pub fn from_config(config: IntegrationsConfig) -> Result<Self, IntegrationError> {
        let integrations = Arc::new(Integrations::from_config(&config)?);

        Ok(Self {
            active: Arc::new(RwLock::new(Active {
                config,
                integrations,
            })),
        })
    }

    pub fn snapshot(&self) -> Arc<Integrations> {
        let guard = self.active.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard.integrations)
    }

    /// Config the active registry was built from.
    pub fn config(&self) -> IntegrationsConfig {
        let guard = self.active.read().unwrap_or_else(|e| e.into_inner());
        guard.config.clone()
    }

    /// Rebuilds and atomically installs the registry if `config` differs from the active one.
    ///
    /// # Returns
    /// - `Ok(true)` - A new registry is active
    /// - `Ok(false)` - Config unchanged; existing adapters (and their sessions) are kept
    /// - `Err(IntegrationError)` - A client could not be built; the active registry is unchanged
    pub fn apply(&self, config: IntegrationsConfig) -> Result<bool, IntegrationError> {
        let mut guard = self.active.write().unwrap_or_else(|e| e.into_inner());
        if guard.config == config {
            return Ok(false);
        }

        guard.integrations = Arc::new(Integrations::from_config(&config)?);
        guard.config = config;

        Ok(true)
    }
}
