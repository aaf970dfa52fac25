//! Opening and closing database connections from an explicit [`DbConfig`].
use std::fmt;

use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{Error, Result};

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub url: String,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub trait Connect: Sized {
    type Error: fmt::Display;

    fn connect(config: &DbConfig) -> std::result::Result<Self, Self::Error>;
}

pub trait Close {
    type Error: fmt::Display;

    fn close(self) -> std::result::Result<(), Self::Error>;
}

pub fn open<C: Connect>(config: &DbConfig) -> Result<C> {
    debug!(url = %config.url, user = %config.user, "opening connection");
    C::connect(config).map_err(|e| {
        error!("open: {e}");
        Error::Connection(e.to_string())
    })
}

/// Closes `connection` if there is one. A failure to close is logged and otherwise ignored.
pub fn close_quietly<C: Close>(connection: Option<C>) {
    let Some(connection) = connection else {
        return;
    };
    if let Err(e) = connection.close() {
        counter!("db::close_failed").increment(1);
        error!("close_quietly: {e}");
    }
}

/// Opens a connection, hands it to `f` and closes it quietly afterwards.
pub fn with_connection<C, F, T>(config: &DbConfig, f: F) -> Result<T>
where
    C: Connect + Close,
    F: FnOnce(&mut C) -> Result<T>,
{
    let mut connection: C = open(config)?;
    let result = f(&mut connection);
    close_quietly(Some(connection));
    result
}

#[cfg(feature = "postgres")]
mod postgres {
    use r2d2_postgres::postgres::{Client, Config, Error, NoTls};

    use super::{Close, Connect, DbConfig};

    impl Connect for Client {
        type Error = Error;

        fn connect(config: &DbConfig) -> Result<Self, Error> {
            let mut pg: Config = config.url.parse()?;
            if !config.user.is_empty() {
                pg.user(&config.user);
            }
            if !config.password.is_empty() {
                pg.password(&config.password);
            }
            pg.connect(NoTls)
        }
    }

    impl Close for Client {
        type Error = Error;

        fn close(self) -> Result<(), Error> {
            Client::close(self)
        }
    }
}
