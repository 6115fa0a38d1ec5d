//! Store error type

/// Database error, split by whether the store was reachable at all
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The store could not be reached (connect, I/O, TLS, pool exhaustion)
    #[error("Connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement failed against a reachable store
    #[error("database error: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::Connection(e),
            _ => Self::Query(e),
        }
    }
}
