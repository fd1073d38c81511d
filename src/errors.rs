use diesel::result::Error as DieselError;

/// Storage-level failures. The repository performs no retry; anything the
/// store rejects propagates unchanged to the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Diesel error: {0}")]
    DieselError(#[from] DieselError),
    #[error("Pool error: {0}")]
    PoolError(#[from] r2d2::Error),
}
