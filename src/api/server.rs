use crate::api::routes;
use crate::db::Database;
use std::net::SocketAddr;

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `port` - Port number to listen on for incoming HTTP connections
/// * `database_url` - Location of the SQLite database backing the API
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Ok if server starts successfully, Error if it fails
///
/// # Example
/// ```no_run
/// use pubapi::api::server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     server::launch_server(3000, "pubapi.db").await
/// }
/// ```
pub async fn launch_server(
    port: u16,
    database_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let database = Database::new(database_url);

    let app = routes::app(database);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
