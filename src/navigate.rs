// src/navigate.rs

use tracing::{info, instrument};

use crate::error::Result;
use crate::login::INDEX_PATH;
use crate::session::Transport;

/// Point the server-side session at `database`.
///
/// Two GETs: the bare index (refreshes the database list, body discarded),
/// then the index scoped to the database. Only transport failures count.
#[instrument(level = "info", skip(transport))]
pub fn navigate_to_database<T: Transport>(transport: &T, database: &str) -> Result<()> {
    transport.get(INDEX_PATH, &[])?;
    transport.get(INDEX_PATH, &[("db", database)])?;
    info!(%database, "switched database");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::ScriptedTransport;

    #[test]
    fn issues_index_then_database_get() {
        let t = ScriptedTransport::new().reply("<p>dbs</p>").reply("<p>testDB</p>");
        navigate_to_database(&t, "testDB").unwrap();

        let reqs = t.requests();
        assert_eq!(reqs.len(), 2);
        assert!(reqs.iter().all(|r| r.method == "GET" && r.path == "index.php"));
        assert!(reqs[0].params.is_empty());
        assert_eq!(reqs[1].param("db"), Some("testDB"));
        assert_eq!(reqs[1].param("table"), None);
    }

    #[test]
    fn page_content_is_not_inspected() {
        let t = ScriptedTransport::new().reply("").reply("<h1>error-looking page</h1>");
        assert!(navigate_to_database(&t, "testDB").is_ok());
    }

    #[test]
    fn stops_on_first_transport_failure() {
        let t = ScriptedTransport::new().fail_status(502).reply("unused");
        let err = navigate_to_database(&t, "testDB").unwrap_err();
        assert!(err.is_transport());
        assert_eq!(t.requests().len(), 1);
        assert_eq!(t.remaining(), 1);
    }
}
