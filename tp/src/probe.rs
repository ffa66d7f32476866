//! Port probe
//!
//! Checks whether something is already listening on the renderer's port.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use log::{debug, warn};

/// How long a single connect attempt may take
const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// True when a listener accepts a TCP connection on `host:port`
///
/// The probe connection is closed before returning. The answer is advisory:
/// the port can be taken between this check and the renderer starting.
pub fn is_port_bound(host: &str, port: u16) -> bool {
    debug!("is_port_bound: host={} port={}", host, port);
    let addrs = match (host, port).to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(e) => {
            warn!("Failed to resolve {}:{}: {}", host, port, e);
            return false;
        }
    };

    for addr in addrs {
        match TcpStream::connect_timeout(&addr, PROBE_TIMEOUT) {
            Ok(_stream) => {
                debug!("is_port_bound: {} accepted a connection", addr);
                return true;
            }
            Err(e) => debug!("is_port_bound: {} not reachable: {}", addr, e),
        }
    }

    false
}
