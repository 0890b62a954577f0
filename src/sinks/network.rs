//! Network sink for remote logging
//!
//! Sends log lines to a remote collector over TCP, one line per write.

use crate::core::{LogError, Result, Sink};
use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Sink forwarding log lines to a remote TCP collector.
///
/// # Example
///
/// ```no_run
/// use proxylog::sinks::NetworkSink;
///
/// let sink = NetworkSink::new("127.0.0.1:8514")
///     .expect("failed to connect to log collector");
/// ```
pub struct NetworkSink {
    stream: Option<TcpStream>,
    address: String,
    reconnect_on_error: bool,
}

impl NetworkSink {
    /// Connect to `addr` (e.g. `"logs.internal:8514"`).
    pub fn new(addr: impl ToSocketAddrs + ToString) -> Result<Self> {
        let address = addr.to_string();
        let stream = Self::connect(&address)?;

        Ok(Self {
            stream: Some(stream),
            address,
            reconnect_on_error: true,
        })
    }

    /// Enable or disable automatic reconnection on errors.
    ///
    /// Default: enabled
    #[must_use]
    pub fn with_reconnect(mut self, enable: bool) -> Self {
        self.reconnect_on_error = enable;
        self
    }

    fn connect(address: &str) -> Result<TcpStream> {
        let stream = TcpStream::connect(address)?;
        stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
        stream.set_nodelay(true)?;
        Ok(stream)
    }
}

impl Sink for NetworkSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut payload = line.to_string();
        payload.push('\n');

        let result = match self.stream {
            Some(ref mut stream) => stream.write_all(payload.as_bytes()),
            None => return Err(LogError::NotConnected("network".to_string())),
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                // Connection lost
                self.stream = None;

                if !self.reconnect_on_error {
                    return Err(e.into());
                }

                match Self::connect(&self.address) {
                    Ok(mut stream) => {
                        stream.write_all(payload.as_bytes())?;
                        self.stream = Some(stream);
                        Ok(())
                    }
                    Err(reconnect_err) => Err(LogError::sink(
                        "network",
                        format!(
                            "failed to send and reconnect: {} (reconnect: {})",
                            e, reconnect_err
                        ),
                    )),
                }
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut stream) = self.stream {
            stream.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "network"
    }
}

impl Drop for NetworkSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
