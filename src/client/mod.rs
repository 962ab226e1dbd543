use crate::config::ConsumerConfig;
use crate::error::ConsumerError;
use crate::stream;
use log::{info, trace, warn};
use solace_consumer_message::frame::Frame;
use solace_consumer_message::meta::{BindInfo, ConnectInfo, QueueAccess};
use solace_consumer_message::PktType;
use std::fs::File;
use std::io::Read;
use tokio::{io::AsyncWriteExt, net::TcpStream};
use tokio_native_tls::native_tls::{Certificate, TlsConnector};
use tokio_native_tls::TlsStream;

/// default broker port when the host uri does not carry one.
const DEFAULT_PORT: u16 = 55555;

/// transport endpoint parsed from the host uri.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub tls: bool,
}

impl Endpoint {
    /// parses `tcp://host:port` or `tcps://host:port`; the port is optional.
    pub fn parse(uri: &str) -> Result<Endpoint, ConsumerError> {
        let (tls, rest) = if let Some(rest) = uri.strip_prefix("tcps://") {
            (true, rest)
        } else if let Some(rest) = uri.strip_prefix("tcp://") {
            (false, rest)
        } else {
            (false, uri)
        };

        let (host, port) = match rest.rsplit_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| {
                    ConsumerError::Connection(format!("invalid port in host uri `{uri}`"))
                })?;
                (host.to_string(), port)
            }
            None => (rest.to_string(), DEFAULT_PORT),
        };

        if host.is_empty() {
            return Err(ConsumerError::Connection(format!(
                "invalid host uri `{uri}`"
            )));
        }

        Ok(Endpoint { host, port, tls })
    }
}

/// Stream for plain and tls connections
#[derive(Debug)]
pub enum StreamType {
    Tcp(TcpStream),
    Tls(TlsStream<TcpStream>),
}

impl StreamType {
    async fn read_frame(&mut self) -> anyhow::Result<Frame> {
        match self {
            StreamType::Tcp(stream) => stream::read_frame(stream).await,
            StreamType::Tls(stream) => stream::read_frame(stream).await,
        }
    }

    async fn write_all(&mut self, frame: Vec<u8>) -> anyhow::Result<()> {
        match self {
            StreamType::Tcp(ref mut stream) => stream.write_all(&frame).await?,
            StreamType::Tls(stream) => stream.write_all(&frame).await?,
        };
        Ok(())
    }
}

/// broker client: the thin call surface the consumer drives.
///
/// one session, one destination; the caller sequences connect, subscribe or
/// bind, the read loop and disconnect.
#[derive(Debug)]
pub struct Client {
    pub endpoint: Endpoint,
    cert: Option<String>,
    stream: Option<StreamType>,
}

impl Client {
    /// Creates a new `Client` for the configured host.
    pub fn new(config: &ConsumerConfig) -> Result<Client, ConsumerError> {
        let endpoint = Endpoint::parse(&config.host)?;
        Ok(Client {
            endpoint,
            cert: config.cert.clone(),
            stream: None,
        })
    }

    async fn connect_tls(&mut self, addr: String) -> anyhow::Result<()> {
        let mut builder = TlsConnector::builder();
        if let Some(cert) = &self.cert {
            // Load CA certificate
            let mut file = File::open(cert)?;
            let mut ca_cert = vec![];
            file.read_to_end(&mut ca_cert)?;
            let ca_cert = Certificate::from_pem(&ca_cert)?;
            builder.add_root_certificate(ca_cert);
        }
        let connector = tokio_native_tls::TlsConnector::from(builder.build()?);

        let stream = TcpStream::connect(addr).await?;
        let domain = self.endpoint.host.clone();
        self.stream = Some(StreamType::Tls(connector.connect(&domain, stream).await?));
        Ok(())
    }

    /// Connects the transport and opens the session.
    pub async fn connect(&mut self, info: &ConnectInfo) -> Result<(), ConsumerError> {
        let addr = format!("{}:{}", self.endpoint.host, self.endpoint.port);
        info!("connecting to: {addr}");

        let connected = if self.endpoint.tls {
            self.connect_tls(addr).await
        } else {
            match TcpStream::connect(addr).await {
                Ok(stream) => {
                    self.stream = Some(StreamType::Tcp(stream));
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        };
        if let Err(e) = connected {
            return Err(ConsumerError::Connection(e.to_string()));
        }

        let frame = Frame::connect(info).map_err(|e| ConsumerError::Connection(e.to_string()))?;
        let response = self
            .request(frame)
            .await
            .map_err(|e| ConsumerError::Connection(e.to_string()))?;
        expect_ack(response, PktType::CONNECTACK, ConsumerError::Connection)?;
        info!("session opened on vpn `{}`", info.vpn);
        Ok(())
    }

    /// subscribes to the given topic pattern.
    pub async fn subscribe(&mut self, pattern: &str) -> Result<(), ConsumerError> {
        let frame = Frame::subscribe(pattern.to_string())
            .map_err(|e| ConsumerError::Subscription(e.to_string()))?;
        let response = self
            .request(frame)
            .await
            .map_err(|e| ConsumerError::Subscription(e.to_string()))?;
        expect_ack(response, PktType::SUBSCRIBEACK, ConsumerError::Subscription)?;
        info!("subscribed to topic `{pattern}`");
        Ok(())
    }

    /// binds to the given queue.
    pub async fn bind(&mut self, queue: &str, access: QueueAccess) -> Result<(), ConsumerError> {
        let frame = Frame::bind(queue.to_string(), &BindInfo { access })
            .map_err(|e| ConsumerError::Subscription(e.to_string()))?;
        let response = self
            .request(frame)
            .await
            .map_err(|e| ConsumerError::Subscription(e.to_string()))?;
        expect_ack(response, PktType::BINDACK, ConsumerError::Subscription)?;
        info!("bound to {access} queue `{queue}`");
        Ok(())
    }

    /// acknowledges the given delivery; fire and forget.
    pub async fn ack(&mut self, delivery_id: u64) -> anyhow::Result<()> {
        let frame = Frame::ack(delivery_id)?;
        self.write(frame.bytes()).await
    }

    /// removes the topic subscription; used during teardown only.
    pub async fn unsubscribe(&mut self, pattern: &str) -> anyhow::Result<()> {
        // no response wait: deliveries may still be in flight on the stream.
        let frame = Frame::unsubscribe(pattern.to_string())?;
        self.write(frame.bytes()).await
    }

    /// Sends the frame and returns the broker's response frame.
    pub async fn request(&mut self, frame: Frame) -> anyhow::Result<Frame> {
        trace!("request frame: {:?}", frame);
        self.write(frame.bytes()).await?;
        let response = self.read_frame().await?;
        trace!("response frame: {:?}", response);
        Ok(response)
    }

    /// closes the session; best-effort, failures are logged and swallowed.
    pub async fn disconnect(&mut self) {
        if let Err(e) = self.write(Frame::disconnect().bytes()).await {
            warn!("error while disconnecting: {e}");
        }
        self.stream = None;
        info!("disconnected");
    }

    pub async fn write(&mut self, frame: Vec<u8>) -> anyhow::Result<()> {
        match &mut self.stream {
            Some(stream) => stream.write_all(frame).await,
            None => Err(ConsumerError::ClientNotConnected.into()),
        }
    }

    pub async fn read_frame(&mut self) -> anyhow::Result<Frame> {
        match &mut self.stream {
            Some(stream) => stream.read_frame().await,
            None => Err(ConsumerError::ClientNotConnected.into()),
        }
    }
}

/// maps a non-ack response to the right fatal error.
fn expect_ack(
    response: Frame,
    expected: PktType,
    fatal: fn(String) -> ConsumerError,
) -> Result<(), ConsumerError> {
    if response.header.pkt_type == expected {
        return Ok(());
    }
    if response.header.pkt_type == PktType::ERROR {
        let diagnostic = String::from_utf8_lossy(&response.payload).to_string();
        return Err(fatal(diagnostic));
    }
    Err(ConsumerError::UnexpectedFrame(
        response.header.pkt_type.to_string(),
    ))
}
