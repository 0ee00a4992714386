#![allow(dead_code)]
use dns_parity_domain::ServerAddr;
use dns_parity_infrastructure::dns::forwarding::MessageBuilder;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::{RData, Record};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the UDP side of the mock reacts to a query. TCP always answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UdpMode {
    Answer,
    Truncate,
    WrongId,
    Silent,
}

#[derive(Clone)]
pub struct MockAnswers {
    pub rcode: ResponseCode,
    pub records: Vec<RData>,
}

impl MockAnswers {
    pub fn records(records: Vec<RData>) -> Self {
        Self {
            rcode: ResponseCode::NoError,
            records,
        }
    }

    pub fn rcode(rcode: ResponseCode) -> Self {
        Self {
            rcode,
            records: vec![],
        }
    }
}

/// UDP and TCP listeners on the same loopback port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(answers: MockAnswers, mode: UdpMode) -> Self {
        let (udp, tcp) = bind_pair().await;
        let addr = udp.local_addr().unwrap();
        let answers = Arc::new(answers);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = udp.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = udp_response(&buf[..len], &answers, mode) {
                                let _ = udp.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = tcp.accept() => {
                        if let Ok((stream, _)) = result {
                            tokio::spawn(serve_tcp(stream, Arc::clone(&answers)));
                        }
                    }
                }
            }
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn server_addr(&self) -> ServerAddr {
        ServerAddr::from(self.addr)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn bind_pair() -> (UdpSocket, TcpListener) {
    for _ in 0..20 {
        let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = tcp.local_addr().unwrap().port();
        if let Ok(udp) = UdpSocket::bind(("127.0.0.1", port)).await {
            return (udp, tcp);
        }
    }
    panic!("could not bind UDP and TCP on the same port");
}

async fn serve_tcp(mut stream: tokio::net::TcpStream, answers: Arc<MockAnswers>) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }

    if let Some(response) = build_response(&query, &answers, false, None) {
        let _ = stream
            .write_all(&(response.len() as u16).to_be_bytes())
            .await;
        let _ = stream.write_all(&response).await;
    }
}

fn udp_response(query: &[u8], answers: &MockAnswers, mode: UdpMode) -> Option<Vec<u8>> {
    match mode {
        UdpMode::Answer => build_response(query, answers, false, None),
        UdpMode::Truncate => build_response(query, answers, true, None),
        UdpMode::WrongId => {
            let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
            build_response(query, answers, false, Some(id))
        }
        UdpMode::Silent => None,
    }
}

fn build_response(
    query_bytes: &[u8],
    answers: &MockAnswers,
    truncated: bool,
    id_override: Option<u16>,
) -> Option<Vec<u8>> {
    let query = Message::from_vec(query_bytes).ok()?;
    let question = query.queries().first()?.clone();

    let id = id_override.unwrap_or_else(|| query.id());
    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.set_recursion_desired(query.recursion_desired());
    response.set_recursion_available(true);
    response.set_response_code(answers.rcode);
    response.add_query(question.clone());

    if truncated {
        response.set_truncated(true);
    } else {
        for rdata in &answers.records {
            response.add_answer(Record::from_rdata(
                question.name().clone(),
                60,
                rdata.clone(),
            ));
        }
    }

    MessageBuilder::serialize_message(&response).ok()
}
