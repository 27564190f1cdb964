#![allow(dead_code)]
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

const TYPE_PTR: u16 = 12;

/// UDP server answering PTR questions from a fixed table. Unknown names get
/// NXDOMAIN.
pub struct MockPtrServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockPtrServer {
    /// `records` maps reverse names (`1.0.0.10.in-addr.arpa`) to PTR targets.
    pub async fn start(records: Vec<(&str, &str)>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let table: Arc<HashMap<String, String>> = Arc::new(
            records
                .into_iter()
                .map(|(name, target)| (name.to_ascii_lowercase(), target.to_string()))
                .collect(),
        );

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&buf[..len], &table) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(query: &[u8], table: &HashMap<String, String>) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (qname, question_end) = read_name(query, 12)?;
        if question_end + 4 > query.len() {
            return None;
        }
        let qtype = u16::from_be_bytes([query[question_end], query[question_end + 1]]);
        let question = &query[12..question_end + 4];

        let answer = if qtype == TYPE_PTR {
            table.get(&qname.to_ascii_lowercase())
        } else {
            None
        };

        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]);
        // QR | RD | RA, rcode NOERROR or NXDOMAIN
        response.push(0x81);
        response.push(if answer.is_some() { 0x80 } else { 0x83 });
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, if answer.is_some() { 0x01 } else { 0x00 }]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(question);

        if let Some(target) = answer {
            let rdata = encode_name(target);
            response.extend_from_slice(&[0xc0, 0x0c]);
            response.extend_from_slice(&TYPE_PTR.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01]);
            response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        Some(response)
    }
}

impl Drop for MockPtrServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn read_name(packet: &[u8], mut pos: usize) -> Option<(String, usize)> {
    let mut labels = Vec::new();
    loop {
        let len = *packet.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = packet.get(pos..pos + len)?;
        labels.push(String::from_utf8_lossy(label).into_owned());
        pos += len;
    }
    Some((labels.join("."), pos))
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}
