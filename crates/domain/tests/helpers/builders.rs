#![allow(dead_code)]
use dns_parity_domain::{Divergence, ServerAddr, ServerResult};

pub struct ServerResultBuilder {
    server: ServerAddr,
    answers: Vec<String>,
}

impl ServerResultBuilder {
    pub fn new() -> Self {
        Self {
            server: ServerAddr::new("192.0.2.1", 53),
            answers: vec![],
        }
    }

    pub fn server(mut self, server: &str) -> Self {
        self.server = server.parse().unwrap();
        self
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.answers.push(answer.to_string());
        self
    }

    pub fn build(self) -> ServerResult {
        ServerResult::new(self.server, self.answers.join("\n"))
    }
}

impl Default for ServerResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn divergence(reference: ServerResult, divergent: ServerResult) -> Divergence {
    Divergence {
        reference,
        divergent,
    }
}
