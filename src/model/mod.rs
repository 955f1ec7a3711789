//! Broker resource model: ServerList -> Server -> Queue/Topic endpoints
use serde::{Deserialize, Serialize};

mod sample;
pub use sample::{sample_server_list, SAMPLE_FILE_NAME};

// ---------- Endpoint ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EndpointKind {
    Queue,
    Topic,
}

impl EndpointKind {
    /// Suffix shown after the endpoint name in the tree ("QUEUE" / "TOPIC")
    pub fn tag(&self) -> &'static str {
        match self {
            EndpointKind::Queue => "QUEUE",
            EndpointKind::Topic => "TOPIC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub kind: EndpointKind,
}

impl Endpoint {
    pub fn queue(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EndpointKind::Queue }
    }

    pub fn topic(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EndpointKind::Topic }
    }
}

// ---------- Server ----------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub queues: Vec<Endpoint>,
    #[serde(default)]
    pub topics: Vec<Endpoint>,
}

impl Server {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            queues: Vec::new(),
            topics: Vec::new(),
        }
    }

    pub fn with_queues<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queues.extend(names.into_iter().map(Endpoint::queue));
        self
    }

    pub fn with_topics<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics.extend(names.into_iter().map(Endpoint::topic));
        self
    }
}

// ---------- ServerList ----------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerList {
    pub file_name: String,
    #[serde(default)]
    pub servers: Vec<Server>,
}

impl ServerList {
    pub fn new(file_name: impl Into<String>, servers: Vec<Server>) -> Self {
        Self { file_name: file_name.into(), servers }
    }

    pub fn server(&self, index: usize) -> Option<&Server> {
        self.servers.get(index)
    }
}
