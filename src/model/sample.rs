use super::{Server, ServerList};

pub const SAMPLE_FILE_NAME: &str = "myservers.json";

/// Compiled-in servers shown at startup
pub fn sample_server_list() -> ServerList {
    let servers = vec![
        Server::new("localhost", "tcp://localhost:61616")
            .with_queues(["queue1", "queue2", "queue3"])
            .with_topics(["topic1", "SystemAlerts", "notifications"]),
        Server::new("www.bekwam.com", "tcp://www.bekwam.com:61616")
            .with_queues(["Inbound", "Outbound", "ExpiryQueue", "DLQ"])
            .with_topics(["MyTopic"]),
        Server::new("www.bekwam.net", "tcp://www.bekwam.net:61616")
            .with_queues(["queueA", "queueB"])
            .with_topics(["topicA"]),
    ];

    ServerList::new(SAMPLE_FILE_NAME, servers)
}
