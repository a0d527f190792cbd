pub mod json_client;
pub mod request_queue;
pub mod retry_policy;

pub use json_client::JsonClient;
pub use request_queue::RequestQueue;
pub use retry_policy::QueueConfig;
