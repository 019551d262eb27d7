use super::ChatRequest;

#[derive(Debug)]
pub enum Action {
    BackendHealthCheck(),
    ChatRequest(String, ChatRequest),
}
