use clinic_scheduler_sdk::ClinicSDK;
use wiremock::MockServer;

// Stand up a mock scheduling backend and an SDK pointed at it
pub async fn spawn_backend() -> (MockServer, ClinicSDK) {
    let server = MockServer::start().await;
    let sdk = ClinicSDK::new(server.uri(), "test-api-token");
    (server, sdk)
}
