/// Smoke-test endpoint
pub async fn hello_handler() -> &'static str {
    "hello world"
}
