#[tokio::main]
async fn main() -> anyhow::Result<()> {
    asma_server::run().await
}
