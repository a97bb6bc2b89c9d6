#[tokio::main]
async fn main() -> anyhow::Result<()> {
    simple_flashcards_server::run().await
}
