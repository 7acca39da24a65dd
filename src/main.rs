#[tokio::main]
async fn main() {
    estate_portal::run().await;
}
