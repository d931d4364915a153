#[tokio::main]
async fn main() {
    if let Err(e) = insightify_be::start_server().await {
        eprintln!("Insightify server failed: {e}");
        std::process::exit(1);
    }
}
