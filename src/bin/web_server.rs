use k_paths::web::server::{start_server, ServerConfig, PORT_ENV_VAR};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let arg = env::args().nth(1);
    let env_port = env::var(PORT_ENV_VAR).ok();
    let config = ServerConfig::from_sources(arg.as_deref(), env_port.as_deref());

    println!("🔧 Starting K Paths Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Address: {}", config.addr());
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!();

    start_server(config).await?;

    Ok(())
}
