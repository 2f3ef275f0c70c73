use dotenvy::dotenv;
use keyshop_bot::{cli::handle_command_line_args, config::BotConfig, server::run_bot};
use log::info;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    if handle_command_line_args() {
        return;
    }
    let config = BotConfig::from_env_or_default();

    info!("🚀️ Starting the key shop bot");
    match run_bot(config).await {
        Ok(_) => println!("Bye!"),
        Err(e) => eprintln!("{e}"),
    }
}
