mod handlers;
mod messages;

use std::sync::Arc;

use teloxide::prelude::*;
use yatrack_extract::TrackExtractor;

use crate::handlers::{Command, handle_command, handle_message};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") else {
        log::error!("TELEGRAM_BOT_TOKEN is not set");
        std::process::exit(1);
    };

    let bot = Bot::new(token);
    let extractor = Arc::new(TrackExtractor::new());

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::endpoint(handle_message));

    log::info!("starting yandex music track bot");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![extractor])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
