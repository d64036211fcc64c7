use crate::api_client::StatsClient;
use crate::config::Config;
use crate::handlers;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, Message};
use teloxide::update_listeners::webhooks;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Region code as typed.
    Stats(String),
    About,
    Help,
}

impl Command {
    /// Recognizes `/stats <code>`, `/about` and `/help`. A `@suffix` on the
    /// command must name this bot. Anything else is not a command for us.
    pub fn parse(text: &str, bot_name: &str) -> Option<Self> {
        let text = text.trim();
        let (head, arg) = match text.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (text, ""),
        };
        let name = match head.split_once('@') {
            Some((name, mention)) if mention.eq_ignore_ascii_case(bot_name) => name,
            Some(_) => return None,
            None => head,
        };

        match name {
            "/stats" if !arg.is_empty() => Some(Command::Stats(arg.to_string())),
            "/about" => Some(Command::About),
            "/help" => Some(Command::Help),
            _ => None,
        }
    }
}

fn command_menu() -> Vec<BotCommand> {
    vec![
        BotCommand::new("stats", "latest figures for a region, e.g. /stats KL"),
        BotCommand::new("help", "list region codes"),
        BotCommand::new("about", "about this bot"),
    ]
}

pub async fn start_bot(bot: Bot, config: Config) -> Result<()> {
    info!("Bot is starting...");

    let stats = Arc::new(StatsClient::new(config.stats_url.clone()));
    stats.probe().await;

    let me = bot.get_me().await.context("Failed to fetch bot info")?;
    let bot_name = Arc::new(me.user.username.clone().unwrap_or_default());
    info!("Running as @{}", bot_name);

    if let Err(e) = bot.set_my_commands(command_menu()).await {
        warn!("Failed to register command menu: {} (continuing anyway)", e);
    }

    let handler = Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let stats = stats.clone();
        let bot_name = bot_name.clone();
        async move { handle_commands(bot, msg, stats, bot_name).await }
    });

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .enable_ctrlc_handler()
        .build();

    match config.webhook_url {
        Some(url) => {
            let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
            info!("Listening for webhook updates on {} ({})", addr, url);
            let listener = webhooks::axum(bot, webhooks::Options::new(addr, url))
                .await
                .context("Failed to set up webhook")?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            info!("No WEBHOOK_URL set, using long polling");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}

async fn handle_commands(
    bot: Bot,
    msg: Message,
    stats: Arc<StatsClient>,
    bot_name: Arc<String>,
) -> ResponseResult<()> {
    let Some(command) = msg.text().and_then(|text| Command::parse(text, &bot_name)) else {
        // Not one of ours, ignore
        return Ok(());
    };

    info!("Received {:?} from chat {}", command, msg.chat.id);

    match command {
        Command::Stats(code) => {
            handlers::handle_stats(&bot, msg.chat.id, &code, stats.as_ref()).await?;
        }
        Command::About => {
            handlers::handle_about(&bot, msg.chat.id).await?;
        }
        Command::Help => {
            handlers::handle_help(&bot, msg.chat.id).await?;
        }
    }

    Ok(())
}
