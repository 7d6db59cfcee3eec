use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::InquireError;
use pogoda_core::{Config, LOOKUP_FAILED_MESSAGE, OpenWeatherProvider, SearchSession};

use crate::{prompt, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "pogoda", version, about = "Погода по названию города (OpenWeather)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Интерактивный поиск с подсказками городов.
    Interactive,

    /// Показать погоду для одного города и выйти.
    Show {
        /// Название города, например "Москва".
        city: String,
    },

    /// Сохранить ключ OpenWeather API.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Interactive => interactive().await,
            Command::Show { city } => show(&city).await,
            Command::Configure => configure(),
        }
    }
}

fn build_session() -> anyhow::Result<SearchSession<OpenWeatherProvider>> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    tracing::debug!("starting an OpenWeather session");
    Ok(SearchSession::new(OpenWeatherProvider::new(api_key)))
}

async fn interactive() -> anyhow::Result<()> {
    let mut session = build_session()?;

    println!("Погодное приложение");
    println!("Узнайте погоду в любом городе мира\n");

    loop {
        let city = match prompt::city() {
            Ok(Some(city)) => city,
            Ok(None) => break,
            Err(InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("failed to read city input"),
        };

        if city.trim().is_empty() {
            continue;
        }

        session.input(&city);
        session.submit().await;

        if let Some(message) = session.state().error() {
            println!("{message}\n");
        } else if let Some(weather) = session.state().weather() {
            println!("{}\n", render::weather_card(weather));
        }
    }

    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    if city.trim().is_empty() {
        anyhow::bail!("Название города не задано.");
    }

    let mut session = build_session()?;
    session.input(city);
    session.submit().await;

    if let Some(weather) = session.state().weather() {
        println!("{}", render::weather_card(weather));
        return Ok(());
    }

    eprintln!("{}", session.state().error().unwrap_or(LOOKUP_FAILED_MESSAGE));
    std::process::exit(1)
}

fn configure() -> anyhow::Result<()> {
    let entered = prompt::api_key().context("failed to read the API key")?;
    let api_key = entered.trim();
    if api_key.is_empty() {
        anyhow::bail!("Ключ не может быть пустым.");
    }

    let mut config = Config::load()?;
    config.api_key = Some(api_key.to_string());
    config.save()?;

    println!("Ключ сохранён: {}", Config::config_file_path()?.display());
    Ok(())
}
