mod cli;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor::MoveTo, execute, terminal};
use skyglass_core::config::API_KEY_ENV;
use skyglass_core::{Config, PreferenceStore, Preferences};
use skyglass_dashboard::{
    initial_theme, render, render_recent, unit_from_preference, Capabilities, Dashboard,
    DashboardOptions, Outcome, TerminalLayers,
};
use skyglass_weather::{Backoff, LocationQuery, WeatherCache, WeatherClient, WeatherProvider};

use crate::cli::Args;

const DEFAULT_WIDTH: usize = 60;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    skyglass_core::init("warn")?;

    let (config, _) = Config::load_validated(args.config.as_deref())?;
    let config_dir = match args.config.as_deref().and_then(|p| p.parent()) {
        Some(dir) => dir.to_path_buf(),
        None => Config::config_dir()?,
    };
    let store = PreferenceStore::new(&config_dir);
    let prefs = apply_preference_flags(&store, &args)?;

    if args.recent {
        print!("{}", render_recent(&prefs.recent_searches, initial_theme(prefs.theme)));
        return Ok(ExitCode::SUCCESS);
    }

    let query = resolve_query(&args, &prefs)?;

    let api_key = config.weather.resolved_api_key().with_context(|| {
        format!(
            "No WeatherAPI.com key configured. Set {} or weather.api_key in the config file",
            API_KEY_ENV
        )
    })?;
    let client = WeatherClient::new(
        &config.weather.api_url,
        &api_key,
        Duration::from_secs(config.weather.request_timeout_secs),
    )?
    .with_backoff(Backoff::default());
    let cache = WeatherCache::new(Duration::from_secs(config.weather.cache_ttl_secs));
    let days = args.days.unwrap_or(config.weather.forecast_days);
    let provider = Arc::new(WeatherProvider::new(client, cache, days));

    let options = DashboardOptions {
        unit: unit_from_preference(prefs.unit),
        theme: initial_theme(prefs.theme),
        capabilities: Capabilities::terminal(config.display.share),
        reduced_motion: args.no_animations
            || args.reduce_motion
            || !config.display.animations
            || config.display.reduce_motion,
    };
    let mut dashboard: Dashboard<TerminalLayers> = Dashboard::with_defaults(options);
    let max_recent = config.history.max_recent;

    tracing::info!("Looking up weather for {}", query);

    if !args.watch {
        let outcome = refresh(&mut dashboard, &provider, &query, &store, max_recent).await;
        print_dashboard(&dashboard, args.share, false)?;
        return Ok(match outcome {
            Outcome::Failed => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        });
    }

    let Some(period) = config.weather.refresh_interval() else {
        refresh(&mut dashboard, &provider, &query, &store, max_recent).await;
        print_dashboard(&dashboard, args.share, true)?;
        tracing::info!("Automatic refresh is off; press Ctrl-C to exit");
        tokio::signal::ctrl_c().await?;
        return Ok(ExitCode::SUCCESS);
    };
    let mut ticker = tokio::time::interval(period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh(&mut dashboard, &provider, &query, &store, max_recent).await;
                dashboard.layers_mut().tick();
                print_dashboard(&dashboard, args.share, true)?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, exiting watch mode");
                break;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Persist `--unit`/`--theme` and return the resulting preferences.
fn apply_preference_flags(store: &PreferenceStore, args: &Args) -> Result<Preferences> {
    if args.unit.is_none() && args.theme.is_none() {
        return Ok(store.load_or_default());
    }

    let prefs = store.update(|prefs| {
        if let Some(unit) = args.unit {
            prefs.unit = unit.into();
        }
        if let Some(theme) = args.theme {
            prefs.theme = Some(theme.into());
        }
    })?;
    Ok(prefs)
}

fn resolve_query(args: &Args, prefs: &Preferences) -> Result<LocationQuery> {
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        return LocationQuery::coordinates(lat, lon)
            .map_err(|e| anyhow::anyhow!(e.user_message()));
    }

    let input = args
        .query
        .as_deref()
        .or_else(|| prefs.recent_searches.first().map(String::as_str))
        .unwrap_or_default();

    LocationQuery::parse(input).context("Please enter a city name (or pass --lat/--lon)")
}

async fn refresh(
    dashboard: &mut Dashboard<TerminalLayers>,
    provider: &WeatherProvider,
    query: &LocationQuery,
    store: &PreferenceStore,
    max_recent: usize,
) -> Outcome {
    let ticket = dashboard.begin_request();
    let result = provider.fetch(query).await;
    let outcome = dashboard.apply(ticket, result);

    if let Outcome::Updated(_) = outcome {
        let saved = store.update(|prefs| {
            dashboard.remember_search(outcome, prefs, max_recent);
        });
        if let Err(e) = saved {
            tracing::warn!("Failed to save recent search: {}", e);
        }
    }

    outcome
}

fn print_dashboard(dashboard: &Dashboard<TerminalLayers>, share: bool, clear: bool) -> Result<()> {
    let width = terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .unwrap_or(DEFAULT_WIDTH);

    let mut stdout = std::io::stdout();
    if clear {
        execute!(stdout, terminal::Clear(terminal::ClearType::All), MoveTo(0, 0))?;
    }

    write!(stdout, "{}", render(dashboard, width))?;
    if share {
        if let Some(text) = dashboard.share_text() {
            writeln!(stdout, "\n{}", text)?;
        }
    }
    stdout.flush()?;
    Ok(())
}
