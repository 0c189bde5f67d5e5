use std::{
    net::{Ipv4Addr, SocketAddr},
    time::Duration,
};

use adapter::database::connect_database_with;
use anyhow::{Context, Result};
use api::route::routes;
use axum::{routing::get, Router};
use chrono::{Local, Timelike};
use kernel::model::timetable::{booking_end_instant, passed_labels};
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use shared::error::AppResult;
use tokio::net::TcpListener;
use tokio::time::sleep;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600);

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let pool = connect_database_with(&app_config.database);

    let registry = AppRegistry::new(pool.clone(), app_config);

    // The change feed is an enhancement; losing it only costs liveness.
    let hub = registry.event_hub().clone();
    tokio::spawn(async move {
        if let Err(e) = adapter::listener::run_change_feed(&pool, hub).await {
            tracing::warn!(
                error.message = %e,
                "Change feed unavailable; push streams carry handler events only"
            );
        }
    });

    tokio::spawn(timetable_cleanup_loop(registry.clone()));
    tokio::spawn(approved_cleanup_loop(registry.clone()));

    let app = Router::new()
        .route("/", get(root))
        .merge(routes())
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(registry);

    let addr = SocketAddr::new(Ipv4Addr::LOCALHOST.into(), 8080);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e, error.message = %e, "Unexpected error"
            )
        })
}

async fn root() -> &'static str {
    "Server is up and running"
}

// Hourly sweep over every facility's timetable: drop slots from past days,
// then today's slots whose end hour has elapsed.
async fn timetable_cleanup_loop(registry: AppRegistry) {
    loop {
        tracing::info!("Timetable cleanup running");
        match sweep_timetable(&registry).await {
            Ok(removed) => tracing::info!(removed, "Timetable cleanup complete"),
            Err(e) => tracing::error!(error.message = %e, "Timetable cleanup failed"),
        }
        sleep(CLEANUP_INTERVAL).await;
    }
}

async fn sweep_timetable(registry: &AppRegistry) -> AppResult<u64> {
    let now = Local::now();
    let today = now.date_naive();

    let mut removed = registry
        .timetable_repository()
        .sweep_dated_before(today)
        .await?;

    let hour_fraction = f64::from(now.hour()) + f64::from(now.minute()) / 60.0;
    let passed: Vec<String> = passed_labels(hour_fraction)
        .into_iter()
        .map(String::from)
        .collect();
    removed += registry
        .timetable_repository()
        .sweep_passed_today(today, passed)
        .await?;

    Ok(removed)
}

// Hourly sweep of approved bookings whose occupancy window has fully
// elapsed.
async fn approved_cleanup_loop(registry: AppRegistry) {
    loop {
        tracing::info!("Approved-booking cleanup running");
        if let Err(e) = sweep_approved(&registry).await {
            tracing::error!(error.message = %e, "Approved-booking cleanup failed");
        }
        sleep(CLEANUP_INTERVAL).await;
    }
}

async fn sweep_approved(registry: &AppRegistry) -> AppResult<()> {
    let now = Local::now().naive_local();
    let bookings = registry.booking_repository().find_approved_all().await?;

    for booking in bookings {
        let end = booking_end_instant(booking.booking_date, &booking.end_time);
        if end < now {
            registry
                .booking_repository()
                .delete_approved(booking.booking_id)
                .await?;
        }
    }

    Ok(())
}
