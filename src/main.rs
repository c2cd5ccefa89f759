//! Replay driver: generates a synthetic bid/offer stream, runs it through a
//! fresh engine and prints a JSON summary of the resulting book.
//!
//! Configured through `MARKET_*` environment variables (see `config`); log
//! verbosity through `RUST_LOG`.

use online_marketplace::market_data_gen::{replay_into_engine, Generator};
use online_marketplace::{Engine, ReplayConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = env_logger::try_init();
    let config = ReplayConfig::from_env();
    let items = config.items.clone();
    let entries = Generator::new(config.into_generator_config()).all_entries();

    let engine = Engine::default();
    let summary = match replay_into_engine(&engine, entries) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("replay failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let prices: Vec<serde_json::Value> = items
        .iter()
        .map(|item| {
            serde_json::json!({
                "item_id": item,
                "best_bid": engine.current_bid_price(item).map(|p| p.to_string()),
                "best_offer": engine.current_offer_price(item).map(|p| p.to_string()),
            })
        })
        .collect();
    let out = serde_json::json!({
        "summary": summary,
        "resting_bids": engine.book().bids().len(),
        "resting_offers": engine.book().offers().len(),
        "prices": prices,
    });
    match serde_json::to_string_pretty(&out) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("encode summary: {}", e);
            ExitCode::FAILURE
        }
    }
}
