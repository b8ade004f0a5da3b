//! CREATE2 Salt Miner CLI
//!
//! Usage: salt-vanity <DEPLOYER_ADDRESS_HEX> <BYTECODE_HASH_HEX> [DESIRED_SUFFIX]
//!        salt-vanity <DEPLOYER_ADDRESS_HEX> <BYTECODE_HASH_HEX> --check-salt <SALT_HEX>
//!
//! Stdout carries only the result lines; banner, progress and statistics are
//! logged to stderr (`RUST_LOG` adjusts the level).

use std::process;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{error, info, warn};

use salt_vanity::{derive_address, Config, ConfigError, SaltMatch, WorkerPool};

const EXIT_CONFIG: i32 = 1;
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(EXIT_CONFIG),
            }
        }
    };

    let params = match config.resolve() {
        Ok(params) => params,
        Err(e) => exit_config_error(e),
    };

    let salt_to_check = match config.salt_to_check() {
        Ok(salt) => salt,
        Err(e) => exit_config_error(e),
    };
    if let Some(salt) = salt_to_check {
        let address = derive_address(&params.deployer, &salt, &params.bytecode_hash);
        println!("Generated address: {}", hex::encode(address));
        return;
    }

    info!("CREATE2 Salt Miner");
    info!("Deployer:      {}", hex::encode(params.deployer));
    info!("Bytecode hash: {}", hex::encode(params.bytecode_hash));
    info!("Suffix:        {}", params.suffix);
    info!("Difficulty:    {}", params.suffix.difficulty_description());

    let mut pool = match WorkerPool::spawn(config.worker_count(), &params) {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to start workers: {}", e);
            process::exit(EXIT_CONFIG);
        }
    };

    info!("Workers:       {}", pool.num_workers());

    let stop_flag = pool.stop_flag_clone();
    if let Err(e) = ctrlc::set_handler(move || stop_flag.raise()) {
        warn!("Ctrl-C handler not installed: {}", e);
    }

    info!("Searching... (Press Ctrl+C to stop)");

    let report_interval = Duration::from_secs(config.report_interval);
    let received = loop {
        if let Some(result) = pool.wait_for_result(report_interval) {
            break Some(result);
        }
        if pool.is_stopped() {
            break None;
        }
        log_progress(&pool);
    };
    let late = pool.finish();
    let result = received.or(late);

    if let Some(ref result) = result {
        print_result(result);
    } else {
        info!("Stopped by user.");
    }

    info!("Total salts tried: {}", format_number(pool.total_salts()));
    info!("Time elapsed:      {:.2}s", pool.elapsed().as_secs_f64());
    info!(
        "Average speed:     {}/s",
        format_number(pool.salts_per_second() as u64)
    );

    if result.is_none() {
        process::exit(EXIT_INTERRUPTED);
    }
}

fn exit_config_error(e: ConfigError) -> ! {
    eprintln!("Configuration error: {}", e);
    eprintln!("{}", Config::command().render_usage());
    process::exit(EXIT_CONFIG);
}

fn print_result(result: &SaltMatch) {
    println!("Found salt: {}", result.salt_hex());
    println!("Generated address: {}", result.address_hex());
}

fn log_progress(pool: &WorkerPool) {
    info!(
        "[{:>4}s] Tried {} salts ({}/s)",
        pool.elapsed().as_secs(),
        format_number(pool.total_salts()),
        format_number(pool.salts_per_second() as u64)
    );
}

fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1e9)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}
