//! # Waitgate Admin CLI
//!
//! Runs admission and eligibility batches against in-memory adapters seeded
//! from a policy file. Results are printed as one JSON object per line.
//!
//! ```bash
//! wg-admin --config waitgate.toml process a@x.com b@x.com "+1 415 555 2671"
//! wg-admin --config waitgate.toml process --concurrent --meta source=ad a@x.com a@x.com
//! wg-admin status a@x.com
//! wg-admin evaluate a@x.com --position 3 --cutoff 2
//! ```

mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::info;
use wg_01_admission::{AdmissionStore, IdentityNormalizer, InMemoryAdmissionStore, Metadata};
use wg_02_eligibility::{
    evaluate, InMemoryRegistry, PolicySnapshot, RegistrationApi, RegistrationMode,
    RegistrationService,
};
use wg_telemetry::TelemetryConfig;

use crate::config::AdminConfig;

type Service = RegistrationService<InMemoryAdmissionStore, InMemoryRegistry>;

#[derive(Parser, Debug)]
#[command(name = "wg-admin", version, about = "Waitgate operator CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run registration attempts for each identity
    Process(ProcessArgs),
    /// Show eligibility without side effects
    Status {
        identities: Vec<String>,
    },
    /// Evaluate one identity against ad-hoc policy values
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug)]
struct ProcessArgs {
    /// Issue all attempts at once instead of one after another
    #[arg(long)]
    concurrent: bool,

    /// Metadata attached to every admission (key=value, repeatable)
    #[arg(long = "meta", value_parser = parse_meta)]
    meta: Vec<(String, String)>,

    identities: Vec<String>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    identity: String,

    #[arg(long, default_value_t = 0)]
    position: u64,

    #[arg(long)]
    registered: bool,

    #[arg(long, allow_hyphen_values = true)]
    cutoff: Option<i64>,

    #[arg(long)]
    cap: Option<u64>,

    #[arg(long)]
    registered_count: Option<u64>,

    #[arg(long)]
    mode: Option<RegistrationMode>,
}

fn parse_meta(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {s}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AdminConfig::load(cli.config.as_deref())?;

    let mut telemetry = if cli.config.is_some() {
        config.telemetry.clone().with_env_overrides()
    } else {
        TelemetryConfig::from_env()
    };
    if cli.verbose {
        telemetry.log_level = "debug".to_string();
    }
    wg_telemetry::init_logging(&telemetry)?;

    let normalizer = IdentityNormalizer::new((&config.admission).into())?;
    let service: Arc<Service> = Arc::new(RegistrationService::with_config(
        config.registration.clone(),
        normalizer.clone(),
        Arc::new(InMemoryAdmissionStore::new(&config.admission)),
        Arc::new(InMemoryRegistry::new(config.policy)),
    ));

    match cli.command {
        Command::Process(args) => run_process(&service, args).await,
        Command::Status { identities } => {
            for raw in identities {
                let line = match service.status(&raw).await {
                    Ok(status) => json!({ "input": raw, "status": status }),
                    Err(e) => json!({ "input": raw, "error": e.to_string() }),
                };
                println!("{line}");
            }
        }
        Command::Evaluate(args) => {
            let identity = normalizer.normalize(&args.identity)?;
            let policy = overlay_policy(config.policy, &args);
            let outcome = evaluate(&identity, args.registered, args.position, &policy);
            println!("{}", json!({ "identity": identity, "policy": policy, "outcome": outcome }));
        }
    }

    Ok(())
}

async fn run_process(service: &Arc<Service>, args: ProcessArgs) {
    let metadata: Metadata = args.meta.into_iter().collect();

    if args.concurrent {
        let mut tasks = JoinSet::new();
        for raw in args.identities {
            let service = Arc::clone(service);
            let metadata = metadata.clone();
            tasks.spawn(async move {
                let result = service.process(&raw, metadata).await;
                (raw, result)
            });
        }
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((raw, result)) => print_result(&raw, result),
                Err(e) => eprintln!("task failed: {e}"),
            }
        }
    } else {
        for raw in args.identities {
            let result = service.process(&raw, metadata.clone()).await;
            print_result(&raw, result);
        }
    }

    let stats = service.store().stats().await;
    info!(
        waitlist_len = stats.len,
        registered = service.registry().policy().registered_count,
        "Batch complete"
    );
}

fn print_result(
    raw: &str,
    result: Result<wg_02_eligibility::RegistrationResult, wg_02_eligibility::RegistrationError>,
) {
    let line = match result {
        Ok(result) => json!({ "input": raw, "result": result }),
        Err(e) => json!({ "input": raw, "error": e.to_string() }),
    };
    println!("{line}");
}

fn overlay_policy(mut policy: PolicySnapshot, args: &EvaluateArgs) -> PolicySnapshot {
    if let Some(cutoff) = args.cutoff {
        policy.signup_cutoff = cutoff;
    }
    if let Some(cap) = args.cap {
        policy.registration_cap = cap;
    }
    if let Some(count) = args.registered_count {
        policy.registered_count = count;
    }
    if let Some(mode) = args.mode {
        policy.registration_mode = mode;
    }
    policy
}
