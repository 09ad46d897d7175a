use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuidex_core::{decode, DecodedUuid, TimeDisplay};

/// Sample UUIDs covering every decodable layout.
const EXAMPLE_UUIDS: &[(&str, &str)] = &[
    ("NIL", "00000000-0000-0000-0000-000000000000"),
    ("UUIDv1 unicast", "C232AB00-9414-11EC-B3C8-6F6BDECED846"),
    ("UUIDv1 multicast", "C232AB00-9414-11EC-A3C8-AF6BDECED846"),
    ("UUIDv2", "f47ac10b-58cc-21cf-a2d0-00a0c91e6bf6"),
    ("UUIDv3", "5df41881-3aed-3515-88a7-2f4a814cf09e"),
    ("UUIDv4", "919108f7-52d1-4320-9bac-f847db4148a8"),
    ("UUIDv5", "2ed6657d-e927-568b-95e1-2665a8aea6a2"),
    ("UUIDv6", "1EC9414C-232A-6B00-B3C8-9F6BDECED846"),
    ("UUIDv7", "017F22E2-79B0-7CC3-98C4-DC0C0C07398F"),
    ("UUIDv8", "ffffffff-ffff-8fff-9fff-ffffffffffff"),
    ("MAX", "ffffffff-ffff-ffff-ffff-ffffffffffff"),
];

#[derive(Parser)]
#[command(name = "uuidex")]
#[command(about = "UUID field decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one or more UUIDs
    Decode {
        /// UUIDs in canonical 8-4-4-4-12 form
        #[arg(required = true)]
        uuids: Vec<String>,
        /// Render timestamps in the system timezone
        #[arg(long)]
        local_time: bool,
        /// Emit the structured record as JSON
        #[arg(long, conflicts_with = "flat")]
        json: bool,
        /// Emit the legacy flat record as JSON
        #[arg(long)]
        flat: bool,
    },
    /// Decode the built-in example corpus
    Examples {
        /// Render timestamps in the system timezone
        #[arg(long)]
        local_time: bool,
        /// Emit the structured records as JSON
        #[arg(long, conflicts_with = "flat")]
        json: bool,
        /// Emit the legacy flat records as JSON
        #[arg(long)]
        flat: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("uuidex=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            uuids,
            local_time,
            json,
            flat,
        } => {
            let display = time_display(local_time);
            let mut failures = 0usize;
            for (index, input) in uuids.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                match decode(input, display) {
                    Ok(decoded) => print_record(&decoded, json, flat)?,
                    Err(e) => {
                        eprintln!("Error decoding '{}': {}", input, e);
                        failures += 1;
                    }
                }
            }
            if failures > 0 {
                return Err(format!("{failures} input(s) failed to decode").into());
            }
        }
        Commands::Examples {
            local_time,
            json,
            flat,
        } => {
            let display = time_display(local_time);
            for (index, (label, input)) in EXAMPLE_UUIDS.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("-- {label}");
                let decoded = decode(input, display)?;
                print_record(&decoded, json, flat)?;
            }
        }
    }

    Ok(())
}

/// `UUIDEX_LOCAL_TIME` supplies the default; the flag forces local mode.
fn time_display(local_time_flag: bool) -> TimeDisplay {
    let env_default = std::env::var("UUIDEX_LOCAL_TIME")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if local_time_flag || env_default {
        TimeDisplay::Local
    } else {
        TimeDisplay::Utc
    }
}

fn print_record(
    decoded: &DecodedUuid,
    json: bool,
    flat: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(decoded)?);
    } else if flat {
        println!("{}", serde_json::to_string_pretty(&decoded.report())?);
    } else {
        println!("{decoded}");
    }
    Ok(())
}
