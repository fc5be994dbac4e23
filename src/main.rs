//! HealthPrism - Main Entry Point

mod cli;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthprism::api::Sender;
use healthprism::config::Config;
use healthprism::constants::{APP_NAME, APP_VERSION};
use healthprism::logic::breathing;
use healthprism::logic::forms::Credentials;
use healthprism::logic::risk::doctor_search_url;
use healthprism::logic::storage::FileStore;
use healthprism::{AppError, HealthApp};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging (stderr, so command output stays clean)
    let default_filter = match cli.verbose {
        0 => "healthprism=info",
        1 => "healthprism=debug",
        _ => "healthprism=trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let mut config = Config::from_env();
    if let Some(url) = cli.api_url.clone() {
        config = config.with_api_url(url);
    }
    if let Some(dir) = cli.data_dir.clone() {
        config = config.with_data_dir(dir);
    }

    tracing::debug!("{} v{} ({})", APP_NAME, APP_VERSION, config.environment);

    if let Err(e) = run(cli.command, &config).await {
        match e.downcast_ref::<AppError>() {
            Some(app_error) => eprintln!("{}", app_error.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    let mut app = HealthApp::open(config).context("Failed to start HealthPrism")?;

    match command {
        Commands::Predict(args) => {
            let outcome = app.predict_heart_risk(&args.form()).await?;
            print!("{}", outcome.report);

            if outcome.report.tier.offers_doctor_search() {
                println!();
                match (args.lat, args.lon) {
                    (Some(lat), Some(lon)) => {
                        println!("Find a doctor near you: {}", doctor_search_url(lat, lon))
                    }
                    _ => println!("Pass --lat and --lon to get a link to doctors near you."),
                }
            }
        }

        Commands::Stress(args) => {
            let result = app.predict_stress(&args.into()).await?;
            print!("{}", result);
        }

        Commands::Chat => chat(&mut app).await?,

        Commands::Nutrition {
            age,
            goal,
            restrictions,
        } => {
            let plan = app.plan_nutrition(age, goal, &restrictions).await?;
            println!("{}", plan);
        }

        Commands::Coach { topic } => {
            let plan = app.coach_stress(topic).await?;
            println!("{}", plan);
        }

        Commands::History { clear: true, .. } => {
            app.history_mut().clear();
            println!("Prediction history cleared.");
        }

        Commands::History { server: true, .. } => {
            let history = app.server_history().await?;
            println!("Saved predictions for {}", history.username);
            for entry in &history.history {
                println!(
                    "  #{:<4} {}  {:>6.2} %",
                    entry.id,
                    entry.timestamp.format("%Y-%m-%d %H:%M"),
                    entry.probability * 100.0
                );
            }
        }

        Commands::History { .. } => print_local_history(&app),

        Commands::Dashboard => match app.dashboard() {
            Some(report) => {
                println!("Welcome back! Here is your most recent prediction.");
                println!();
                print!("{}", report);
            }
            None => {
                println!("You haven't taken a prediction yet.");
                println!("Get your heart risk score with: healthprism predict");
            }
        },

        Commands::Login { username, password } => {
            app.login(&Credentials::new(username, password)).await?;
            println!("Logged in.");
        }

        Commands::Register { username, password } => {
            let message = app.register(&Credentials::new(username, password)).await?;
            println!("{}", message);
            println!("You can now log in with: healthprism login <username> <password>");
        }

        Commands::Logout => {
            app.logout()?;
            println!("Logged out.");
        }

        Commands::Breathe { cycles } => {
            println!("Follow along. Press Ctrl-C to stop.");
            let completed = breathing::run(
                cycles,
                |phase| println!("{}", phase.instruction()),
                async {
                    let _ = tokio::signal::ctrl_c().await;
                },
            )
            .await;
            println!("Completed {} of {} cycles.", completed, cycles);
        }
    }

    app.shutdown();
    Ok(())
}

async fn chat(app: &mut HealthApp<FileStore>) -> anyhow::Result<()> {
    for message in app.conversation().messages() {
        println!("HealthBot: {}", message.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }

        if let Some(reply) = app.chat(&line).await {
            if reply.from == Sender::Bot {
                println!("HealthBot: {}", reply.text);
            }
        }
    }
    Ok(())
}

fn print_local_history(app: &HealthApp<FileStore>) {
    let history = app.history();
    if history.is_empty() {
        println!("No predictions yet.");
        return;
    }

    let stats = history.stats();
    println!(
        "{} predictions (keeping at most {})",
        stats.total_records, stats.max_records
    );
    if let (Some(avg), Some(high), Some(low)) = (
        stats.average_probability,
        stats.highest_probability,
        stats.lowest_probability,
    ) {
        println!(
            "  average {:.2} %, highest {:.2} %, lowest {:.2} %",
            avg * 100.0,
            high * 100.0,
            low * 100.0
        );
    }
    println!();

    for record in history.all() {
        println!(
            "  {}  {:>6.2} %",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.percent()
        );
    }
}
