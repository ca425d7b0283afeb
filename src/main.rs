//! soundscore CLI entry point.
//!
//! Runs one operation against the API and prints the result as JSON.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;

use soundscore::domain::{
    LikeKind, PasswordReset, RegisterRequest, ReleaseType, ReportDraft, ReportStatus,
    ReportTarget, ReviewDraft,
};
use soundscore::infra::app_config;
use soundscore::infra::http::HttpTransport;
use soundscore::operations::release::ReleaseFilter;
use soundscore::operations::{audit, auth, author, genre, like, release, report, review};
use soundscore::{Client, Store};

#[derive(Parser, Debug)]
#[command(name = "soundscore")]
#[command(version)]
#[command(about = "Browse and review music releases from the terminal", long_about = None)]
struct Args {
    /// API base URL (overrides config and SOUNDSCORE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in and remember the session token
    Login {
        email: String,
        #[arg(long, env = "SOUNDSCORE_PASSWORD")]
        password: String,
    },
    /// Create an account
    Register {
        username: String,
        email: String,
        #[arg(long, env = "SOUNDSCORE_PASSWORD")]
        password: String,
    },
    /// End the session and forget the token
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Request a password reset email
    ForgotPassword { email: String },
    /// Set a new password using a reset token
    ResetPassword {
        token: String,
        #[arg(long, env = "SOUNDSCORE_PASSWORD")]
        password: String,
    },

    /// List or search releases
    Releases {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        genre: Option<i64>,
        #[arg(long = "type")]
        release_type: Option<ReleaseType>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one release with its reviews
    Release { id: i64 },
    /// List favorite releases
    Favorites,
    /// Add (or with --remove, drop) a favorite release
    Favorite {
        release_id: i64,
        #[arg(long)]
        remove: bool,
    },

    /// List authors
    Authors,
    /// Follow (or with --remove, unfollow) an author
    Follow {
        author_id: i64,
        #[arg(long)]
        remove: bool,
    },

    /// List genres
    Genres,

    /// Review a release; every score is 1-10
    Review {
        release_id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        lyrics: u8,
        #[arg(long)]
        structure: u8,
        #[arg(long)]
        production: u8,
        #[arg(long)]
        individuality: u8,
        #[arg(long)]
        atmosphere: u8,
    },
    /// React to a review
    Like {
        review_id: i64,
        #[arg(long, conflicts_with = "remove")]
        dislike: bool,
        #[arg(long)]
        remove: bool,
    },

    /// File a report
    Report {
        target_type: ReportTarget,
        target_id: i64,
        reason: String,
    },
    /// List reports (moderators)
    Reports {
        #[arg(long)]
        status: Option<ReportStatus>,
    },
    /// Resolve or reject a report (moderators)
    ProcessReport { id: i64, status: ReportStatus },
    /// Show the moderation audit log
    Audit {
        #[arg(long)]
        moderator: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = app_config::load_config();
    if let Some(url) = args.api_url {
        config.api_base_url = url;
    }

    let transport = HttpTransport::from_config(&config).context("Failed to build HTTP client")?;
    let client = Client::new(Store::new(), Arc::new(transport));

    run(&client, args.command).await
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

async fn run(client: &Client, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email, password } => {
            let session = auth::login(client, &email, &password)
                .await
                .context("Login failed")?;
            remember_token(Some(session.token))?;
            print_json(&session.user)
        }
        Commands::Register {
            username,
            email,
            password,
        } => {
            let session = auth::register(
                client,
                RegisterRequest {
                    username,
                    email,
                    password,
                },
            )
            .await
            .context("Registration failed")?;
            remember_token(Some(session.token))?;
            print_json(&session.user)
        }
        Commands::Logout => {
            auth::logout(client).await.context("Logout failed")?;
            remember_token(None)
        }
        Commands::Whoami => {
            let user = auth::load_current_user(client)
                .await
                .context("Failed to load current user")?;
            print_json(&user)
        }
        Commands::ForgotPassword { email } => {
            auth::request_password_reset(client, &email)
                .await
                .context("Password reset request failed")?;
            eprintln!("If the address is registered, a reset email is on its way.");
            Ok(())
        }
        Commands::ResetPassword { token, password } => {
            auth::reset_password(client, PasswordReset { token, password })
                .await
                .context("Password reset failed")?;
            eprintln!("Password updated.");
            Ok(())
        }

        Commands::Releases {
            search,
            genre,
            release_type,
            page,
        } => {
            let releases = match search {
                Some(text) => release::search_releases(client, &text).await,
                None => {
                    let filter = ReleaseFilter {
                        genre_id: genre,
                        release_type,
                        page,
                    };
                    release::fetch_releases(client, &filter).await
                }
            }
            .context("Failed to load releases")?;
            print_json(&releases)
        }
        Commands::Release { id } => {
            let (found, reviews) = tokio::join!(
                release::fetch_release(client, id),
                review::fetch_release_reviews(client, id)
            );
            let found = found.with_context(|| format!("Failed to load release {id}"))?;
            let reviews = reviews.context("Failed to load reviews")?;
            print_json(&serde_json::json!({ "release": found, "reviews": reviews }))
        }
        Commands::Favorites => {
            let favorites = release::fetch_favorites(client)
                .await
                .context("Failed to load favorites")?;
            print_json(&favorites)
        }
        Commands::Favorite { release_id, remove } => {
            if remove {
                release::remove_favorite(client, release_id)
                    .await
                    .context("Failed to remove favorite")?;
                Ok(())
            } else {
                let added = release::add_favorite(client, release_id)
                    .await
                    .context("Failed to add favorite")?;
                print_json(&added)
            }
        }

        Commands::Authors => {
            let authors = author::fetch_authors(client)
                .await
                .context("Failed to load authors")?;
            print_json(&authors)
        }
        Commands::Follow { author_id, remove } => {
            if remove {
                author::unfollow_author(client, author_id)
                    .await
                    .context("Failed to unfollow author")?;
                Ok(())
            } else {
                let followed = author::follow_author(client, author_id)
                    .await
                    .context("Failed to follow author")?;
                print_json(&followed)
            }
        }

        Commands::Genres => {
            let genres = genre::fetch_genres(client)
                .await
                .context("Failed to load genres")?;
            print_json(&genres)
        }

        Commands::Review {
            release_id,
            title,
            text,
            lyrics,
            structure,
            production,
            individuality,
            atmosphere,
        } => {
            let draft = ReviewDraft {
                release_id,
                title,
                text,
                lyrics,
                structure,
                production,
                individuality,
                atmosphere,
            };
            let created = review::create_review(client, draft)
                .await
                .context("Failed to submit review")?;
            print_json(&created)
        }
        Commands::Like {
            review_id,
            dislike,
            remove,
        } => {
            if remove {
                like::remove_like(client, review_id)
                    .await
                    .context("Failed to remove reaction")?;
                return Ok(());
            }
            let kind = if dislike {
                LikeKind::Dislike
            } else {
                LikeKind::Like
            };
            let saved = like::like_review(client, review_id, kind)
                .await
                .context("Failed to save reaction")?;
            print_json(&saved)
        }

        Commands::Report {
            target_type,
            target_id,
            reason,
        } => {
            let created = report::create_report(
                client,
                ReportDraft {
                    target_type,
                    target_id,
                    reason,
                },
            )
            .await
            .context("Failed to file report")?;
            print_json(&created)
        }
        Commands::Reports { status } => {
            let reports = report::fetch_reports(client, status)
                .await
                .context("Failed to load reports")?;
            print_json(&reports)
        }
        Commands::ProcessReport { id, status } => {
            let processed = report::process_report(client, id, status)
                .await
                .with_context(|| format!("Failed to process report {id}"))?;
            print_json(&processed)
        }
        Commands::Audit { moderator } => {
            let entries = match moderator {
                Some(moderator_id) => audit::fetch_moderator_audit(client, moderator_id).await,
                None => audit::fetch_audit(client).await,
            }
            .context("Failed to load audit log")?;
            print_json(&entries)
        }
    }
}

fn remember_token(token: Option<String>) -> Result<()> {
    app_config::save_session_token(token).context("Failed to save session")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
