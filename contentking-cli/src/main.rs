// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content King CLI
//!
//! Command-line interface for rendering site pages and inspecting the
//! content stack.

mod commands;
mod config;
mod display;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use contentking_core::content::{
    ENV_API_BASE_URL, ENV_API_KEY, ENV_BRANCH, ENV_DELIVERY_TOKEN, ENV_ENVIRONMENT,
    ENV_PREVIEW_TOKEN, ENV_REGION,
};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "contentking")]
#[command(version, about = "Content King site - CMS content, fallbacks and live preview", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log fetches and cache activity
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Stack API key
    #[arg(long, global = true, env = ENV_API_KEY, hide_env_values = true)]
    api_key: Option<String>,

    /// Delivery token
    #[arg(long, global = true, env = ENV_DELIVERY_TOKEN, hide_env_values = true)]
    delivery_token: Option<String>,

    /// Publishing environment
    #[arg(long, global = true, env = ENV_ENVIRONMENT)]
    environment: Option<String>,

    /// Stack region (us, eu, azure-na, azure-eu, gcp-na)
    #[arg(long, global = true, env = ENV_REGION)]
    region: Option<String>,

    /// Live preview token
    #[arg(long, global = true, env = ENV_PREVIEW_TOKEN, hide_env_values = true)]
    preview_token: Option<String>,

    /// Stack branch
    #[arg(long, global = true, env = ENV_BRANCH)]
    branch: Option<String>,

    /// Override the delivery API base URL
    #[arg(long, global = true, env = ENV_API_BASE_URL)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page to HTML on stdout
    Render {
        /// Page slug (home, features, pricing, about, careers, awards,
        /// contact, signin, signup)
        page: String,
    },

    /// Fetch raw entries of a content type as JSON
    Fetch {
        /// Content type name or CMS uid
        content_type: String,

        /// Only entries whose field equals the value (field=value)
        #[arg(long = "where", value_name = "FIELD=VALUE", value_parser = commands::fetch::parse_where)]
        filters: Vec<(String, String)>,
    },

    /// Check configuration and reachability of every content type
    Check,

    /// List the content types the site reads
    Types,

    /// Render a page in a live preview session, re-rendering on each change
    ///
    /// Change notifications are read from stdin, one JSON object per line.
    /// An empty line is a change without details.
    Preview {
        /// Page URL carrying the live preview marker
        #[arg(long)]
        url: String,

        /// Page slug
        page: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "contentking=debug"
    } else {
        "contentking=info"
    };
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig {
        api_key: cli.api_key,
        delivery_token: cli.delivery_token,
        environment: cli.environment,
        region: cli.region,
        preview_token: cli.preview_token,
        branch: cli.branch,
        base_url: cli.base_url,
    };

    match cli.command {
        Commands::Render { page } => {
            commands::render::run(&config, &page).await?;
        }
        Commands::Fetch {
            content_type,
            filters,
        } => {
            commands::fetch::run(&config, &content_type, &filters).await?;
        }
        Commands::Check => {
            commands::check::run(&config).await?;
        }
        Commands::Types => {
            commands::types::run()?;
        }
        Commands::Preview { url, page } => {
            commands::preview::run(&config, &url, &page).await?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "contentking", &mut io::stdout());
        }
    }

    Ok(())
}
