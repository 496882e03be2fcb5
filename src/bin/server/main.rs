#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! REST API for the welcome email sender

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use welcome_mailer::{
    domain::communication::services::welcome_email::WelcomeEmailServiceImpl,
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer},
        http::{HttpServer, HttpServerConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP relay configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment and the built-in
    // defaults still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let sender = args.smtp.sender();
    let mailer = SMTPMailer::new(args.smtp);

    let welcome_emails = WelcomeEmailServiceImpl::new(Arc::new(mailer), &sender);

    HttpServer::new(welcome_emails, args.server)
        .await?
        .run()
        .await
}
