use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mergington-api",
    about = "Mergington High School activities API — view and sign up for extracurriculars",
    version
)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    activities_server::serve(&cli.host, cli.port).await
}
