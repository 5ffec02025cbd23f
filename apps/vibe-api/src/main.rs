use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = vibe_api::Args::parse();
	vibe_api::run(args).await
}
