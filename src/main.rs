//! CLI entry point for the kartklient tool.

use anyhow::{Context, Result};
use clap::Parser;
use kartklient_core::{
    AddressClient, ClientConfig, LayersClient, OrderArea, OrderClient, OrderFormat, OrderLine,
    OrderProjection, OrderRequest,
};
use tracing::{debug, info};

mod cli;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let config = ClientConfig::default();

    match args.command {
        Command::Search { query, limit } => {
            let mut config = config;
            config.search_hit_cap = u32::from(limit);
            let client = AddressClient::new(&config)?;

            let hits = client.search(&query).await;
            info!(query = %query, hits = hits.len(), "Address search finished");

            for hit in hits {
                match &hit.postal_place {
                    Some(place) => println!(
                        "{}, {} ({:.5}, {:.5})",
                        hit.text, place, hit.point.lat, hit.point.lon
                    ),
                    None => println!("{} ({:.5}, {:.5})", hit.text, hit.point.lat, hit.point.lon),
                }
            }
        }

        Command::Layers { url } => {
            // Fail fast on unparsable endpoints instead of asking the
            // introspection service about them.
            url::Url::parse(&url)
                .with_context(|| format!("invalid WMS endpoint URL: {url}"))?;

            let client = LayersClient::new(&config)?;

            let layers = client.available_layers(&url).await;
            info!(endpoint = %url, layers = layers.len(), "Introspection finished");

            for layer in layers {
                if layer.title.is_empty() {
                    println!("{}", layer.name);
                } else {
                    println!("{}  ({})", layer.name, layer.title);
                }
            }
        }

        Command::Order {
            metadata_uuid,
            email,
            area_code,
            area_name,
            area_type,
            projection,
            projection_name,
            format,
            usage_purpose,
        } => {
            let client = OrderClient::new(&config)?;

            let line = OrderLine {
                metadata_uuid,
                areas: vec![OrderArea {
                    code: area_code,
                    name: area_name,
                    kind: area_type,
                }],
                projections: vec![OrderProjection {
                    code: projection.clone(),
                    name: projection_name,
                    codespace: format!("http://www.opengis.net/def/crs/EPSG/0/{projection}"),
                }],
                formats: vec![OrderFormat { name: format }],
                usage_purpose,
            };
            let order = OrderRequest::single(&config, email, line);

            let receipt = client.submit(&order).await?;
            println!("Order reference: {}", receipt.reference_number);
            for file in receipt.files {
                println!("{}  {}", file.name, file.download_url);
            }
        }
    }

    Ok(())
}
