//! Fetch every integration once and print what came back.
//!
//! Useful for checking the public APIs outside the TUI. Uses the same
//! config file as the dashboard, so `[http]` timeouts and `[defaults]`
//! queries apply here too.

use anyhow::Result;
use apinexus::config::{self, Config};
use apinexus::panel::{FetchRequest, Panel};
use apinexus::{catalog, fetch};
use clap::Parser;
use futures::future::join_all;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "apinexus-probe")]
#[command(about = "Fetch each integration once and print the result")]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Query for panels that have no prefilled default
    #[arg(long, default_value = "michael")]
    name: String,

    /// Only fetch these integrations (comma-separated ids)
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,
}

/// Mount a panel per selected integration and start its fetch.
///
/// Query panels submit their prefilled query, or `name` when it is blank.
fn build_requests(config: &Config, name: &str, only: &[String]) -> Vec<(Panel, FetchRequest)> {
    let mut requests = Vec::new();
    for (mount, descriptor) in catalog::all().iter().enumerate() {
        if !only.is_empty() && !only.iter().any(|id| id == descriptor.id) {
            continue;
        }
        let default_query = config.defaults.query_for(descriptor.id);
        let mut panel = Panel::mount(descriptor, mount as u64 + 1, default_query);
        let request = if panel.is_query() {
            let query = if panel.query.trim().is_empty() {
                name.to_string()
            } else {
                panel.query.clone()
            };
            panel.submit_query(&query)
        } else {
            panel.activate()
        };
        if let Some(request) = request {
            requests.push((panel, request));
        }
    }
    requests
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("apinexus=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load(args.config.as_deref())?;
    let client = fetch::build_client(&config.http)?;

    let requests = build_requests(&config, &args.name, &args.only);
    let outcomes = join_all(requests.iter().map(|(_, r)| fetch::execute(&client, r))).await;

    for ((mut panel, request), outcome) in requests.into_iter().zip(outcomes) {
        let title = panel.descriptor().title;
        println!("\n=== {} ===", title);
        println!("GET {}", request.url);
        if let Err(e) = &outcome {
            tracing::warn!("Fetch of {} failed: {}", request.integration, e);
        }
        panel.apply(request.complete(outcome));
        match (&panel.state.data, &panel.state.error) {
            (Some(payload), _) => println!("{}", payload.summary()),
            (None, Some(error)) => println!("Error: {}", error),
            (None, None) => println!("(no data)"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url_for<'a>(requests: &'a [(Panel, FetchRequest)], id: &str) -> &'a str {
        requests
            .iter()
            .find(|(_, r)| r.integration == id)
            .map(|(_, r)| r.url.as_str())
            .unwrap()
    }

    #[test]
    fn test_every_integration_is_requested() {
        let requests = build_requests(&Config::default(), "michael", &[]);
        assert_eq!(requests.len(), catalog::all().len());
        assert!(requests.iter().all(|(panel, _)| panel.state.loading));
        assert_eq!(url_for(&requests, "agify"), "https://api.agify.io?name=michael");
        assert_eq!(url_for(&requests, "zip"), "https://api.zippopotam.us/us/90210");
    }

    #[test]
    fn test_config_defaults_take_precedence_over_name() {
        let mut config = Config::default();
        config.defaults.set("zip", "10001");
        config.defaults.set("genderize", "Alex");

        let requests = build_requests(&config, "michael", &[]);
        assert_eq!(url_for(&requests, "zip"), "https://api.zippopotam.us/us/10001");
        assert_eq!(url_for(&requests, "genderize"), "https://api.genderize.io?name=Alex");
        assert_eq!(url_for(&requests, "agify"), "https://api.agify.io?name=michael");
    }

    #[test]
    fn test_only_filters_integrations() {
        let only = vec!["cat".to_string(), "zip".to_string()];
        let requests = build_requests(&Config::default(), "michael", &only);
        let ids: Vec<_> = requests.iter().map(|(_, r)| r.integration).collect();
        assert_eq!(ids, vec!["cat", "zip"]);
    }
}
