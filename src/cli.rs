//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};

/// Map-catalog client for Geonorge.
///
/// Kartklient searches addresses, lists the selectable layers of WMS
/// endpoints, and submits dataset download orders.
#[derive(Parser, Debug)]
#[command(name = "kartklient")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search addresses by free text
    Search {
        /// Free-text query ("storgata 1 oslo")
        query: String,

        /// Maximum number of hits (1-100)
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=100))]
        limit: u8,
    },

    /// List the selectable layers of a WMS endpoint
    Layers {
        /// Full WMS endpoint URL, including any query string
        url: String,
    },

    /// Submit a download order for a dataset
    Order {
        /// Metadata UUID of the dataset in the catalog
        metadata_uuid: String,

        /// Delivery email address
        #[arg(long)]
        email: String,

        /// Area code to order ("03" for Oslo)
        #[arg(long)]
        area_code: String,

        /// Area display name
        #[arg(long)]
        area_name: String,

        /// Area kind (fylke, kommune, landsdekkende, ...)
        #[arg(long, default_value = "fylke")]
        area_type: String,

        /// Projection code ("25833")
        #[arg(long)]
        projection: String,

        /// Projection display name
        #[arg(long, default_value = "")]
        projection_name: String,

        /// File format name ("SOSI")
        #[arg(long)]
        format: String,

        /// Free-text usage purpose
        #[arg(long, default_value = "")]
        usage_purpose: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_search_parses_query_and_default_limit() {
        let args = Args::try_parse_from(["kartklient", "search", "storgata 1"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        match args.command {
            Command::Search { query, limit } => {
                assert_eq!(query, "storgata 1");
                assert_eq!(limit, 10);
            }
            other => panic!("expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_search_limit_range_enforced() {
        let result = Args::try_parse_from(["kartklient", "search", "x", "--limit", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let result = Args::try_parse_from(["kartklient", "search", "x", "--limit", "101"]);
        assert!(result.is_err());

        let args = Args::try_parse_from(["kartklient", "search", "x", "-l", "25"]).unwrap();
        match args.command {
            Command::Search { limit, .. } => assert_eq!(limit, 25),
            other => panic!("expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_layers_takes_endpoint_url() {
        let args = Args::try_parse_from([
            "kartklient",
            "layers",
            "https://wms.geonorge.no/skwms1/wms.dybdedata2?service=wms",
        ])
        .unwrap();
        match args.command {
            Command::Layers { url } => {
                assert!(url.contains("wms.dybdedata2"));
            }
            other => panic!("expected Layers, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_order_requires_selection_flags() {
        let result = Args::try_parse_from(["kartklient", "order", "some-uuid"]);
        assert!(result.is_err(), "order without flags must be rejected");

        let args = Args::try_parse_from([
            "kartklient",
            "order",
            "c777d53d-8fc0-4602-a271-b800a5d182a2",
            "--email",
            "kari@example.no",
            "--area-code",
            "03",
            "--area-name",
            "Oslo",
            "--projection",
            "25833",
            "--format",
            "SOSI",
        ])
        .unwrap();
        match args.command {
            Command::Order {
                metadata_uuid,
                email,
                area_code,
                area_type,
                projection,
                format,
                ..
            } => {
                assert_eq!(metadata_uuid, "c777d53d-8fc0-4602-a271-b800a5d182a2");
                assert_eq!(email, "kari@example.no");
                assert_eq!(area_code, "03");
                assert_eq!(area_type, "fylke");
                assert_eq!(projection, "25833");
                assert_eq!(format, "SOSI");
            }
            other => panic!("expected Order, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["kartklient", "-vv", "search", "x"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        // --help causes early exit, so we check it returns an error with Help kind
        let result = Args::try_parse_from(["kartklient", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_flag_shows_version() {
        let result = Args::try_parse_from(["kartklient", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_missing_subcommand_rejected() {
        let result = Args::try_parse_from(["kartklient"]);
        assert!(result.is_err());
    }
}
