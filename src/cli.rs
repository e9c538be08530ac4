//! Command-line interface definitions for watchdial.
//!
//! One binary, three subcommands — one per batch component. All paths have
//! defaults matching the repository layout, so a bare `watchdial build` run
//! from the repo root does the right thing.

use clap::{Parser, Subcommand};

/// Command-line arguments for the watchdial site tooling.
///
/// # Examples
///
/// ```sh
/// # Refresh the news file
/// watchdial fetch-news
///
/// # Fill in missing glossary images (no-op without the key)
/// UNSPLASH_ACCESS_KEY=... watchdial fetch-images
///
/// # Assemble the page
/// watchdial build -o public/index.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aggregate the configured RSS feeds into the news file
    FetchNews {
        /// Output path for the article list
        #[arg(short, long, default_value = "data/news.json")]
        output: String,
    },

    /// Fill in missing dictionary images from the image-search API
    FetchImages {
        /// Dictionary file, read and rewritten in place
        #[arg(short, long, default_value = "data/dictionary.json")]
        dictionary: String,

        /// Unsplash access key; when absent this step is skipped
        #[arg(long, env = "UNSPLASH_ACCESS_KEY")]
        access_key: Option<String>,
    },

    /// Render the final page from the template and both data files
    Build {
        /// HTML template carrying the four placeholder tokens
        #[arg(short, long, default_value = "template.html")]
        template: String,

        /// Aggregated news articles
        #[arg(long, default_value = "data/news.json")]
        news: String,

        /// Glossary dictionary
        #[arg(long, default_value = "data/dictionary.json")]
        dictionary: String,

        /// Where to write the finished page
        #[arg(short, long, default_value = "index.html")]
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_news_defaults() {
        let cli = Cli::parse_from(["watchdial", "fetch-news"]);
        match cli.command {
            Command::FetchNews { output } => assert_eq!(output, "data/news.json"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_fetch_images_key_flag() {
        let cli = Cli::parse_from([
            "watchdial",
            "fetch-images",
            "--access-key",
            "abc123",
            "-d",
            "/tmp/dict.json",
        ]);
        match cli.command {
            Command::FetchImages {
                dictionary,
                access_key,
            } => {
                assert_eq!(dictionary, "/tmp/dict.json");
                assert_eq!(access_key.as_deref(), Some("abc123"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_build_paths() {
        let cli = Cli::parse_from([
            "watchdial",
            "build",
            "-t",
            "site/template.html",
            "-o",
            "public/index.html",
        ]);
        match cli.command {
            Command::Build {
                template,
                news,
                dictionary,
                output,
            } => {
                assert_eq!(template, "site/template.html");
                assert_eq!(news, "data/news.json");
                assert_eq!(dictionary, "data/dictionary.json");
                assert_eq!(output, "public/index.html");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
