// PixivCore - pixiv artwork asset retrieval
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pixiv_core::api::client::{ClientConfig, PixivClient};
use pixiv_core::api::metadata::{ArtworkInfo, ImageSize};
use pixiv_core::download::{ArtworkDownloader, DownloadConfig};
use pixiv_core::file::paths::{animated_archive_file_name, page_file_path};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pixiv-cli")]
#[command(about = "PixivCore CLI - artwork lookup and download", long_about = None)]
struct Cli {
    /// JSON download configuration (output_directory, image_size)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show artwork metadata
    Info {
        /// Artwork id
        id: u64,
    },
    /// Print the resolved URL of a page, or of the ugoira archive
    Url {
        id: u64,
        #[arg(short, long, default_value_t = 0)]
        page: u32,
        /// mini, thumbnail, medium, large or original
        #[arg(short, long)]
        size: Option<ImageSize>,
        /// Resolve the ugoira archive instead of a page
        #[arg(long)]
        ugoira: bool,
    },
    /// Download one page
    Download {
        id: u64,
        #[arg(short, long, default_value_t = 0)]
        page: u32,
        #[arg(short, long)]
        size: Option<ImageSize>,
        /// Destination file (default: {output_directory}/{id}_p{page}.{ext})
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download every page into a folder
    DownloadAll {
        id: u64,
        #[arg(short, long)]
        size: Option<ImageSize>,
        /// Destination folder (default: output_directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download the frame archive of an ugoira
    Ugoira {
        id: u64,
        /// Destination file (default: {output_directory}/{id}_ugoira1920x1080.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let download_config = match &cli.config {
        Some(path) => DownloadConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DownloadConfig::default(),
    };

    let client = PixivClient::with_config(
        ClientConfig::builder()
            .timeout(Duration::from_secs(cli.timeout))
            .build(),
    )?;

    match cli.command {
        Commands::Info { id } => {
            let document = client.fetch_metadata_document(id)?;
            let artwork = ArtworkInfo::new(id, &document);

            println!("Title:     {}", artwork.title()?);
            println!("Author:    {} ({})", artwork.user_name()?, artwork.user_id()?);
            println!("Type:      {}", artwork.illust_type()?);
            println!("Pages:     {}", artwork.page_count()?);
            println!("Created:   {} JST", artwork.creation_timestamp()?);
            println!("Views:     {}", artwork.view_count()?);
            println!("Likes:     {}", artwork.like_count()?);
            println!("Bookmarks: {}", artwork.bookmark_count()?);
            println!("Tags:      {}", artwork.tags()?.join(", "));
        }
        Commands::Url { id, page, size, ugoira } => {
            let document = client.fetch_metadata_document(id)?;
            let artwork = ArtworkInfo::new(id, &document);

            let url = if ugoira {
                artwork.resolve_animated_archive_url()?
            } else {
                artwork.resolve_page_url(page, size.unwrap_or(download_config.image_size))?
            };
            println!("{}", url);
        }
        Commands::Download { id, page, size, output } => {
            let document = client.fetch_metadata_document(id)?;
            let artwork = ArtworkInfo::new(id, &document);

            let path = match output {
                Some(path) => path,
                None => page_file_path(
                    &download_config.output_directory,
                    id,
                    page,
                    &artwork.image_file_extension(page)?,
                )?,
            };

            ArtworkDownloader::new(artwork, &client).download_page(
                &path,
                page,
                size.unwrap_or(download_config.image_size),
            )?;
            println!("Saved {}", path.display());
        }
        Commands::DownloadAll { id, size, output } => {
            let document = client.fetch_metadata_document(id)?;
            let artwork = ArtworkInfo::new(id, &document);

            let folder = output.unwrap_or_else(|| download_config.output_directory.clone());
            let written = ArtworkDownloader::new(artwork, &client)
                .download_all_pages(&folder, size.unwrap_or(download_config.image_size))?;

            for path in written {
                println!("Saved {}", path.display());
            }
        }
        Commands::Ugoira { id, output } => {
            let document = client.fetch_metadata_document(id)?;
            let artwork = ArtworkInfo::new(id, &document);

            let path = output.unwrap_or_else(|| {
                download_config
                    .output_directory
                    .join(animated_archive_file_name(id))
            });

            ArtworkDownloader::new(artwork, &client).download_animated_archive(&path)?;
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}
