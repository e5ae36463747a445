//! News query commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use newsdesk_core::config::AppConfig;
use newsdesk_core::error::AppError;
use newsdesk_core::types::{FilterRequest, Paginated, SortDirection};
use newsdesk_database::NewsRepository;
use newsdesk_entity::news::NewsDto;
use newsdesk_service::ListNewsService;

use crate::output::{self, OutputFormat};

/// Arguments for news commands
#[derive(Debug, Args)]
pub struct NewsArgs {
    /// News subcommand
    #[command(subcommand)]
    pub command: NewsCommand,
}

/// News subcommands
#[derive(Debug, Subcommand)]
pub enum NewsCommand {
    /// List one page of news
    List(ListArgs),
}

/// Paging, ordering and search options for `news list`
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u64>,
    /// Items per page
    #[arg(long)]
    pub limit: Option<u64>,
    /// Text to look for in title or description
    #[arg(short, long)]
    pub search: Option<String>,
    /// Field to order by (title, description, publicationDate, creationDate, updateDate)
    #[arg(long)]
    pub order_by: Option<String>,
    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

impl From<&ListArgs> for FilterRequest {
    fn from(args: &ListArgs) -> Self {
        Self {
            page: args.page,
            limit: args.limit,
            order_by: args.order_by.clone(),
            sort_by: args.desc.then_some(SortDirection::Desc),
            search: args.search.clone(),
        }
    }
}

/// News display row for table output
#[derive(Debug, Serialize, Tabled)]
struct NewsRow {
    /// Public code
    code: String,
    /// Title
    title: String,
    /// Publication date
    published: String,
    /// Created at
    created: String,
}

impl From<&NewsDto> for NewsRow {
    fn from(news: &NewsDto) -> Self {
        Self {
            code: news.code.to_string(),
            title: news.title.clone(),
            published: news
                .publication_date
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            created: news.creation_date.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute news commands
pub async fn execute(
    args: &NewsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let service = ListNewsService::new(Arc::new(NewsRepository::new(db.pool().clone())));

    match &args.command {
        NewsCommand::List(list) => {
            let page = service.perform(FilterRequest::from(list)).await?;
            print_news_page(&page, format);
        }
    }

    db.close().await;
    Ok(())
}

fn print_news_page(page: &Paginated<NewsDto>, format: OutputFormat) {
    let rows: Vec<NewsRow> = page.data.iter().map(NewsRow::from).collect();
    output::print_page(&rows, page, format);
    if format == OutputFormat::Table {
        println!(
            "Page {} of {} ({} total)",
            page.meta.page, page.meta.total_pages, page.meta.total
        );
    }
}
