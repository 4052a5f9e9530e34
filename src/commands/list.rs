use crate::commands::OutputFlags;
use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::factory::{api_error, Factory};
use crate::resolve::resolve_group;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Group to list ('default' when omitted)
    #[arg(short = 'g', long = "group")]
    pub group: Option<String>,
    /// Page number, starting at 1
    #[arg(long = "page", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    /// Number of artifacts per page
    #[arg(
        long = "limit",
        default_value_t = DEFAULT_PAGE_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_LIMIT as i64)
    )]
    pub limit: u32,
    /// Id of the registry to be used. By default uses currently selected registry
    #[arg(long = "registryId")]
    pub registry_id: Option<String>,
    #[command(flatten)]
    pub output: OutputFlags,
}

impl Default for ListArgs {
    fn default() -> Self {
        ListArgs {
            group: None,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            registry_id: None,
            output: OutputFlags::default(),
        }
    }
}

/// Offset of the first item on a 1-based page
pub fn page_offset(page: u32, limit: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(limit)
}

pub async fn run(args: ListArgs, factory: &mut Factory) -> Result<()> {
    let api = factory.registry(args.registry_id.as_deref())?;
    let group = resolve_group(args.group.as_deref());

    tracing::debug!("listing page {} ({} per page) of group {group}", args.page, args.limit);
    let results = api
        .list_artifacts_in_group(&group, args.limit, page_offset(args.page, args.limit))
        .await
        .map_err(api_error)?;

    factory.render(&results, args.output.output)?;
    Ok(())
}
