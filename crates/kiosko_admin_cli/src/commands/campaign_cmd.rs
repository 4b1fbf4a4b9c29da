//! Campaign management commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use colored::Colorize;
use tracing::instrument;

use kiosko_admin_core::entities::{Campaign, CampaignDraft, CampaignPatch};
use kiosko_admin_core::usecases::{
    ArchiveCampaign, CreateCampaign, GetCampaignById, GetCampaigns, UpdateCampaign,
};

use crate::composition::CompositionRoot;
use crate::errors::Error;

/// Campaign subcommands.
#[derive(Subcommand, Debug)]
pub enum CampaignCommands {
    /// List all campaigns
    List,

    /// Show one campaign
    Show {
        /// Campaign id
        id: u64,
    },

    /// Create a campaign
    Create(CreateArgs),

    /// Update a campaign
    Update(UpdateArgs),

    /// Archive a campaign
    Archive {
        /// Campaign id
        id: u64,
    },
}

/// Arguments for creating a campaign.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Campaign name
    #[arg(long)]
    pub name: String,

    /// First day of the campaign (YYYY-MM-DD)
    #[arg(long)]
    pub starts_on: Option<NaiveDate>,

    /// Last day of the campaign (YYYY-MM-DD)
    #[arg(long)]
    pub ends_on: Option<NaiveDate>,
}

/// Arguments for updating a campaign.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Campaign id
    pub id: u64,

    /// New campaign name
    #[arg(long)]
    pub name: Option<String>,

    /// First day of the campaign (YYYY-MM-DD)
    #[arg(long)]
    pub starts_on: Option<NaiveDate>,

    /// Last day of the campaign (YYYY-MM-DD)
    #[arg(long)]
    pub ends_on: Option<NaiveDate>,

    /// Lock or unlock the campaign for newsroom staff
    #[arg(long)]
    pub locked: Option<bool>,
}

fn print_campaign(campaign: &Campaign) {
    let flags = match (campaign.is_locked, campaign.is_archived) {
        (true, true) => " [locked, archived]",
        (true, false) => " [locked]",
        (false, true) => " [archived]",
        (false, false) => "",
    };
    let dates = match (campaign.starts_on, campaign.ends_on) {
        (Some(from), Some(to)) => format!(" {from} → {to}"),
        (Some(from), None) => format!(" from {from}"),
        (None, Some(to)) => format!(" until {to}"),
        (None, None) => String::new(),
    };
    println!(
        "{:>6}  {}{}{}",
        campaign.id.to_string().bold(),
        campaign.name,
        dates,
        flags.dimmed()
    );
}

/// Executes the specified campaign command.
#[instrument(skip(root, cmd))]
pub async fn execute(root: &CompositionRoot, cmd: &CampaignCommands) -> Result<(), Error> {
    match cmd {
        CampaignCommands::List => {
            let usecase = root.resolve(|| GetCampaigns::new(root.campaign_service()));
            match usecase.handle().await? {
                None => println!("{}", "The server returned no campaign listing.".yellow()),
                Some(campaigns) if campaigns.is_empty() => println!("No campaigns."),
                Some(campaigns) => {
                    for campaign in &campaigns {
                        print_campaign(campaign);
                    }
                }
            }
            Ok(())
        }
        CampaignCommands::Show { id } => {
            let usecase = root.resolve(|| GetCampaignById::new(root.campaign_service()));
            match usecase.handle(*id).await? {
                Some(campaign) => print_campaign(&campaign),
                None => println!("{}", format!("No campaign with id {id}.").yellow()),
            }
            Ok(())
        }
        CampaignCommands::Create(args) => {
            let usecase = root.resolve(|| CreateCampaign::new(root.campaign_service()));
            let draft = CampaignDraft {
                name: args.name.clone(),
                starts_on: args.starts_on,
                ends_on: args.ends_on,
            };
            let id = usecase.handle(&draft).await?;
            println!("{}", format!("Created campaign {id}.").green());
            Ok(())
        }
        CampaignCommands::Update(args) => {
            let usecase = root.resolve(|| UpdateCampaign::new(root.campaign_service()));
            let patch = CampaignPatch {
                id: args.id,
                name: args.name.clone(),
                starts_on: args.starts_on,
                ends_on: args.ends_on,
                is_locked: args.locked,
            };
            if usecase.handle(&patch).await? {
                println!("{}", "Campaign updated.".green());
                Ok(())
            } else {
                Err(Error::Rejected("campaign update"))
            }
        }
        CampaignCommands::Archive { id } => {
            let usecase = root.resolve(|| ArchiveCampaign::new(root.campaign_service()));
            if usecase.handle(*id).await? {
                println!("{}", "Campaign archived.".green());
                Ok(())
            } else {
                Err(Error::Rejected("campaign archive"))
            }
        }
    }
}
