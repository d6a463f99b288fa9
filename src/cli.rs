use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use crate::config::ZohoConfig;
use crate::error::CrmLensError;
use crate::output;
use crate::providers::zoho::ZohoProvider;
use crate::scheduler::{self, RefreshTick};

#[derive(Parser)]
#[command(name = "crmlens")]
#[command(author, version, about = "CRM Sales Insights Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the collected insights as JSON to this path
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the Deals module and render the sales dashboard
    Deals {
        #[arg(long, env = "ZOHO_CLIENT_ID")]
        client_id: String,

        #[arg(long, env = "ZOHO_CLIENT_SECRET", hide_env_values = true)]
        client_secret: String,

        #[arg(long, env = "ZOHO_ORG_ID")]
        org_id: String,

        /// Accounts (OAuth) base URL for your datacenter
        #[arg(long, default_value = "https://accounts.zoho.in")]
        accounts_url: String,

        /// CRM API base URL, including the API version
        #[arg(long, default_value = "https://www.zohoapis.in/crm/v8")]
        api_url: String,

        /// Keep running and refresh on a fixed interval
        #[arg(short, long, default_value_t = false)]
        watch: bool,

        /// Refresh interval in seconds for watch mode
        #[arg(short, long, default_value_t = 300)]
        every: u64,
    },
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Deals {
                client_id,
                client_secret,
                org_id,
                accounts_url,
                api_url,
                watch,
                every,
            } => {
                let config = ZohoConfig {
                    client_id: client_id.clone(),
                    client_secret: client_secret.clone(),
                    org_id: org_id.clone(),
                    accounts_url: accounts_url.clone(),
                    api_url: api_url.clone(),
                };

                self.execute_deals(config, *watch, *every).await
            }
        }
    }

    async fn execute_deals(&self, config: ZohoConfig, watch: bool, every: u64) -> Result<()> {
        info!(
            "Collecting deal insights for organization: {}",
            config.org_id
        );

        let provider = ZohoProvider::new(config)?;

        if watch {
            let provider_ref = &provider;
            scheduler::watch(Duration::from_secs(every), move || {
                let provider = provider_ref;
                async move {
                    if let Err(e) = self.run_refresh(provider, true).await {
                        output::print_run_error(&e);
                    }
                }
            })
            .await;
            return Ok(());
        }

        if let Err(e) = self.run_refresh(&provider, false).await {
            output::print_run_error(&e);
            std::process::exit(1);
        }

        Ok(())
    }

    /// One pipeline run: collect, render, optionally export.
    ///
    /// Rendering an error is the caller's job so that a failed run in
    /// watch mode leaves the loop alive.
    async fn run_refresh(&self, provider: &ZohoProvider, show_tick: bool) -> Result<(), CrmLensError> {
        let insights = provider.collect_insights().await?;

        if show_tick {
            output::print_refresh_tick(&RefreshTick::now());
        }

        if insights.total_deals == 0 {
            output::print_empty_warning();
        } else {
            output::print_dashboard(&insights);
        }

        if let Some(output_path) = &self.output {
            let json_output = if self.pretty {
                serde_json::to_string_pretty(&insights)?
            } else {
                serde_json::to_string(&insights)?
            };
            std::fs::write(output_path, json_output)?;
            info!("Insights written to: {}", output_path.display());
        }

        Ok(())
    }
}
