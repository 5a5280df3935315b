mod gate;

use crate::cli::Command;
use crate::setup;
use migra_core::application::{pipeline, readers, AppClient, ReconcileOutcome, ReconciliationEngine};
use migra_core::domain::cost::{self, CostParams};
use migra_core::domain::{Address, TransactionGroup};
use migra_core::foundation::util::conversion::display_to_base_units;
use migra_core::infrastructure::config::AppConfig;
use migra_core::infrastructure::rpc::{HttpIndexerRpc, HttpLedgerRpc, LedgerRpc};
use migra_core::CoordinatorError;
use std::path::Path;

pub async fn dispatch(command: Command, config: &AppConfig) -> Result<(), CoordinatorError> {
    match command {
        Command::Create => {
            let (client, rpc, _) = connect(config)?;
            let group = client.create_application()?;
            submit_as_operator(&rpc, group).await
        }
        Command::Update => {
            let (client, rpc, _) = connect(config)?;
            let group = client.update_application()?;
            submit_as_operator(&rpc, group).await
        }
        Command::Delete => {
            let (client, rpc, _) = connect(config)?;
            let group = client.delete_application()?;
            submit_as_operator(&rpc, group).await
        }
        Command::Setup => {
            let (client, rpc, _) = connect(config)?;
            let group = client.setup()?;
            submit_as_operator(&rpc, group).await
        }
        Command::Fund { amount } => {
            let (client, rpc, _) = connect(config)?;
            let base_units = display_to_base_units(&amount)?;
            let group = client.fund_application(base_units)?;
            submit_as_operator(&rpc, group).await
        }
        Command::AddRecipients { addresses } => {
            let (client, rpc, _) = connect(config)?;
            let accounts = parse_address_list(&addresses)?;
            let group = client.register_recipients(&accounts)?;
            submit_as_operator(&rpc, group).await
        }
        Command::Cost { file } => {
            let accounts = load_address_file(&file)?;
            let projection = cost::project(accounts.len() as u64, &CostParams::default());
            println!("entries {}", projection.entry_count);
            println!("min_balance_cost {}", projection.min_balance);
            println!("num_operations {}", projection.operation_count);
            println!("fees {}", projection.fees);
            Ok(())
        }
        Command::Reconcile { file } => {
            let (client, rpc, indexer) = connect(config)?;
            let desired = load_address_file(&file)?;
            let credential = setup::operator_credential()?;
            let gate = gate::StdinConfirm;
            let engine = ReconciliationEngine::new(&client, &rpc, &indexer, &gate);
            match engine.run(&desired, &credential).await? {
                ReconcileOutcome::Aborted { .. } => {
                    println!("aborted");
                }
                ReconcileOutcome::Submitted { receipts, .. } => {
                    for (index, receipt) in receipts.iter().enumerate() {
                        println!("{} {}", index + 1, receipt.submission);
                    }
                }
            }
            Ok(())
        }
        Command::ListRecipients => {
            let (client, rpc, _) = connect(config)?;
            let recipients = readers::list_registered_accounts(&rpc, client.app_id()).await?;
            println!("{}", recipients.len());
            for account in recipients {
                println!("{account}");
            }
            Ok(())
        }
        Command::ListClaims => {
            let (client, _, indexer) = connect(config)?;
            let claims = readers::list_claimed_accounts(&indexer, &client.application_account(), client.asset_id()).await?;
            println!("{}", claims.len());
            for account in claims {
                println!("{account}");
            }
            Ok(())
        }
    }
}

fn connect(config: &AppConfig) -> Result<(AppClient, HttpLedgerRpc, HttpIndexerRpc), CoordinatorError> {
    let client = AppClient::from_config(config)?;
    let rpc = HttpLedgerRpc::new(config.node.url.clone(), config.node.token.clone())?;
    let indexer = HttpIndexerRpc::new(config.indexer.url.clone(), config.indexer.token.clone())?;
    Ok((client, rpc, indexer))
}

async fn submit_as_operator(rpc: &dyn LedgerRpc, mut group: TransactionGroup) -> Result<(), CoordinatorError> {
    let credential = setup::operator_credential()?;
    group.authorize(&credential, None)?;
    let outcome = pipeline::submit(rpc, &group, true).await?;
    match outcome.finality {
        Some(finality) => println!("{} {}", finality.confirmed_round, outcome.submission),
        None => println!("{}", outcome.submission),
    }
    Ok(())
}

fn parse_address_list(addresses: &str) -> Result<Vec<Address>, CoordinatorError> {
    addresses.split(',').map(|address| address.trim().parse::<Address>()).collect()
}

fn load_address_file(path: &Path) -> Result<Vec<Address>, CoordinatorError> {
    let file = std::fs::File::open(path)
        .map_err(|err| CoordinatorError::Config(format!("cannot open {}: {err}", path.display())))?;
    let entries: Vec<String> = serde_json::from_reader(file)
        .map_err(|err| CoordinatorError::Config(format!("malformed address list {}: {err}", path.display())))?;
    entries.iter().map(|entry| entry.parse::<Address>()).collect()
}
