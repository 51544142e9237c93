use std::{env, process};

use team_ledger::{
    config::ConfigManager,
    core::services::{ProjectService, SummaryService},
    currency::{format_amount, format_balance, format_percentage},
    init,
    storage::JsonStorage,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let (command, target) = match (args.next(), args.next()) {
        (Some(command), Some(target)) => (command, target),
        _ => {
            print_usage();
            process::exit(1);
        }
    };

    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    let store = JsonStorage::new(Some(manager.records_dir(&config)))?;
    let currency = config.currency.as_str();

    match command.as_str() {
        "projects" => {
            let projects = ProjectService::for_member(&store, &target)?;
            if projects.is_empty() {
                println!("{target} is not assigned to any projects yet.");
            }
            for project in projects {
                println!(
                    "{}\t{}\t{}",
                    project.name,
                    project.status,
                    format_amount(project.budget, currency)
                );
            }
        }
        "summary" => {
            let (project, summary) = SummaryService::project_report(&store, &target)?;
            println!("Project: {}", project.name);
            println!("Status: {}", project.status);
            println!("Budget: {}", format_amount(summary.budget, currency));
            println!(
                "Total Expenses: {}",
                format_amount(summary.total_expenses, currency)
            );
            println!("Profit: {}", format_amount(summary.profit, currency));
            for (member, account) in summary.accounts_in(&project.team) {
                println!(
                    "{member}: paid {} | received {} | share {} ({}) | balance {} [{}]",
                    format_amount(account.expenses_paid, currency),
                    format_amount(account.money_received, currency),
                    format_amount(account.profit_share, currency),
                    format_percentage(account.profit_percentage),
                    format_balance(account.balance, currency),
                    account.standing().label(),
                );
            }
            for advisory in &summary.advisories {
                println!("Warning: {advisory}");
            }
        }
        "json" => {
            let summary = SummaryService::project_finances(&store, &target)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        "audit" => {
            for name in SummaryService::unrostered(&store, &target)? {
                println!("{name}");
            }
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: team_ledger_cli <command> <arg>\n\
         Commands:\n  \
         projects <member>\n  \
         summary <project>\n  \
         json <project>\n  \
         audit <project>"
    );
}
