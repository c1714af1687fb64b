use botherd::application::{
    init, ps, ComposeService, ConfigService, LogsService, RegistryService, StartService,
    StatusService, StopService,
};
use botherd::application::stop::StopOutcome;
use botherd::cli::{
    format_bot_list, format_process_list, format_status_list, Cli, Commands, ComposeCommands,
};
use botherd::error::BotherdError;
use botherd::infrastructure::FileSystemRepository;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BotherdError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Add {
            name,
            dir,
            command,
            log,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let spec = RegistryService::new(repo).add(&name, dir, command, log)?;
            println!(
                "Registered bot '{}' (dir={}, command={:?})",
                name,
                spec.dir.display(),
                spec.command
            );
            Ok(())
        }
        Some(Commands::Remove { name }) => {
            let repo = FileSystemRepository::discover()?;
            RegistryService::new(repo).remove(&name)?;
            println!("Removed bot '{}'", name);
            Ok(())
        }
        Some(Commands::List) => {
            let repo = FileSystemRepository::discover()?;
            let bots = RegistryService::new(repo).list()?;
            print!("{}", format_bot_list(&bots));
            Ok(())
        }
        Some(Commands::Start { name, all }) => {
            let repo = FileSystemRepository::discover()?;
            let service = StartService::new(repo);

            match (name, all) {
                (Some(name), false) => {
                    let pid = service.execute(&name)?;
                    println!("Started bot '{}' (PID {})", name, pid);
                    Ok(())
                }
                (None, true) => {
                    for (name, pid) in service.execute_all()? {
                        println!("Started bot '{}' (PID {})", name, pid);
                    }
                    Ok(())
                }
                _ => Err(BotherdError::Config(
                    "Pass a bot name or --all (but not both)".to_string(),
                )),
            }
        }
        Some(Commands::Stop {
            name,
            all,
            pid,
            force,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let service = StopService::new(repo);

            match (name, all, pid) {
                (None, false, Some(pid)) => {
                    report_stop(None, service.execute_pid(pid, force)?);
                    Ok(())
                }
                (Some(name), false, None) => {
                    let outcome = service.execute(&name, force)?;
                    report_stop(Some(&name), outcome);
                    Ok(())
                }
                (None, true, None) => {
                    let outcomes = service.execute_all(force)?;
                    if outcomes.is_empty() {
                        println!("No bots were running");
                    }
                    for (name, outcome) in outcomes {
                        report_stop(Some(&name), outcome);
                    }
                    Ok(())
                }
                _ => Err(BotherdError::Config(
                    "Pass a bot name, --all, or --pid".to_string(),
                )),
            }
        }
        Some(Commands::Status { name }) => {
            let repo = FileSystemRepository::discover()?;
            let service = StatusService::new(repo);

            let statuses = match name {
                Some(name) => vec![service.execute(&name)?],
                None => service.execute_all()?,
            };
            print!("{}", format_status_list(&statuses));
            Ok(())
        }
        Some(Commands::Logs {
            name,
            lines,
            follow,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let service = LogsService::new(repo);

            if follow {
                service.follow(&name, lines)
            } else {
                for line in service.tail(&name, lines)? {
                    println!("{}", line);
                }
                Ok(())
            }
        }
        Some(Commands::Ps { pattern }) => {
            let matches = ps::ps(&pattern)?;
            print!("{}", format_process_list(&matches));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("grace_secs = {}", config.grace_secs);
                println!("created = {}", config.created.to_rfc3339());
                println!("bots = {}", config.bots.len());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: botherd config [--list | <key> [<value>]]");
                println!("Valid keys: grace_secs, created");
                Ok(())
            }
        }
        Some(Commands::Compose { command }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ComposeService::new(&repo);

            match command {
                ComposeCommands::Build { service: svc } => service.build(svc.as_deref()),
                ComposeCommands::Up { service: svc } => service.up(svc.as_deref()),
                ComposeCommands::Logs {
                    service: svc,
                    follow,
                } => service.logs(svc.as_deref(), follow),
                ComposeCommands::Down {
                    volumes,
                    rmi,
                    remove_orphans,
                } => service.down(volumes, rmi, remove_orphans),
                ComposeCommands::Prune { all } => service.prune(all),
            }
        }
        None => {
            println!("botherd - Process supervisor for bot fleets");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn report_stop(name: Option<&str>, outcome: StopOutcome) {
    let label = name.map(|n| format!("bot '{}'", n)).unwrap_or_else(|| "process".to_string());

    match outcome {
        StopOutcome::Stopped { pid } => {
            println!("Stopped {} (PID {})", label, pid);
        }
        StopOutcome::Survived { pid, grace_secs } => {
            println!(
                "Sent signal to {} (PID {}), still running after {}s; try --force",
                label, pid, grace_secs
            );
        }
    }
}
